//! Lexical normalization helpers.
//!
//! - [`naming`]: canonical snake_case names for mixed-case API identifiers.
//! - [`ini`]: a forgiving reader for INI-style credentials/profile text.
//! - [`credentials`]: pick a profile out of a shared credentials file.

pub mod config;
pub mod credentials;
pub mod error;
pub mod ini;
pub mod naming;

pub use error::LexnormError;
pub use ini::{Document, parse};
pub use naming::{CaseConverter, underscore};
