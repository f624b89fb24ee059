//! Minimal INI reader for credentials and profile files.
//!
//! Only `[section]` headers and `key = value` pairs are understood. Comments
//! start with `;` at the beginning of a line or after whitespace; everything
//! else that does not fit is dropped without complaint.

pub mod document;
pub mod parse;

pub use document::*;
pub use parse::parse;
