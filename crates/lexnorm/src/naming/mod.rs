//! Identifier naming: canonical snake_case tokens for mixed-case API names.
//!
//! A small table of irregular identifiers is consulted first; everything
//! else goes through the boundary rules in [`boundary`].

pub mod boundary;
pub mod converter;
pub mod default;
pub mod load;

pub use converter::*;
pub use default::builtin_overrides;
pub use load::*;
