//! Public API types for the gfcore library
//!
//! This crate provides the public error type and the small set of value
//! types shared by every gfcore crate: field widths, field configuration and
//! the element representation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;
