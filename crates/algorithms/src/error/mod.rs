//! Error handling for field arithmetic primitives

// Re-export core error handling for convenience
pub use gfcore_api::error::{Error, LengthRequirement, Result, ResultExt};

// Include the validation submodule
pub mod validate;
