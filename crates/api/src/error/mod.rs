//! Error handling for the field arithmetic ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, LengthRequirement, Result};

// Re-export error traits
pub use traits::ResultExt;
