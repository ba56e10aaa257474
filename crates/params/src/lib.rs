//! Constant values for gfcore field construction
//!
//! This crate holds the polynomials, generators and table geometry used to
//! build the GF(2^w) tables. It has no dependencies and no runtime state.

pub mod field;
pub mod layout;

pub use field::*;
pub use layout::*;
