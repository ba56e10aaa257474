//! # gfcore
//!
//! Galois-field GF(2^w) arithmetic for erasure coding, over w = 8, 16 and 32.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gfcore = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`api::FieldWidth`] and [`api::FieldConfig`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gfcore-api`]: Error type, field widths and configuration
//! - [`gfcore-params`]: Polynomials, generator and table geometry
//! - [`gfcore-internal`]: Word loads and stores, bulk XOR
//! - [`gfcore-algorithms`]: Tables, element arithmetic and region operations
//!
//! ```
//! use gfcore::prelude::*;
//!
//! let gf = GaloisField::new(FieldWidth::W8).unwrap();
//! assert_eq!(gf.multiply(24, 84).unwrap(), 179);
//! assert_eq!(gf.divide(23, 74).unwrap(), 91);
//! ```

#![forbid(unsafe_code)]

pub use gfcore_algorithms as algorithms;
pub use gfcore_api as api;
pub use gfcore_internal as internal;
pub use gfcore_params as params;

pub use gfcore_algorithms::gf::{
    divide, init_field, inverse, multiply, region_multiply, region_multiply_in_place,
    region_xor, region_xor_in_place,
};

/// Common imports for gfcore users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Field description
    pub use crate::api::{Element, FieldConfig, FieldWidth};

    // Fields and buffers
    pub use crate::algorithms::{GaloisBuffer, GaloisField};
}
