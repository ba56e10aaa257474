//! Field arithmetic primitives for erasure coding
//!
//! This crate implements GF(2^w) arithmetic for w = 8, 16 and 32: the
//! precomputed tables each field is built on, single-element multiply,
//! divide and inverse, and the two bulk primitives erasure codes spend
//! their time in, region XOR and region multiply-by-constant.
//!
//! # Example
//!
//! ```
//! use gfcore_algorithms::gf::{self, GaloisField};
//! use gfcore_api::FieldWidth;
//!
//! let gf16 = GaloisField::new(FieldWidth::W16).unwrap();
//! let src = [0x01, 0x00, 0x02, 0x00];
//! let mut dst = [0u8; 4];
//! gf16.region_multiply(&src, 3, src.len(), &mut dst, false).unwrap();
//! assert_eq!(dst, [0x03, 0x00, 0x06, 0x00]);
//!
//! let mut parity = [0u8; 4];
//! gf::region_xor(&src, &dst, &mut parity, 4).unwrap();
//! assert_eq!(parity, [0x02, 0x00, 0x04, 0x00]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Field tables, element arithmetic and region operations
pub mod gf;
pub use gf::{
    divide, get_tables, get_tables_for, init_field, inverse, multiply, region_multiply,
    region_multiply_in_place, region_xor, region_xor_in_place, FieldTables, GaloisBuffer,
    GaloisField, TableKind,
};
