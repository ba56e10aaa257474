//! Galois-field GF(2^w) arithmetic for erasure coding
//!
//! Tables for each supported width (8, 16, 32) are built on first use,
//! cached for the life of the process and shared read-only by every caller.
//! The free functions here operate on the default field of the width they
//! are given; [`GaloisField`] carries a width and polynomial so the width
//! does not have to be repeated, and supports custom polynomials.
//!
//! Multi-byte elements are stored little-endian in buffers.

pub mod buffer;
mod element;
pub mod field;
pub(crate) mod poly;
pub mod region;
pub mod tables;

pub use buffer::GaloisBuffer;
pub use field::GaloisField;
pub use region::{region_xor, region_xor_in_place};
pub use tables::{get_tables, get_tables_for, FieldTables, TableKind};

use gfcore_api::{Element, FieldWidth};

use crate::error::Result;

/// Build the default tables for `width` now instead of on first use
pub fn init_field(width: FieldWidth) -> Result<()> {
    get_tables(width).map(|_| ())
}

/// Field product `a * b` in the default field of `width`
pub fn multiply(width: FieldWidth, a: Element, b: Element) -> Result<Element> {
    GaloisField::new(width)?.multiply(a, b)
}

/// Field quotient `a / b` in the default field of `width`
pub fn divide(width: FieldWidth, a: Element, b: Element) -> Result<Element> {
    GaloisField::new(width)?.divide(a, b)
}

/// Multiplicative inverse in the default field of `width`
pub fn inverse(width: FieldWidth, a: Element) -> Result<Element> {
    GaloisField::new(width)?.inverse(a)
}

/// Multiply the elements of `src[..len]` by `constant` into `dst[..len]`
/// over the default field of `width`, XORing into `dst` when `accumulate`
/// is set
pub fn region_multiply(
    width: FieldWidth,
    src: &[u8],
    constant: Element,
    len: usize,
    dst: &mut [u8],
    accumulate: bool,
) -> Result<()> {
    GaloisField::new(width)?.region_multiply(src, constant, len, dst, accumulate)
}

/// In-place form of [`region_multiply`]
pub fn region_multiply_in_place(
    width: FieldWidth,
    buf: &mut [u8],
    constant: Element,
    len: usize,
    accumulate: bool,
) -> Result<()> {
    GaloisField::new(width)?.region_multiply_in_place(buf, constant, len, accumulate)
}
