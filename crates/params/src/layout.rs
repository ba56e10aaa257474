//! Table geometry and buffer layout constants

/// Number of byte values indexed by one split table row
pub const BYTE_VALUES: usize = 256;

/// Entries in the full GF(2^8) product table (256 x 256)
pub const GF8_PRODUCT_TABLE_SIZE: usize = BYTE_VALUES * BYTE_VALUES;

/// Number of 256 x 256 partial-product tables used for GF(2^32).
///
/// A product of byte `i` of one operand and byte `j` of the other lands in
/// table `i + j`, and `i + j` ranges over 0..=6.
pub const GF32_SPLIT_TABLES: usize = 7;

/// Entries in one GF(2^32) split table
pub const GF32_SPLIT_TABLE_SIZE: usize = BYTE_VALUES * BYTE_VALUES;
