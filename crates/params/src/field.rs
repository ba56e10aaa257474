//! Constants for the binary extension fields GF(2^8), GF(2^16) and GF(2^32)
//!
//! Polynomials are written with their leading `x^w` term included, so a
//! degree-`w` polynomial occupies `w + 1` bits.

/// Generator element used for every default field (the polynomial `x`)
pub const GENERATOR: u32 = 2;

/// x^8 + x^4 + x^3 + x^2 + 1
pub const GF8_POLYNOMIAL: u64 = 0x11D;

/// x^16 + x^12 + x^3 + x + 1
pub const GF16_POLYNOMIAL: u64 = 0x1100B;

/// x^32 + x^22 + x^2 + x + 1
pub const GF32_POLYNOMIAL: u64 = 0x1_0040_0007;

/// Distinct prime factors of 2^8 - 1
pub const GF8_ORDER_FACTORS: &[u64] = &[3, 5, 17];

/// Distinct prime factors of 2^16 - 1
pub const GF16_ORDER_FACTORS: &[u64] = &[3, 5, 17, 257];

/// Distinct prime factors of 2^32 - 1
pub const GF32_ORDER_FACTORS: &[u64] = &[3, 5, 17, 257, 65537];

/// Structure describing one default field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldParams {
    /// Width of an element in bits
    pub bits: u32,

    /// Primitive polynomial including the leading term
    pub polynomial: u64,

    /// Generator of the multiplicative group
    pub generator: u32,

    /// Order of the multiplicative group (2^w - 1)
    pub order: u64,

    /// Size of an element in bytes when stored in a buffer
    pub element_bytes: usize,

    /// Distinct prime factors of `order`
    pub order_factors: &'static [u64],
}

/// GF(2^8) parameters
pub const GF8_PARAMS: FieldParams = FieldParams {
    bits: 8,
    polynomial: GF8_POLYNOMIAL,
    generator: GENERATOR,
    order: (1 << 8) - 1,
    element_bytes: 1,
    order_factors: GF8_ORDER_FACTORS,
};

/// GF(2^16) parameters
pub const GF16_PARAMS: FieldParams = FieldParams {
    bits: 16,
    polynomial: GF16_POLYNOMIAL,
    generator: GENERATOR,
    order: (1 << 16) - 1,
    element_bytes: 2,
    order_factors: GF16_ORDER_FACTORS,
};

/// GF(2^32) parameters
pub const GF32_PARAMS: FieldParams = FieldParams {
    bits: 32,
    polynomial: GF32_POLYNOMIAL,
    generator: GENERATOR,
    order: (1 << 32) - 1,
    element_bytes: 4,
    order_factors: GF32_ORDER_FACTORS,
};
