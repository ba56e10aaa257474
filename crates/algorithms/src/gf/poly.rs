//! Carry-less polynomial arithmetic over GF(2)
//!
//! These are the slow, table-free routines the field tables are built from.
//! Values are held in `u64` so a degree-32 polynomial and its leading term
//! fit without special cases.

use gfcore_api::FieldWidth;

use crate::error::{Error, Result};

/// Multiply `a` by `x` and reduce modulo `polynomial`
#[inline(always)]
pub(crate) fn mul_by_x(a: u64, bits: u32, polynomial: u64) -> u64 {
    let shifted = a << 1;
    if (shifted >> bits) & 1 == 1 {
        shifted ^ polynomial
    } else {
        shifted
    }
}

/// Shift-and-add product of two field elements
pub(crate) fn shift_multiply(mut a: u64, mut b: u64, bits: u32, polynomial: u64) -> u64 {
    let mut result = 0u64;
    while b != 0 {
        if b & 1 == 1 {
            result ^= a;
        }
        a = mul_by_x(a, bits, polynomial);
        b >>= 1;
    }
    result
}

/// Square-and-multiply exponentiation built on [`shift_multiply`]
pub(crate) fn shift_pow(mut base: u64, mut exp: u64, bits: u32, polynomial: u64) -> u64 {
    let mut result = 1u64;
    while exp != 0 {
        if exp & 1 == 1 {
            result = shift_multiply(result, base, bits, polynomial);
        }
        base = shift_multiply(base, base, bits, polynomial);
        exp >>= 1;
    }
    result
}

/// Unreduced carry-less product of two bytes (degree at most 14)
#[inline(always)]
pub(crate) fn clmul_bytes(a: u8, b: u8) -> u32 {
    let mut result = 0u32;
    for bit in 0..8 {
        if (b >> bit) & 1 == 1 {
            result ^= (a as u32) << bit;
        }
    }
    result
}

/// Check the shape of a polynomial before any table is built.
///
/// The leading term must be exactly `x^w` and the constant term must be
/// present; without it `x` has no inverse and the log walk never returns
/// to one.
pub(crate) fn check_shape(width: FieldWidth, polynomial: u64) -> Result<()> {
    let bits = width.bits();
    if polynomial >> bits != 1 {
        return Err(Error::config(
            "field polynomial",
            format!("{:#x} is not of degree {} for {}", polynomial, bits, width),
        ));
    }
    if polynomial & 1 == 0 {
        return Err(Error::config(
            "field polynomial",
            format!("{:#x} is divisible by x", polynomial),
        ));
    }
    Ok(())
}

/// Order test: the generator `g` spans the whole multiplicative group iff
/// `g^(2^w-1) = 1` and `g^((2^w-1)/p) != 1` for every prime `p | 2^w-1`.
pub(crate) fn is_primitive(width: FieldWidth, polynomial: u64) -> bool {
    let params = width.params();
    let bits = params.bits;
    let order = params.order;
    let g = params.generator as u64;
    if shift_pow(g, order, bits, polynomial) != 1 {
        return false;
    }
    params
        .order_factors
        .iter()
        .all(|p| shift_pow(g, order / p, bits, polynomial) != 1)
}
