//! Region operations: bulk XOR and bulk multiply-by-constant
//!
//! Every operation takes an explicit `len` and works on the first `len`
//! bytes of each buffer; buffers may be longer. Overlap between a source
//! and the destination cannot be expressed with two Rust slices, so the
//! aliasing forms of both operations are separate `_in_place` functions.

use gfcore_api::FieldWidth;
use gfcore_internal::xor::{xor_into, xor_to};

use super::tables::FieldTables;
use crate::error::{validate, Result};

mod scaler;

use scaler::Scaler;

/// `dst[i] = a[i] ^ b[i]` for `i < len`
///
/// XOR is field addition for every width, so this needs no tables.
pub fn region_xor(a: &[u8], b: &[u8], dst: &mut [u8], len: usize) -> Result<()> {
    validate::min_length("region_xor: a", a.len(), len)?;
    validate::min_length("region_xor: b", b.len(), len)?;
    validate::min_length("region_xor: dst", dst.len(), len)?;

    xor_to(&a[..len], &b[..len], &mut dst[..len]);
    Ok(())
}

/// `dst[i] ^= src[i]` for `i < len`
pub fn region_xor_in_place(dst: &mut [u8], src: &[u8], len: usize) -> Result<()> {
    validate::min_length("region_xor_in_place: dst", dst.len(), len)?;
    validate::min_length("region_xor_in_place: src", src.len(), len)?;

    xor_into(&mut dst[..len], &src[..len]);
    Ok(())
}

fn check_region(context: &'static str, width: FieldWidth, constant: u32, len: usize) -> Result<()> {
    validate::element(context, constant, width)?;
    validate::multiple_of(context, len, width.element_bytes())
}

/// Multiply every element of `src[..len]` by `constant` into `dst[..len]`,
/// XORing into the existing contents of `dst` when `accumulate` is set.
pub(crate) fn multiply_region(
    tables: &FieldTables,
    src: &[u8],
    constant: u32,
    len: usize,
    dst: &mut [u8],
    accumulate: bool,
) -> Result<()> {
    check_region("region_multiply", tables.width(), constant, len)?;
    validate::min_length("region_multiply: src", src.len(), len)?;
    validate::min_length("region_multiply: dst", dst.len(), len)?;

    let (src, dst) = (&src[..len], &mut dst[..len]);
    match constant {
        0 => {
            if !accumulate {
                dst.fill(0);
            }
        }
        1 => {
            if accumulate {
                xor_into(dst, src);
            } else {
                dst.copy_from_slice(src);
            }
        }
        _ => Scaler::new(tables, constant).apply(src, dst, accumulate),
    }
    Ok(())
}

/// Multiply every element of `buf[..len]` by `constant` in place; with
/// `accumulate` the product is XORed into the original value instead.
pub(crate) fn multiply_region_in_place(
    tables: &FieldTables,
    buf: &mut [u8],
    constant: u32,
    len: usize,
    accumulate: bool,
) -> Result<()> {
    check_region("region_multiply_in_place", tables.width(), constant, len)?;
    validate::min_length("region_multiply_in_place: buf", buf.len(), len)?;

    let buf = &mut buf[..len];
    match (constant, accumulate) {
        (0, false) => buf.fill(0),
        (0, true) | (1, false) => {}
        // a ^ 1 * a
        (1, true) => buf.fill(0),
        _ => Scaler::new(tables, constant).apply_in_place(buf, accumulate),
    }
    Ok(())
}
