//! Per-constant lookup tables and the word kernels that apply them
//!
//! A region multiply by a fixed constant `c` is linear over GF(2), so the
//! product of any element splits into the XOR of the products of its
//! bytes. For each byte lane we precompute the 256 products
//! `c * (b << 8 * lane)` once per call and then every element costs one
//! lookup per byte. GF(2^8) needs no setup at all: the row of the product
//! table for `c` is already that lookup table.

use gfcore_internal::endian::{
    load_word, load_word_padded, store_word, store_word_truncated, WORD_BYTES,
};
use gfcore_params::BYTE_VALUES;

use super::super::tables::{FieldTables, TableKind};

/// Lookup tables for multiplying by one constant
pub(crate) enum Scaler<'t> {
    /// Row of the GF(2^8) product table
    Bytes(&'t [u8; BYTE_VALUES]),
    /// Low and high byte tables for GF(2^16)
    Split16([[u16; BYTE_VALUES]; 2]),
    /// One table per byte of a GF(2^32) element
    Split32([[u32; BYTE_VALUES]; 4]),
}

/// Expand the products of the eight single-bit bytes into all 256 bytes
fn lane_table(basis: [u32; 8]) -> [u32; BYTE_VALUES] {
    let mut table = [0u32; BYTE_VALUES];
    for b in 1..BYTE_VALUES {
        table[b] = table[b & (b - 1)] ^ basis[b.trailing_zeros() as usize];
    }
    table
}

fn lane_basis(tables: &FieldTables, constant: u32, lane: u32) -> [u32; 8] {
    let mut basis = [0u32; 8];
    for (bit, value) in basis.iter_mut().enumerate() {
        *value = tables.mul(constant, 1 << (8 * lane + bit as u32));
    }
    basis
}

impl<'t> Scaler<'t> {
    /// Build the lookup tables for `constant`, which must be an element of
    /// the field `tables` describes
    pub(crate) fn new(tables: &'t FieldTables, constant: u32) -> Self {
        match tables.kind() {
            TableKind::Gf8 { products, .. } => Scaler::Bytes(products.row(constant as u8)),
            TableKind::Gf16 { .. } => {
                let mut split = [[0u16; BYTE_VALUES]; 2];
                for (lane, out) in split.iter_mut().enumerate() {
                    let full = lane_table(lane_basis(tables, constant, lane as u32));
                    for (dst, src) in out.iter_mut().zip(full) {
                        *dst = src as u16;
                    }
                }
                Scaler::Split16(split)
            }
            TableKind::Gf32 { .. } => {
                let mut split = [[0u32; BYTE_VALUES]; 4];
                for (lane, out) in split.iter_mut().enumerate() {
                    *out = lane_table(lane_basis(tables, constant, lane as u32));
                }
                Scaler::Split32(split)
            }
        }
    }

    /// `dst = c * src`, or `dst ^= c * src` when accumulating
    pub(crate) fn apply(&self, src: &[u8], dst: &mut [u8], accumulate: bool) {
        match self {
            Scaler::Bytes(row) => scale_words(src, dst, accumulate, |w| bytes_word(row, w)),
            Scaler::Split16(t) => scale_words(src, dst, accumulate, |w| split16_word(t, w)),
            Scaler::Split32(t) => scale_words(src, dst, accumulate, |w| split32_word(t, w)),
        }
    }

    /// `buf = c * buf`, or `buf ^= c * buf` when accumulating
    pub(crate) fn apply_in_place(&self, buf: &mut [u8], accumulate: bool) {
        match self {
            Scaler::Bytes(row) => scale_words_in_place(buf, accumulate, |w| bytes_word(row, w)),
            Scaler::Split16(t) => scale_words_in_place(buf, accumulate, |w| split16_word(t, w)),
            Scaler::Split32(t) => scale_words_in_place(buf, accumulate, |w| split32_word(t, w)),
        }
    }
}

#[inline(always)]
fn bytes_word(row: &[u8; BYTE_VALUES], word: u64) -> u64 {
    u64::from_le_bytes(word.to_le_bytes().map(|b| row[b as usize]))
}

#[inline(always)]
fn split16_word(t: &[[u16; BYTE_VALUES]; 2], word: u64) -> u64 {
    let mut out = 0u64;
    for lane in 0..4 {
        let e = (word >> (16 * lane)) as u16;
        let p = t[0][(e & 0xFF) as usize] ^ t[1][(e >> 8) as usize];
        out |= (p as u64) << (16 * lane);
    }
    out
}

#[inline(always)]
fn split32_word(t: &[[u32; BYTE_VALUES]; 4], word: u64) -> u64 {
    let mut out = 0u64;
    for lane in 0..2 {
        let e = (word >> (32 * lane)) as u32;
        let p = t[0][(e & 0xFF) as usize]
            ^ t[1][((e >> 8) & 0xFF) as usize]
            ^ t[2][((e >> 16) & 0xFF) as usize]
            ^ t[3][(e >> 24) as usize];
        out |= (p as u64) << (32 * lane);
    }
    out
}

// A short tail is zero-padded into one word. Lanes never straddle the
// tail boundary because the region is a whole number of elements, and
// c * 0 = 0, so the padding never leaks into stored bytes.

#[inline(always)]
fn scale_words<F: Fn(u64) -> u64>(src: &[u8], dst: &mut [u8], accumulate: bool, f: F) {
    let mut s_words = src.chunks_exact(WORD_BYTES);
    let mut d_words = dst.chunks_exact_mut(WORD_BYTES);

    if accumulate {
        for (s, d) in (&mut s_words).zip(&mut d_words) {
            let v = load_word(d) ^ f(load_word(s));
            store_word(d, v);
        }
    } else {
        for (s, d) in (&mut s_words).zip(&mut d_words) {
            store_word(d, f(load_word(s)));
        }
    }

    let s_tail = s_words.remainder();
    let d_tail = d_words.into_remainder();
    if !s_tail.is_empty() {
        let mut v = f(load_word_padded(s_tail));
        if accumulate {
            v ^= load_word_padded(d_tail);
        }
        store_word_truncated(d_tail, v);
    }
}

#[inline(always)]
fn scale_words_in_place<F: Fn(u64) -> u64>(buf: &mut [u8], accumulate: bool, f: F) {
    let mut words = buf.chunks_exact_mut(WORD_BYTES);
    for w in &mut words {
        let x = load_word(w);
        let p = f(x);
        store_word(w, if accumulate { x ^ p } else { p });
    }

    let tail = words.into_remainder();
    if !tail.is_empty() {
        let x = load_word_padded(tail);
        let p = f(x);
        store_word_truncated(tail, if accumulate { x ^ p } else { p });
    }
}
