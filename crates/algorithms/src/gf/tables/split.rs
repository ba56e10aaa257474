//! Split byte tables for GF(2^32)
//!
//! A full product table is out of the question at 32 bits and so is a log
//! walk over 2^32 - 1 elements. Instead each operand is cut into four
//! bytes. Byte `i` of `a` times byte `j` of `b` is
//! `(a_i * b_j) * x^(8(i + j))`, which depends only on the two byte values
//! and on `k = i + j`, so seven 256 x 256 tables cover every partial
//! product and a full product is the XOR of at most sixteen lookups.

use gfcore_params::{GF32_SPLIT_TABLES, GF32_SPLIT_TABLE_SIZE};

use super::super::poly::{clmul_bytes, mul_by_x};

/// Seven partial-product tables, `tables[k][a << 8 | b]`
pub struct SplitTables {
    tables: Box<[u32]>,
}

impl SplitTables {
    /// Build the tables for `polynomial` (degree 32, primitivity already checked)
    pub fn build(polynomial: u64) -> Self {
        let mut tables = vec![0u32; GF32_SPLIT_TABLES * GF32_SPLIT_TABLE_SIZE].into_boxed_slice();

        let (first, _) = tables.split_at_mut(GF32_SPLIT_TABLE_SIZE);
        for (idx, entry) in first.iter_mut().enumerate() {
            *entry = clmul_bytes((idx >> 8) as u8, idx as u8);
        }

        for k in 1..GF32_SPLIT_TABLES {
            let (done, rest) = tables.split_at_mut(k * GF32_SPLIT_TABLE_SIZE);
            let prev = &done[(k - 1) * GF32_SPLIT_TABLE_SIZE..];
            let next = &mut rest[..GF32_SPLIT_TABLE_SIZE];
            for (dst, &src) in next.iter_mut().zip(prev) {
                let mut v = src as u64;
                for _ in 0..8 {
                    v = mul_by_x(v, 32, polynomial);
                }
                *dst = v as u32;
            }
        }

        Self { tables }
    }

    /// Product of two 32-bit elements
    #[inline]
    pub fn multiply(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let mut result = 0u32;
        for i in 0..4 {
            let a_byte = (a >> (8 * i)) & 0xFF;
            if a_byte == 0 {
                continue;
            }
            for j in 0..4 {
                let b_byte = (b >> (8 * j)) & 0xFF;
                let table = (i + j) as usize * GF32_SPLIT_TABLE_SIZE;
                result ^= self.tables[table + ((a_byte << 8) | b_byte) as usize];
            }
        }
        result
    }

    /// `a^e` by square-and-multiply over the split tables
    pub fn pow(&self, mut base: u32, mut exp: u64) -> u32 {
        let mut result = 1u32;
        while exp != 0 {
            if exp & 1 == 1 {
                result = self.multiply(result, base);
            }
            base = self.multiply(base, base);
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse `a^(2^32 - 2)`; `a` must be nonzero
    pub fn inverse(&self, a: u32) -> u32 {
        self.pow(a, (1u64 << 32) - 2)
    }
}
