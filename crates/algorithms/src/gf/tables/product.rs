//! Full 256 x 256 product table for GF(2^8)

use gfcore_params::{BYTE_VALUES, GF8_PRODUCT_TABLE_SIZE};

use super::log::LogTables;

/// `table[a << 8 | b] = a * b` for every pair of bytes
pub struct ProductTable {
    table: Box<[u8]>,
}

impl ProductTable {
    /// Fill the table from log/antilog tables of the same field
    pub fn build(logs: &LogTables<u8>) -> Self {
        let mut table = vec![0u8; GF8_PRODUCT_TABLE_SIZE].into_boxed_slice();
        for a in 1..BYTE_VALUES {
            let row = &mut table[a * BYTE_VALUES..(a + 1) * BYTE_VALUES];
            for (b, entry) in row.iter_mut().enumerate().skip(1) {
                *entry = logs.multiply(a as u32, b as u32) as u8;
            }
        }
        Self { table }
    }

    /// Product of two bytes
    #[inline(always)]
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        self.table[(a as usize) << 8 | b as usize]
    }

    /// The 256 products `constant * b`, indexed by `b`
    #[inline(always)]
    pub fn row(&self, constant: u8) -> &[u8; BYTE_VALUES] {
        let start = (constant as usize) * BYTE_VALUES;
        self.table[start..start + BYTE_VALUES]
            .try_into()
            .unwrap_or_else(|_| unreachable!("product table rows are 256 bytes"))
    }
}
