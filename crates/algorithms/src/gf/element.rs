//! Single-element arithmetic over a built table set
//!
//! These methods assume their operands are already known to be elements
//! of the field; range and zero checks happen in [`GaloisField`].
//!
//! [`GaloisField`]: super::GaloisField

use super::tables::{FieldTables, TableKind};

impl FieldTables {
    /// `a * b`
    #[inline]
    pub(crate) fn mul(&self, a: u32, b: u32) -> u32 {
        match self.kind() {
            TableKind::Gf8 { products, .. } => products.multiply(a as u8, b as u8) as u32,
            TableKind::Gf16 { logs } => logs.multiply(a, b),
            TableKind::Gf32 { split } => split.multiply(a, b),
        }
    }

    /// `a / b` for `b != 0`
    #[inline]
    pub(crate) fn div(&self, a: u32, b: u32) -> u32 {
        match self.kind() {
            TableKind::Gf8 { logs, .. } => logs.divide(a, b),
            TableKind::Gf16 { logs } => logs.divide(a, b),
            TableKind::Gf32 { split } => {
                if a == 0 {
                    0
                } else {
                    split.multiply(a, split.inverse(b))
                }
            }
        }
    }

    /// `1 / a` for `a != 0`
    #[inline]
    pub(crate) fn inv(&self, a: u32) -> u32 {
        match self.kind() {
            TableKind::Gf8 { logs, .. } => logs.inverse(a),
            TableKind::Gf16 { logs } => logs.inverse(a),
            TableKind::Gf32 { split } => split.inverse(a),
        }
    }

    /// `a^e`
    pub(crate) fn pow(&self, a: u32, e: u64) -> u32 {
        match self.kind() {
            TableKind::Gf8 { logs, .. } => logs.pow(a, e),
            TableKind::Gf16 { logs } => logs.pow(a, e),
            TableKind::Gf32 { split } => match (a, e) {
                (_, 0) => 1,
                (0, _) => 0,
                _ => split.pow(a, e % self.width().order()),
            },
        }
    }
}
