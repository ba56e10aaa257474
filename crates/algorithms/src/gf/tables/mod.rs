//! Precomputed tables for each supported field width
//!
//! | width | multiply             | divide / inverse     |
//! |-------|----------------------|----------------------|
//! | 8     | 256 x 256 products   | log / antilog        |
//! | 16    | log / antilog        | log / antilog        |
//! | 32    | split byte tables    | exponentiation       |
//!
//! Tables are built once per (width, polynomial) and never change
//! afterwards; see [`get_tables`].

use std::time::Instant;

use gfcore_api::FieldWidth;
use gfcore_params::{GF32_SPLIT_TABLES, GF32_SPLIT_TABLE_SIZE, GF8_PRODUCT_TABLE_SIZE};

use super::poly;
use crate::error::{Error, Result};

mod cache;
pub mod log;
pub mod product;
pub mod split;

pub use cache::{get_tables, get_tables_for, is_initialized};
pub use log::LogTables;
pub use product::ProductTable;
pub use split::SplitTables;

/// Width-specific table layout, chosen once when the tables are built
pub enum TableKind {
    /// GF(2^8): full product table plus log tables
    Gf8 {
        /// Log and antilog tables
        logs: LogTables<u8>,
        /// 256 x 256 product table
        products: ProductTable,
    },
    /// GF(2^16): log tables only
    Gf16 {
        /// Log and antilog tables
        logs: LogTables<u16>,
    },
    /// GF(2^32): split byte tables
    Gf32 {
        /// Seven partial-product tables
        split: SplitTables,
    },
}

/// The immutable table set for one field
pub struct FieldTables {
    width: FieldWidth,
    polynomial: u64,
    kind: TableKind,
}

impl FieldTables {
    /// Build the tables for `polynomial` over `width`.
    ///
    /// Prefer [`get_tables`] / [`get_tables_for`], which build each table
    /// set once and share it.
    pub fn build(width: FieldWidth, polynomial: u64) -> Result<Self> {
        let _span = tracing::debug_span!("build_field_tables", %width, polynomial).entered();
        let started = Instant::now();

        let kind = Self::build_kind(width, polynomial).map_err(|err| {
            tracing::warn!(%width, polynomial, error = %err, "rejected field polynomial");
            err
        })?;

        let tables = Self {
            width,
            polynomial,
            kind,
        };
        tracing::debug!(
            bytes = tables.size_bytes(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "field tables ready"
        );
        Ok(tables)
    }

    fn build_kind(width: FieldWidth, polynomial: u64) -> Result<TableKind> {
        poly::check_shape(width, polynomial)?;
        match width {
            FieldWidth::W8 => {
                let logs = LogTables::<u8>::build(width, polynomial)?;
                let products = ProductTable::build(&logs);
                Ok(TableKind::Gf8 { logs, products })
            }
            FieldWidth::W16 => Ok(TableKind::Gf16 {
                logs: LogTables::<u16>::build(width, polynomial)?,
            }),
            FieldWidth::W32 => {
                if !poly::is_primitive(width, polynomial) {
                    return Err(Error::config(
                        "split table construction",
                        format!("x does not generate {} modulo {:#x}", width, polynomial),
                    ));
                }
                Ok(TableKind::Gf32 {
                    split: SplitTables::build(polynomial),
                })
            }
        }
    }

    /// Field width
    pub fn width(&self) -> FieldWidth {
        self.width
    }

    /// Polynomial the tables were built from
    pub fn polynomial(&self) -> u64 {
        self.polynomial
    }

    /// Width-specific layout
    pub fn kind(&self) -> &TableKind {
        &self.kind
    }

    /// Discrete logarithm base `x` of a nonzero element.
    ///
    /// `None` for zero, for values outside the field, and for GF(2^32),
    /// which keeps no log table.
    pub fn log(&self, a: u32) -> Option<u32> {
        if a == 0 || !self.width.contains(a as u64) {
            return None;
        }
        match &self.kind {
            TableKind::Gf8 { logs, .. } => Some(logs.log(a)),
            TableKind::Gf16 { logs } => Some(logs.log(a)),
            TableKind::Gf32 { .. } => None,
        }
    }

    /// `x^i`; `None` for GF(2^32)
    pub fn antilog(&self, i: u64) -> Option<u32> {
        let i = (i % self.width.order()) as u32;
        match &self.kind {
            TableKind::Gf8 { logs, .. } => Some(logs.antilog(i)),
            TableKind::Gf16 { logs } => Some(logs.antilog(i)),
            TableKind::Gf32 { .. } => None,
        }
    }

    /// Heap bytes held by the tables
    pub fn size_bytes(&self) -> usize {
        match &self.kind {
            TableKind::Gf8 { logs, .. } => {
                logs.log_table().len() + logs.antilog_table().len() + GF8_PRODUCT_TABLE_SIZE
            }
            TableKind::Gf16 { logs } => 2 * (logs.log_table().len() + logs.antilog_table().len()),
            TableKind::Gf32 { .. } => 4 * GF32_SPLIT_TABLES * GF32_SPLIT_TABLE_SIZE,
        }
    }
}

impl core::fmt::Debug for FieldTables {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldTables")
            .field("width", &self.width)
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .field("bytes", &self.size_bytes())
            .finish()
    }
}
