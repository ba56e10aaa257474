//! Process-wide table cache
//!
//! Default fields sit in one `OnceCell` per width: the first caller builds,
//! concurrent callers block until that build finishes, and everyone gets
//! the same reference afterwards. Custom polynomials go through a map whose
//! lock is held across the build, so two threads asking for the same
//! (width, polynomial) pair never both build it. Published tables are
//! leaked and live for the rest of the process.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use gfcore_api::FieldWidth;
use once_cell::sync::{Lazy, OnceCell};

use super::FieldTables;
use crate::error::Result;

static DEFAULT_TABLES: [OnceCell<&'static FieldTables>; 3] =
    [OnceCell::new(), OnceCell::new(), OnceCell::new()];

type CustomKey = (FieldWidth, u64);

static CUSTOM_TABLES: Lazy<Mutex<HashMap<CustomKey, &'static FieldTables>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn publish(tables: FieldTables) -> &'static FieldTables {
    Box::leak(Box::new(tables))
}

/// Tables for the default polynomial of `width`, built on first use
pub fn get_tables(width: FieldWidth) -> Result<&'static FieldTables> {
    DEFAULT_TABLES[width.index()]
        .get_or_try_init(|| FieldTables::build(width, width.default_polynomial()).map(publish))
        .copied()
}

/// Tables for an arbitrary polynomial of `width`, built on first use
pub fn get_tables_for(width: FieldWidth, polynomial: u64) -> Result<&'static FieldTables> {
    if polynomial == width.default_polynomial() {
        return get_tables(width);
    }

    let mut cache = CUSTOM_TABLES.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(&tables) = cache.get(&(width, polynomial)) {
        tracing::trace!(%width, polynomial, "field tables cache hit");
        return Ok(tables);
    }

    let tables = publish(FieldTables::build(width, polynomial)?);
    cache.insert((width, polynomial), tables);
    Ok(tables)
}

/// Whether the default tables for `width` have been built
pub fn is_initialized(width: FieldWidth) -> bool {
    DEFAULT_TABLES[width.index()].get().is_some()
}
