//! First use of the table cache from many threads at once

use std::sync::{Arc, Barrier};
use std::thread;

use gfcore_algorithms::{get_tables, get_tables_for, FieldTables, GaloisField, TableKind};
use gfcore_api::FieldWidth;
use gfcore_tests::{reference_multiply, seeded_buffer};

const THREADS: usize = 8;

/// Start `THREADS` threads together and collect what each returns
fn race<T, F>(f: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(THREADS));
    let f = Arc::new(f);
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let f = Arc::clone(&f);
            thread::spawn(move || {
                barrier.wait();
                f(i)
            })
        })
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

fn all_same(tables: &[&'static FieldTables]) -> bool {
    tables.windows(2).all(|w| std::ptr::eq(w[0], w[1]))
}

#[test]
fn test_concurrent_default_initialization() {
    for width in FieldWidth::ALL {
        let tables = race(move |_| get_tables(width).unwrap());
        assert!(all_same(&tables), "{}: threads saw different tables", width);
        assert_eq!(tables[0].width(), width);
    }
}

#[test]
fn test_gf8_rebuild_is_deterministic() {
    let built: Vec<FieldTables> = race(|_| FieldTables::build(FieldWidth::W8, 0x11D).unwrap());
    let cached = get_tables(FieldWidth::W8).unwrap();

    let TableKind::Gf8 { logs: expected, .. } = cached.kind() else {
        panic!("GF(2^8) tables without log tables");
    };
    for tables in &built {
        let TableKind::Gf8 { logs, .. } = tables.kind() else {
            panic!("GF(2^8) tables without log tables");
        };
        assert_eq!(logs.log_table(), expected.log_table());
        assert_eq!(logs.antilog_table(), expected.antilog_table());
    }
}

#[test]
fn test_concurrent_custom_polynomial() {
    let tables = race(|_| get_tables_for(FieldWidth::W16, 0x1002D).unwrap());
    assert!(all_same(&tables));
    assert_eq!(tables[0].polynomial(), 0x1002D);
    assert!(!std::ptr::eq(tables[0], get_tables(FieldWidth::W16).unwrap()));
}

#[test]
fn test_concurrent_arithmetic_agrees() {
    // Each thread multiplies while others may still be building tables
    let results = race(|i| {
        let width = FieldWidth::ALL[i % FieldWidth::ALL.len()];
        let field = GaloisField::new(width).unwrap();
        let a = 0x1234_5678 & width.max_element();
        let b = (0x9ABC_DEF0 >> i) & width.max_element();
        (width, a, b, field.multiply(a, b).unwrap())
    });

    for (width, a, b, product) in results {
        assert_eq!(product, reference_multiply(width, width.default_polynomial(), a, b));
    }
}

#[test]
fn test_concurrent_region_multiply() {
    let src = Arc::new(seeded_buffer(64 * 1024, 77));
    let outputs = {
        let src = Arc::clone(&src);
        race(move |_| {
            let field = GaloisField::new(FieldWidth::W32).unwrap();
            let mut dst = vec![0u8; src.len()];
            field
                .region_multiply(&src, 0xDEAD_BEEF, src.len(), &mut dst, false)
                .unwrap();
            dst
        })
    };
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert_ne!(outputs[0], *src);
}
