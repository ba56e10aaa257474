//! Property-based tests for field arithmetic and region operations

use gfcore_algorithms::{self as gf, GaloisField};
use gfcore_api::FieldWidth;
use gfcore_tests::elementwise_multiply;
use proptest::prelude::*;

fn width() -> impl Strategy<Value = FieldWidth> {
    prop_oneof![
        Just(FieldWidth::W8),
        Just(FieldWidth::W16),
        Just(FieldWidth::W32),
    ]
}

/// A width together with three of its elements
fn width_and_elements() -> impl Strategy<Value = (FieldWidth, u32, u32, u32)> {
    width().prop_flat_map(|w| {
        let max = w.max_element();
        (Just(w), 0..=max, 0..=max, 0..=max)
    })
}

/// A width together with a buffer holding a whole number of its elements
fn width_and_region() -> impl Strategy<Value = (FieldWidth, Vec<u8>)> {
    width().prop_flat_map(|w| {
        let size = w.element_bytes();
        (
            Just(w),
            prop::collection::vec(any::<u8>(), 0..=300).prop_map(move |mut v| {
                v.truncate(v.len() - v.len() % size);
                v
            }),
        )
    })
}

proptest! {
    #[test]
    fn multiply_is_commutative_and_associative((w, a, b, c) in width_and_elements()) {
        let gf = GaloisField::new(w).unwrap();
        prop_assert_eq!(gf.multiply(a, b).unwrap(), gf.multiply(b, a).unwrap());
        prop_assert_eq!(
            gf.multiply(a, gf.multiply(b, c).unwrap()).unwrap(),
            gf.multiply(gf.multiply(a, b).unwrap(), c).unwrap()
        );
    }

    #[test]
    fn multiply_distributes_over_add((w, a, b, c) in width_and_elements()) {
        let gf = GaloisField::new(w).unwrap();
        let left = gf.multiply(a, b ^ c).unwrap();
        let right = gf.multiply(a, b).unwrap() ^ gf.multiply(a, c).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identities_and_inverse((w, a, _b, _c) in width_and_elements()) {
        let gf = GaloisField::new(w).unwrap();
        prop_assert_eq!(gf.multiply(a, 0).unwrap(), 0);
        prop_assert_eq!(gf.multiply(a, 1).unwrap(), a);
        if a != 0 {
            prop_assert_eq!(gf.multiply(a, gf.inverse(a).unwrap()).unwrap(), 1);
        }
    }

    #[test]
    fn divide_undoes_multiply((w, a, b, _c) in width_and_elements()) {
        prop_assume!(b != 0);
        let q = gf::divide(w, a, b).unwrap();
        prop_assert_eq!(gf::multiply(w, q, b).unwrap(), a);
    }

    #[test]
    fn region_xor_is_self_inverse(pair in prop::collection::vec(any::<(u8, u8)>(), 0..=200)) {
        let (a, b): (Vec<u8>, Vec<u8>) = pair.into_iter().unzip();
        let len = a.len();
        let mut tmp = vec![0u8; len];
        let mut back = vec![0u8; len];
        gf::region_xor(&a, &b, &mut tmp, len).unwrap();
        gf::region_xor(&tmp, &b, &mut back, len).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn region_multiply_by_one_copies((w, src) in width_and_region()) {
        let mut dst = vec![0xA5u8; src.len()];
        gf::region_multiply(w, &src, 1, src.len(), &mut dst, false).unwrap();
        prop_assert_eq!(dst, src);
    }

    #[test]
    fn region_multiply_by_zero_clears((w, src) in width_and_region()) {
        let mut dst = vec![0xA5u8; src.len()];
        gf::region_multiply(w, &src, 0, src.len(), &mut dst, false).unwrap();
        prop_assert!(dst.iter().all(|&b| b == 0));
    }

    #[test]
    fn region_multiply_matches_elements(
        (w, src) in width_and_region(),
        raw_constant in any::<u32>(),
    ) {
        let constant = raw_constant & w.max_element();
        let field = GaloisField::new(w).unwrap();
        let mut dst = vec![0u8; src.len()];
        field.region_multiply(&src, constant, src.len(), &mut dst, false).unwrap();
        prop_assert_eq!(dst, elementwise_multiply(&field, &src, constant).unwrap());
    }

    #[test]
    fn region_multiply_is_linear(
        (w, src) in width_and_region(),
        c1 in any::<u32>(),
        c2 in any::<u32>(),
    ) {
        // c1 * s + c2 * s == (c1 + c2) * s
        let (c1, c2) = (c1 & w.max_element(), c2 & w.max_element());
        let mut acc = vec![0u8; src.len()];
        gf::region_multiply(w, &src, c1, src.len(), &mut acc, true).unwrap();
        gf::region_multiply(w, &src, c2, src.len(), &mut acc, true).unwrap();

        let mut direct = vec![0u8; src.len()];
        gf::region_multiply(w, &src, c1 ^ c2, src.len(), &mut direct, false).unwrap();
        prop_assert_eq!(acc, direct);
    }
}
