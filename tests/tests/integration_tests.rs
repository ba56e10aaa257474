//! End-to-end tests of the free-function API, exercised the way an
//! erasure-coding layer drives it

use gfcore_algorithms::{self as gf, Error, GaloisBuffer, GaloisField};
use gfcore_api::FieldWidth;
use gfcore_tests::{elementwise_multiply, seeded_buffer};

const BLOCK: usize = 4096;

/// P = D0 + D1 + D2, Q = D0 + 2 D1 + 4 D2
fn encode(width: FieldWidth, data: &[Vec<u8>]) -> (Vec<u8>, Vec<u8>) {
    let mut p = vec![0u8; BLOCK];
    let mut q = vec![0u8; BLOCK];
    let mut coefficient = 1;
    for block in data {
        gf::region_xor_in_place(&mut p, block, BLOCK).unwrap();
        gf::region_multiply(width, block, coefficient, BLOCK, &mut q, true).unwrap();
        coefficient = gf::multiply(width, coefficient, 2).unwrap();
    }
    (p, q)
}

#[test]
fn test_recover_two_lost_blocks() {
    for width in FieldWidth::ALL {
        gf::init_field(width).unwrap();
        let data: Vec<Vec<u8>> = (0..3).map(|i| seeded_buffer(BLOCK, 100 + i)).collect();
        let (p, q) = encode(width, &data);

        // Lose D0 and D1. Strip D2 out of both parities:
        //   P' = D0 + D1, Q' = D0 + 2 D1, so 3 D1 = P' + Q'
        let mut p_partial = p.clone();
        gf::region_xor_in_place(&mut p_partial, &data[2], BLOCK).unwrap();
        let mut q_partial = q.clone();
        gf::region_multiply(width, &data[2], 4, BLOCK, &mut q_partial, true).unwrap();

        let mut sum = vec![0u8; BLOCK];
        gf::region_xor(&p_partial, &q_partial, &mut sum, BLOCK).unwrap();

        let inv3 = gf::inverse(width, 3).unwrap();
        let mut d1 = vec![0u8; BLOCK];
        gf::region_multiply(width, &sum, inv3, BLOCK, &mut d1, false).unwrap();
        assert_eq!(d1, data[1], "{}: D1 not recovered", width);

        let mut d0 = vec![0u8; BLOCK];
        gf::region_xor(&p_partial, &d1, &mut d0, BLOCK).unwrap();
        assert_eq!(d0, data[0], "{}: D0 not recovered", width);
    }
}

#[test]
fn test_divide_matches_inverse_multiply() {
    for width in FieldWidth::ALL {
        for b in [1u32, 2, 3, 0x47, width.max_element()] {
            let a = 0x3C & width.max_element();
            let via_inverse = gf::multiply(width, a, gf::inverse(width, b).unwrap()).unwrap();
            assert_eq!(gf::divide(width, a, b).unwrap(), via_inverse);
        }
    }
}

#[test]
fn test_region_multiply_matches_elementwise() {
    for width in FieldWidth::ALL {
        let field = GaloisField::new(width).unwrap();
        let src = seeded_buffer(1000 * width.element_bytes(), 5);
        let constant = 23761 & width.max_element();

        let mut dst = vec![0u8; src.len()];
        gf::region_multiply(width, &src, constant, src.len(), &mut dst, false).unwrap();
        assert_eq!(dst, elementwise_multiply(&field, &src, constant).unwrap());
    }
}

#[test]
fn test_xor_then_multiply_loop() {
    // a = a ^ b, then a = 23761 * a, repeated over one buffer
    let mut a = seeded_buffer(BLOCK, 1);
    let b = seeded_buffer(BLOCK, 2);
    let mut expected = a.clone();
    let field = GaloisField::new(FieldWidth::W16).unwrap();

    for _ in 0..4 {
        gf::region_xor_in_place(&mut a, &b, BLOCK).unwrap();
        gf::region_multiply_in_place(FieldWidth::W16, &mut a, 23761, BLOCK, false).unwrap();

        for (e, x) in expected.iter_mut().zip(&b) {
            *e ^= x;
        }
        expected = elementwise_multiply(&field, &expected, 23761).unwrap();
    }
    assert_eq!(a, expected);
}

#[test]
fn test_multadd_chain() {
    // buffers[i + 1] += c_i * buffers[i], as a coding pipeline does
    let field = GaloisField::new(FieldWidth::W16).unwrap();
    let mut first = seeded_buffer(512, 9);
    let mut second = seeded_buffer(512, 10);
    let second_before = second.clone();

    let src = GaloisBuffer::new(field, &mut first).unwrap();
    let mut dst = GaloisBuffer::new(field, &mut second).unwrap();
    src.multadd(0x7FFD, &mut dst, true).unwrap();

    let product = elementwise_multiply(&field, src.as_bytes(), 0x7FFD).unwrap();
    let expected: Vec<u8> = second_before.iter().zip(&product).map(|(x, y)| x ^ y).collect();
    assert_eq!(dst.as_bytes(), &expected[..]);
}

#[test]
fn test_errors_surface() {
    let mut dst = [0u8; 6];
    assert!(matches!(
        gf::region_multiply(FieldWidth::W32, &[0u8; 6], 2, 6, &mut dst, false),
        Err(Error::InvalidLength { .. })
    ));
    assert!(matches!(
        gf::inverse(FieldWidth::W8, 0),
        Err(Error::DivisionByZero { .. })
    ));
    assert!(matches!(
        "24".parse::<FieldWidth>(),
        Err(Error::Configuration { .. })
    ));
}
