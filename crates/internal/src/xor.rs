//! Word-at-a-time XOR kernels
//!
//! Both kernels walk the buffers in 8-byte words and finish the remainder
//! byte by byte. Each output position depends only on the same position of
//! the inputs, so the word path and the byte path agree bit for bit.

use crate::endian::{load_word, store_word, WORD_BYTES};

/// `dst[i] = a[i] ^ b[i]` for every `i < dst.len()`
///
/// # Panics
///
/// Panics if `a` or `b` is shorter than `dst`.
pub fn xor_to(a: &[u8], b: &[u8], dst: &mut [u8]) {
    let len = dst.len();
    let (a, b) = (&a[..len], &b[..len]);

    let mut a_words = a.chunks_exact(WORD_BYTES);
    let mut b_words = b.chunks_exact(WORD_BYTES);
    let mut d_words = dst.chunks_exact_mut(WORD_BYTES);

    for ((x, y), d) in (&mut a_words).zip(&mut b_words).zip(&mut d_words) {
        store_word(d, load_word(x) ^ load_word(y));
    }

    let tail = a_words
        .remainder()
        .iter()
        .zip(b_words.remainder())
        .zip(d_words.into_remainder());
    for ((x, y), d) in tail {
        *d = x ^ y;
    }
}

/// `dst[i] ^= src[i]` for every `i < dst.len()`
///
/// # Panics
///
/// Panics if `src` is shorter than `dst`.
pub fn xor_into(dst: &mut [u8], src: &[u8]) {
    let src = &src[..dst.len()];

    let mut s_words = src.chunks_exact(WORD_BYTES);
    let mut d_words = dst.chunks_exact_mut(WORD_BYTES);

    for (s, d) in (&mut s_words).zip(&mut d_words) {
        let v = load_word(d) ^ load_word(s);
        store_word(d, v);
    }

    for (s, d) in s_words.remainder().iter().zip(d_words.into_remainder()) {
        *d ^= s;
    }
}
