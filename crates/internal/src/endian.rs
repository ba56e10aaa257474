//! Little-endian word access for region kernels
//!
//! Buffers are walked in 8-byte words. The last word of a region may be
//! short, so the padded variants zero-extend on load and truncate on store.

use byteorder::{ByteOrder, LittleEndian};

/// Number of bytes in a region word
pub const WORD_BYTES: usize = 8;

/// Load a full 8-byte little-endian word
#[inline(always)]
pub fn load_word(bytes: &[u8]) -> u64 {
    LittleEndian::read_u64(bytes)
}

/// Store a full 8-byte little-endian word
#[inline(always)]
pub fn store_word(bytes: &mut [u8], value: u64) {
    LittleEndian::write_u64(bytes, value)
}

/// Load up to 8 bytes as a little-endian word, zero-filling missing bytes
#[inline(always)]
pub fn load_word_padded(bytes: &[u8]) -> u64 {
    if bytes.len() >= WORD_BYTES {
        return load_word(bytes);
    }
    let mut buf = [0u8; WORD_BYTES];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

/// Store the low `bytes.len()` bytes of a little-endian word
#[inline(always)]
pub fn store_word_truncated(bytes: &mut [u8], value: u64) {
    if bytes.len() >= WORD_BYTES {
        return store_word(bytes, value);
    }
    let len = bytes.len();
    bytes.copy_from_slice(&value.to_le_bytes()[..len]);
}

/// Read a little-endian u16 element
#[inline(always)]
pub fn read_u16(bytes: &[u8]) -> u16 {
    LittleEndian::read_u16(bytes)
}

/// Write a little-endian u16 element
#[inline(always)]
pub fn write_u16(bytes: &mut [u8], value: u16) {
    LittleEndian::write_u16(bytes, value)
}

/// Read a little-endian u32 element
#[inline(always)]
pub fn read_u32(bytes: &[u8]) -> u32 {
    LittleEndian::read_u32(bytes)
}

/// Write a little-endian u32 element
#[inline(always)]
pub fn write_u32(bytes: &mut [u8], value: u32) {
    LittleEndian::write_u32(bytes, value)
}
