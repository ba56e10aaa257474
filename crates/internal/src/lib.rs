//! Internal utilities for the gfcore library
//!
//! Word-at-a-time buffer kernels shared by the region operations. Nothing
//! here knows about field widths; callers slice their buffers to the region
//! length before calling in.

#![forbid(unsafe_code)]

pub mod endian;
pub mod xor;
