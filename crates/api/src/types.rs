//! Core value types shared across gfcore crates

use core::fmt;
use core::str::FromStr;

use gfcore_params::{FieldParams, GF16_PARAMS, GF32_PARAMS, GF8_PARAMS};

use crate::error::{Error, Result};

/// A field element of any supported width.
///
/// Elements are carried as `u32` regardless of width; only the low `w`
/// bits may be set.
pub type Element = u32;

/// Width of a binary extension field GF(2^w)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum FieldWidth {
    /// GF(2^8), one byte per element
    W8,
    /// GF(2^16), two bytes per element
    W16,
    /// GF(2^32), four bytes per element
    W32,
}

impl FieldWidth {
    /// Every supported width, narrowest first
    pub const ALL: [FieldWidth; 3] = [FieldWidth::W8, FieldWidth::W16, FieldWidth::W32];

    /// Constants describing the default field of this width
    pub const fn params(self) -> &'static FieldParams {
        match self {
            Self::W8 => &GF8_PARAMS,
            Self::W16 => &GF16_PARAMS,
            Self::W32 => &GF32_PARAMS,
        }
    }

    /// Number of bits in an element
    pub const fn bits(self) -> u32 {
        self.params().bits
    }

    /// Number of bytes an element occupies in a buffer
    pub const fn element_bytes(self) -> usize {
        self.params().element_bytes
    }

    /// Order of the multiplicative group, 2^w - 1
    pub const fn order(self) -> u64 {
        self.params().order
    }

    /// Largest element value, 2^w - 1
    pub const fn max_element(self) -> Element {
        self.params().order as Element
    }

    /// The polynomial used when the caller does not choose one
    pub const fn default_polynomial(self) -> u64 {
        self.params().polynomial
    }

    /// Dense index (0, 1, 2) for per-width lookup arrays
    pub const fn index(self) -> usize {
        match self {
            Self::W8 => 0,
            Self::W16 => 1,
            Self::W32 => 2,
        }
    }

    /// Whether `value` is an element of this field
    #[inline(always)]
    pub const fn contains(self, value: u64) -> bool {
        value <= self.params().order
    }
}

impl TryFrom<u32> for FieldWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            _ => Err(Error::config(
                "FieldWidth",
                format!("unsupported field width {} (expected 8, 16 or 32)", bits),
            )),
        }
    }
}

impl From<FieldWidth> for u32 {
    fn from(width: FieldWidth) -> u32 {
        width.bits()
    }
}

impl FromStr for FieldWidth {
    type Err = Error;

    /// Accepts the bit count with an optional `w` prefix (`"16"`, `"w16"`)
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('w')
            .or_else(|| trimmed.strip_prefix('W'))
            .unwrap_or(trimmed);
        let bits: u32 = digits.parse().map_err(|_| {
            Error::config("FieldWidth", format!("cannot parse field width from {:?}", s))
        })?;
        Self::try_from(bits)
    }
}

impl fmt::Display for FieldWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{})", self.bits())
    }
}

/// Runtime description of a field: its width and, optionally, a polynomial
/// other than the default for that width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    /// Field width
    pub width: FieldWidth,

    /// Primitive polynomial including the leading `x^w` term
    #[cfg_attr(feature = "serde", serde(default))]
    pub polynomial: Option<u64>,
}

impl FieldConfig {
    /// Configuration for the default field of `width`
    pub const fn new(width: FieldWidth) -> Self {
        Self {
            width,
            polynomial: None,
        }
    }

    /// Use `polynomial` instead of the default
    pub const fn with_polynomial(mut self, polynomial: u64) -> Self {
        self.polynomial = Some(polynomial);
        self
    }

    /// The polynomial this configuration resolves to
    pub const fn polynomial_or_default(&self) -> u64 {
        match self.polynomial {
            Some(p) => p,
            None => self.width.default_polynomial(),
        }
    }
}

impl From<FieldWidth> for FieldConfig {
    fn from(width: FieldWidth) -> Self {
        Self::new(width)
    }
}
