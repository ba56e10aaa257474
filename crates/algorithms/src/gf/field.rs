//! Handle to a built field

use gfcore_api::{Element, FieldConfig, FieldWidth};

use super::region;
use super::tables::{get_tables, get_tables_for, FieldTables};
use crate::error::{validate, Result, ResultExt};

/// A GF(2^w) field backed by the shared, immutable table set for its
/// (width, polynomial) pair.
///
/// The handle is a single reference and is `Copy`; creating one for a field
/// whose tables already exist costs a cache lookup.
///
/// ```
/// use gfcore_algorithms::gf::GaloisField;
/// use gfcore_api::FieldWidth;
///
/// let gf = GaloisField::new(FieldWidth::W8).unwrap();
/// assert_eq!(gf.multiply(24, 84).unwrap(), 179);
/// assert_eq!(gf.divide(23, 74).unwrap(), 91);
/// assert_eq!(gf.inverse(142).unwrap(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct GaloisField {
    tables: &'static FieldTables,
}

impl GaloisField {
    /// The default field of `width`
    pub fn new(width: FieldWidth) -> Result<Self> {
        let tables = get_tables(width).with_context("GaloisField::new")?;
        Ok(Self { tables })
    }

    /// The field of `width` defined by `polynomial` (leading term included).
    ///
    /// The polynomial must be primitive: `x` has to generate every nonzero
    /// element.
    pub fn with_polynomial(width: FieldWidth, polynomial: u64) -> Result<Self> {
        let tables =
            get_tables_for(width, polynomial).with_context("GaloisField::with_polynomial")?;
        Ok(Self { tables })
    }

    /// The field a configuration describes
    pub fn from_config(config: &FieldConfig) -> Result<Self> {
        match config.polynomial {
            Some(polynomial) => Self::with_polynomial(config.width, polynomial),
            None => Self::new(config.width),
        }
    }

    /// Field width
    pub fn width(&self) -> FieldWidth {
        self.tables.width()
    }

    /// Defining polynomial
    pub fn polynomial(&self) -> u64 {
        self.tables.polynomial()
    }

    /// The shared table set
    pub fn tables(&self) -> &'static FieldTables {
        self.tables
    }

    /// Field addition (XOR)
    pub fn add(&self, a: Element, b: Element) -> Result<Element> {
        self.check("add", a)?;
        self.check("add", b)?;
        Ok(a ^ b)
    }

    /// Field product `a * b`
    pub fn multiply(&self, a: Element, b: Element) -> Result<Element> {
        self.check("multiply", a)?;
        self.check("multiply", b)?;
        Ok(self.tables.mul(a, b))
    }

    /// Field quotient `a / b`; fails with `DivisionByZero` when `b == 0`
    pub fn divide(&self, a: Element, b: Element) -> Result<Element> {
        self.check("divide", a)?;
        self.check("divide", b)?;
        validate::nonzero("divide", b)?;
        Ok(self.tables.div(a, b))
    }

    /// Multiplicative inverse; fails with `DivisionByZero` when `a == 0`
    pub fn inverse(&self, a: Element) -> Result<Element> {
        self.check("inverse", a)?;
        validate::nonzero("inverse", a)?;
        Ok(self.tables.inv(a))
    }

    /// `a^e`, with `0^0 = 1`
    pub fn pow(&self, a: Element, e: u64) -> Result<Element> {
        self.check("pow", a)?;
        Ok(self.tables.pow(a, e))
    }

    /// Multiply the elements of `src[..len]` by `constant` into `dst[..len]`.
    ///
    /// Elements are little-endian and `len` must be a whole number of them.
    /// With `accumulate` the products are XORed into `dst` instead of
    /// overwriting it.
    pub fn region_multiply(
        &self,
        src: &[u8],
        constant: Element,
        len: usize,
        dst: &mut [u8],
        accumulate: bool,
    ) -> Result<()> {
        region::multiply_region(self.tables, src, constant, len, dst, accumulate)
    }

    /// Multiply the elements of `buf[..len]` by `constant` in place.
    ///
    /// With `accumulate`, each element `a` becomes `a ^ constant * a`.
    pub fn region_multiply_in_place(
        &self,
        buf: &mut [u8],
        constant: Element,
        len: usize,
        accumulate: bool,
    ) -> Result<()> {
        region::multiply_region_in_place(self.tables, buf, constant, len, accumulate)
    }

    #[inline(always)]
    fn check(&self, context: &'static str, value: Element) -> Result<()> {
        validate::element(context, value, self.width())
    }
}

impl core::fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GaloisField")
            .field("width", &self.width())
            .field("polynomial", &format_args!("{:#x}", self.polynomial()))
            .finish()
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tables, other.tables)
    }
}

impl Eq for GaloisField {}
