//! Width-typed view over a caller-owned byte buffer

use gfcore_api::{Element, FieldWidth};
use gfcore_internal::endian::{read_u16, read_u32, write_u16, write_u32};

use super::field::GaloisField;
use super::region::region_xor_in_place;
use crate::error::{validate, Error, LengthRequirement, Result, ResultExt};

/// A byte buffer viewed as a sequence of little-endian field elements.
///
/// The view borrows the bytes mutably for its lifetime and never copies
/// them. Its byte length is always a whole number of elements.
pub struct GaloisBuffer<'a> {
    field: GaloisField,
    bytes: &'a mut [u8],
}

impl<'a> GaloisBuffer<'a> {
    /// View `bytes` as elements of `field`
    pub fn new(field: GaloisField, bytes: &'a mut [u8]) -> Result<Self> {
        validate::multiple_of("GaloisBuffer::new", bytes.len(), field.width().element_bytes())?;
        Ok(Self { field, bytes })
    }

    /// Field the elements belong to
    pub fn field(&self) -> GaloisField {
        self.field
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.bytes.len() / self.field.width().element_bytes()
    }

    /// Whether the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Element at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<Element> {
        let bytes = self.bytes.get(self.element_range(index)?)?;
        Some(match self.field.width() {
            FieldWidth::W8 => bytes[0] as Element,
            FieldWidth::W16 => read_u16(bytes) as Element,
            FieldWidth::W32 => read_u32(bytes),
        })
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: usize, value: Element) -> Result<()> {
        let width = self.field.width();
        validate::element("GaloisBuffer::set", value, width)?;

        let actual = self.bytes.len();
        let range = self.element_range(index).ok_or(Error::InvalidLength {
            context: "GaloisBuffer::set",
            required: LengthRequirement::AtLeast(usize::MAX),
            actual,
        })?;
        let required = LengthRequirement::AtLeast(range.end);
        let bytes = self.bytes.get_mut(range).ok_or(Error::InvalidLength {
            context: "GaloisBuffer::set",
            required,
            actual,
        })?;
        match width {
            FieldWidth::W8 => bytes[0] = value as u8,
            FieldWidth::W16 => write_u16(bytes, value as u16),
            FieldWidth::W32 => write_u32(bytes, value),
        }
        Ok(())
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// `dest = constant * self`, or `dest += constant * self` when `add` is set
    pub fn multadd(&self, constant: Element, dest: &mut GaloisBuffer<'_>, add: bool) -> Result<()> {
        self.check_peer("GaloisBuffer::multadd", dest)?;
        self.field
            .region_multiply(self.bytes, constant, self.bytes.len(), dest.bytes, add)
            .with_context("GaloisBuffer::multadd")
    }

    /// `self += other` (element-wise XOR)
    pub fn add_assign(&mut self, other: &GaloisBuffer<'_>) -> Result<()> {
        self.check_peer("GaloisBuffer::add_assign", other)?;
        let len = self.bytes.len();
        region_xor_in_place(self.bytes, other.bytes, len).with_context("GaloisBuffer::add_assign")
    }

    /// `self = constant * self`
    pub fn scale(&mut self, constant: Element) -> Result<()> {
        let len = self.bytes.len();
        self.field
            .region_multiply_in_place(self.bytes, constant, len, false)
            .with_context("GaloisBuffer::scale")
    }

    /// Byte range of element `index`; `None` when it overflows `usize`
    fn element_range(&self, index: usize) -> Option<core::ops::Range<usize>> {
        let size = self.field.width().element_bytes();
        let start = index.checked_mul(size)?;
        Some(start..start.checked_add(size)?)
    }

    fn check_peer(&self, context: &'static str, other: &GaloisBuffer<'_>) -> Result<()> {
        if self.field != other.field {
            return Err(Error::config(
                context,
                format!(
                    "buffers belong to different fields ({:?} vs {:?})",
                    self.field, other.field
                ),
            ));
        }
        validate::length(context, other.bytes.len(), self.bytes.len())
    }
}

impl core::fmt::Debug for GaloisBuffer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GaloisBuffer")
            .field("field", &self.field)
            .field("elements", &self.len())
            .finish()
    }
}
