//! Validation utilities for field arithmetic primitives

use gfcore_api::FieldWidth;

use super::{Error, LengthRequirement, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            required: LengthRequirement::Exactly(expected),
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            required: LengthRequirement::AtLeast(min),
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of elements
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if actual % unit != 0 {
        return Err(Error::InvalidLength {
            context,
            required: LengthRequirement::MultipleOf(unit),
            actual,
        });
    }
    Ok(())
}

/// Validate that a value is an element of the field
#[inline(always)]
pub fn element(context: &'static str, value: u32, width: FieldWidth) -> Result<()> {
    if !width.contains(value as u64) {
        return Err(Error::InvalidElement {
            context,
            value: value as u64,
            width,
        });
    }
    Ok(())
}

/// Validate that a divisor is not the zero element
#[inline(always)]
pub fn nonzero(context: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(Error::DivisionByZero { context });
    }
    Ok(())
}
