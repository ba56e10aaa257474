//! Error type definitions for field arithmetic

use core::fmt;

use crate::types::FieldWidth;

/// What a length check required of a buffer or region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRequirement {
    /// The length must equal this many bytes
    Exactly(usize),
    /// The length must be at least this many bytes
    AtLeast(usize),
    /// The length must be a multiple of this many bytes
    MultipleOf(usize),
}

impl fmt::Display for LengthRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {} bytes", n),
            Self::AtLeast(n) => write!(f, "at least {} bytes", n),
            Self::MultipleOf(n) => write!(f, "a multiple of {} bytes", n),
        }
    }
}

/// Primary error type for field arithmetic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unsupported width or unusable polynomial at table-build time
    #[error("{context}: invalid field configuration: {message}")]
    Configuration {
        /// Operation that rejected the configuration
        context: &'static str,
        /// Why the configuration was rejected
        message: String,
    },

    /// Division or inversion by the zero element
    #[error("{context}: division by zero")]
    DivisionByZero {
        /// Operation that divided by zero
        context: &'static str,
    },

    /// Region or buffer length rejected
    #[error("{context}: invalid length (expected {required}, got {actual})")]
    InvalidLength {
        /// Operation that checked the length
        context: &'static str,
        /// What the length had to satisfy
        required: LengthRequirement,
        /// Length that was supplied
        actual: usize,
    },

    /// Operand does not fit in the field width
    #[error("{context}: element {value:#x} does not fit in {width}")]
    InvalidElement {
        /// Operation that received the element
        context: &'static str,
        /// Offending value
        value: u64,
        /// Width of the field in use
        width: FieldWidth,
    },
}

/// Result type for field arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Configuration error
    pub fn config(context: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Configuration { message, .. } => Self::Configuration { context, message },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::InvalidLength { required, actual, .. } => Self::InvalidLength {
                context,
                required,
                actual,
            },
            Self::InvalidElement { value, width, .. } => Self::InvalidElement {
                context,
                value,
                width,
            },
        }
    }

    /// The context string recorded with this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::Configuration { context, .. }
            | Self::DivisionByZero { context }
            | Self::InvalidLength { context, .. }
            | Self::InvalidElement { context, .. } => context,
        }
    }
}
