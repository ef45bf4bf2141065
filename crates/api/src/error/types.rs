//! Error type definitions for field arithmetic and sequence generation

use std::string::String;

/// Primary error type for the gfcrs ecosystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Generator configuration rejected before construction
    Configuration {
        context: &'static str,
        message: String,
    },

    /// Operands belong to structurally different fields
    FieldMismatch {
        context: &'static str,
    },

    /// Inversion, division or reduction by a zero value
    DivisionByZero {
        context: &'static str,
    },

    /// A coefficient buffer could not be allocated
    Allocation {
        context: &'static str,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for gfcrs operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Configuration { message, .. } => Self::Configuration { context, message },
            Self::FieldMismatch { .. } => Self::FieldMismatch { context },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::Allocation { .. } => Self::Allocation { context },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// True for the configuration class of errors
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => write!(f, "{}: {}", context, message),
            Self::Configuration { context, message } => {
                write!(f, "Configuration error: {}: {}", context, message)
            }
            Self::FieldMismatch { context } => write!(f, "Field mismatch: {}", context),
            Self::DivisionByZero { context } => write!(f, "Division by zero: {}", context),
            Self::Allocation { context } => write!(f, "Allocation failed: {}", context),
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
        }
    }
}
