//! Error handling for field arithmetic and sequence generation

use std::borrow::Cow;
use std::fmt;

use gfcrs_api::{Error as CoreError, Result as CoreResult};

/// The error type for gfcrs primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Generator configuration error
    Configuration {
        /// Name of the offending configuration option
        name: Cow<'static, str>,
        /// Reason why the configuration was rejected
        reason: Cow<'static, str>,
    },

    /// Operands from structurally different fields or characteristics
    FieldMismatch {
        /// Operation that received the operands
        operation: &'static str,
    },

    /// Inversion, division or remainder by a zero value
    DivisionByZero {
        /// Operation that was asked to divide by zero
        operation: &'static str,
    },

    /// A coefficient buffer could not be reserved
    Allocation {
        /// Buffer that failed to allocate
        context: &'static str,
    },

    /// Arithmetic error during an operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Configuration error
    pub fn config<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Configuration {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for gfcrs primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Configuration { name, reason } => {
                write!(f, "Invalid configuration '{}': {}", name, reason)
            }
            Error::FieldMismatch { operation } => {
                write!(f, "Operands of {} belong to different fields", operation)
            }
            Error::DivisionByZero { operation } => write!(f, "Division by zero in {}", operation),
            Error::Allocation { context } => write!(f, "Failed to allocate {}", context),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

fn leak_name(name: Cow<'static, str>) -> &'static str {
    match name {
        Cow::Borrowed(s) => s,
        Cow::Owned(s) => Box::leak(s.into_boxed_str()),
    }
}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: leak_name(name),
                message: reason.into_owned(),
            },
            Error::Configuration { name, reason } => CoreError::Configuration {
                context: leak_name(name),
                message: reason.into_owned(),
            },
            Error::FieldMismatch { operation } => CoreError::FieldMismatch {
                context: operation,
            },
            Error::DivisionByZero { operation } => CoreError::DivisionByZero {
                context: operation,
            },
            Error::Allocation { context } => CoreError::Allocation { context },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
