//! Error handling for the gfcrs ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

use std::error::Error as StdError;

impl StdError for Error {}
