//! Error types for the rnddev device

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("generator error: {0}")]
    Core(#[from] gfcrs_api::Error),

    #[error("device or resource busy")]
    Busy,

    #[error("write is not supported")]
    WriteUnsupported,

    #[error("generator lock poisoned")]
    Poisoned,

    #[error("invalid device parameters: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeviceError>;

// Helper for converting algorithm errors
impl From<gfcrs_algorithms::Error> for DeviceError {
    fn from(e: gfcrs_algorithms::Error) -> Self {
        DeviceError::Core(e.into())
    }
}

impl From<DeviceError> for io::Error {
    fn from(e: DeviceError) -> Self {
        let kind = match &e {
            DeviceError::Busy => io::ErrorKind::WouldBlock,
            DeviceError::WriteUnsupported => io::ErrorKind::InvalidInput,
            DeviceError::Core(_) | DeviceError::Parse(_) => io::ErrorKind::InvalidData,
            DeviceError::Poisoned | DeviceError::Io { .. } => io::ErrorKind::Other,
        };
        io::Error::new(kind, e)
    }
}
