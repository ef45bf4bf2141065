//! User-space rnddev device
//!
//! Hosts a byte-oriented CRS generator behind a character-device style
//! interface: load-time parameters, a single opener at a time, one byte per
//! read, no writes. Device events are reported through the `log` facade.

pub mod config;
pub mod device;
pub mod error;

pub use config::DeviceConfig;
pub use device::{DeviceHandle, RndDev, DEVICE_NAME};
pub use error::{DeviceError, Result};
