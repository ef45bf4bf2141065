//! The rnddev character device, emulated in user space
//!
//! One generator per device, one opener at a time. Reads yield one byte of
//! the CRS sequence per call; writes are rejected.

use std::io::{self, Read, Write};
use std::sync::Mutex;

use log::{debug, error, info, warn};
use portable_atomic::{AtomicBool, Ordering};

use gfcrs_algorithms::error::to_core_result;
use gfcrs_algorithms::stream::Crs;
use gfcrs_api::ByteStream;

use crate::config::DeviceConfig;
use crate::error::{DeviceError, Result};

/// Name the device registers under
pub const DEVICE_NAME: &str = "rnddev";

/// A loaded device
#[derive(Debug)]
pub struct RndDev {
    generator: Mutex<Crs<u8>>,
    open: AtomicBool,
}

impl RndDev {
    /// Validate the parameters and seed the generator
    pub fn init(config: &DeviceConfig) -> Result<Self> {
        info!("Rnd dev start.");

        let crs_config = config.to_crs_config().map_err(|e| {
            error!("{}: {}. Abort.", DEVICE_NAME, e);
            e
        })?;

        info!("crs_len: {}", crs_config.len);
        info!("crs_c: {}", crs_config.constant);
        for (i, a) in crs_config.coefficients.iter().enumerate() {
            info!("crs_coeffs[{}] = {}", i, a);
        }
        for (i, x) in crs_config.elements.iter().enumerate() {
            info!("crs_elems[{}] = {}", i, x);
        }

        let generator = to_core_result(Crs::new(&crs_config), "rnddev init")?;
        Ok(Self {
            generator: Mutex::new(generator),
            open: AtomicBool::new(false),
        })
    }

    pub fn name(&self) -> &'static str {
        DEVICE_NAME
    }

    /// Claim the device; fails with [`DeviceError::Busy`] while another
    /// handle is live
    pub fn open(&self) -> Result<DeviceHandle<'_>> {
        if self
            .open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("{}: already open", DEVICE_NAME);
            return Err(DeviceError::Busy);
        }

        debug!("{}: open", DEVICE_NAME);
        Ok(DeviceHandle { device: self })
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Bytes produced since the device was loaded
    pub fn bytes_generated(&self) -> Result<u64> {
        let generator = self.generator.lock().map_err(|_| DeviceError::Poisoned)?;
        Ok(generator.bytes_generated())
    }

    /// Unload the device, releasing the generator
    pub fn exit(self) {
        let generator = match self.generator.into_inner() {
            Ok(generator) => generator,
            Err(poisoned) => poisoned.into_inner(),
        };
        generator.release();
        info!("Rnd dev exit.");
    }
}

/// An open file on the device
///
/// Dropping the handle releases the device for the next opener.
#[derive(Debug)]
pub struct DeviceHandle<'a> {
    device: &'a RndDev,
}

impl Read for DeviceHandle<'_> {
    /// Give one byte of the sequence
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(slot) = buf.first_mut() else {
            return Ok(0);
        };

        let mut generator = self
            .device
            .generator
            .lock()
            .map_err(|_| DeviceError::Poisoned)?;
        *slot = generator.try_next_byte().map_err(DeviceError::from)?;
        Ok(1)
    }
}

impl Write for DeviceHandle<'_> {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        error!("{}: write is not supported", DEVICE_NAME);
        Err(DeviceError::WriteUnsupported.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for DeviceHandle<'_> {
    fn drop(&mut self) {
        self.device.open.store(false, Ordering::Release);
        debug!("{}: release", DEVICE_NAME);
    }
}
