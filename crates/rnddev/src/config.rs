//! Device parameters
//!
//! The four parameters mirror what the device accepts at load time:
//!
//! ```toml
//! crs_len = 3
//! crs_coeffs = [1, 0, 1]
//! crs_elems = [7, 11, 13]
//! crs_c = 5
//! ```
//!
//! Values arrive as plain integers and are range-checked when converted into
//! a generator configuration. The arrays have a fixed capacity of 30 entries;
//! entries not given are zero.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use gfcrs_algorithms::stream::CrsConfig;
use gfcrs_algorithms::{validate, Error as AlgoError};
use gfcrs_params::crs::CRS_MAX_LEN;

use crate::error::{DeviceError, Result};

/// Raw device parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// CRS length
    pub crs_len: i64,
    /// CRS coefficients a_0..a_{k-1}
    pub crs_coeffs: Vec<i64>,
    /// CRS elements x_0..x_{k-1}
    pub crs_elems: Vec<i64>,
    /// CRS constant c
    pub crs_c: i64,
}

impl DeviceConfig {
    /// Parse parameters from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read parameters from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DeviceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn with_len(mut self, len: i64) -> Self {
        self.crs_len = len;
        self
    }

    pub fn with_coeffs(mut self, coeffs: Vec<i64>) -> Self {
        self.crs_coeffs = coeffs;
        self
    }

    pub fn with_elems(mut self, elems: Vec<i64>) -> Self {
        self.crs_elems = elems;
        self
    }

    pub fn with_constant(mut self, c: i64) -> Self {
        self.crs_c = c;
        self
    }

    /// Validate and convert into a byte generator seed
    pub fn to_crs_config(&self) -> Result<CrsConfig<u8>> {
        validate::configuration(
            self.crs_len != 0,
            "crs_len",
            "crs_len is zero, cannot make a sequence",
        )?;
        let len = usize::try_from(self.crs_len)
            .ok()
            .filter(|&len| len <= CRS_MAX_LEN)
            .ok_or_else(|| {
                let reason = format!(
                    "{} is outside the accepted range 1..={}",
                    self.crs_len, CRS_MAX_LEN
                );
                AlgoError::config("crs_len", reason)
            })?;

        Ok(CrsConfig {
            len,
            coefficients: param_array("crs_coeffs", &self.crs_coeffs, len)?,
            elements: param_array("crs_elems", &self.crs_elems, len)?,
            constant: param_byte("crs_c", self.crs_c)?,
        })
    }
}

fn param_byte(name: &'static str, value: i64) -> gfcrs_algorithms::Result<u8> {
    u8::try_from(value)
        .map_err(|_| AlgoError::config(name, format!("{} is not a byte value", value)))
}

/// First `len` entries of a parameter array, zero-filled past its end
fn param_array(
    name: &'static str,
    values: &[i64],
    len: usize,
) -> gfcrs_algorithms::Result<Vec<u8>> {
    if values.len() > CRS_MAX_LEN {
        return Err(AlgoError::config(
            name,
            format!("{} values exceed the array capacity {}", values.len(), CRS_MAX_LEN),
        ));
    }

    let bytes = values
        .iter()
        .map(|&v| param_byte(name, v))
        .collect::<gfcrs_algorithms::Result<Vec<u8>>>()?;

    let mut out = vec![0u8; len];
    for (slot, &b) in out.iter_mut().zip(bytes.iter()) {
        *slot = b;
    }
    Ok(out)
}
