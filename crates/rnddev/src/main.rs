use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gfcrs_rnddev::{DeviceConfig, RndDev};

#[derive(Parser, Debug)]
#[command(
    name = "rnddev",
    version,
    about = "Pseudo-random bytes from a CRS over GF(2^8)",
    long_about = None
)]
struct Cli {
    /// TOML file holding crs_len, crs_coeffs, crs_elems and crs_c
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
    /// CRS length (overrides the file)
    #[arg(long = "crs-len", allow_negative_numbers = true)]
    crs_len: Option<i64>,
    /// CRS coefficients a_0..a_{k-1}, comma separated
    #[arg(long = "crs-coeffs", value_delimiter = ',', allow_negative_numbers = true)]
    crs_coeffs: Option<Vec<i64>>,
    /// CRS elements x_0..x_{k-1}, comma separated
    #[arg(long = "crs-elems", value_delimiter = ',', allow_negative_numbers = true)]
    crs_elems: Option<Vec<i64>>,
    /// CRS constant `c`
    #[arg(long = "crs-c", allow_negative_numbers = true)]
    crs_c: Option<i64>,
    /// Number of bytes to read from the device
    #[arg(short = 'n', long = "count", default_value_t = 16)]
    count: usize,
    /// Print the bytes as hex instead of writing them raw
    #[arg(long = "hex", default_value_t = false)]
    hex: bool,
}

impl Cli {
    fn device_config(&self) -> Result<DeviceConfig> {
        let mut config = match &self.config {
            Some(path) => DeviceConfig::load(path)
                .with_context(|| format!("failed to load parameters from {}", path.display()))?,
            None => DeviceConfig::default(),
        };

        if let Some(len) = self.crs_len {
            config = config.with_len(len);
        }
        if let Some(coeffs) = &self.crs_coeffs {
            config = config.with_coeffs(coeffs.clone());
        }
        if let Some(elems) = &self.crs_elems {
            config = config.with_elems(elems.clone());
        }
        if let Some(c) = self.crs_c {
            config = config.with_constant(c);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let device = RndDev::init(&cli.device_config()?).context("failed to load rnddev")?;

    let mut bytes = vec![0u8; cli.count];
    {
        let mut handle = device.open()?;
        handle
            .read_exact(&mut bytes)
            .context("failed to read from rnddev")?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.hex {
        writeln!(out, "{}", hex::encode(&bytes))?;
    } else {
        out.write_all(&bytes)?;
    }
    out.flush()?;

    device.exit();
    Ok(())
}
