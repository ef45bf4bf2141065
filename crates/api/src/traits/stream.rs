//! Byte-oriented sequence generator interface

use crate::error::Result;

/// A deterministic source of bytes driven by internal state
///
/// Implementors advance their state by exactly one step per produced byte,
/// so two generators seeded identically yield identical streams.
pub trait ByteStream {
    /// Produce the next byte, advancing the state
    fn try_next_byte(&mut self) -> Result<u8>;

    /// Fill `output` with consecutive bytes of the stream
    fn try_fill(&mut self, output: &mut [u8]) -> Result<()> {
        for byte in output.iter_mut() {
            *byte = self.try_next_byte()?;
        }
        Ok(())
    }

    /// Number of bytes produced since seeding
    fn bytes_generated(&self) -> u64;
}
