//! CRS generator
//!
//! A linear recurrence over a binary Galois field. With taps a_0..a_{len-1},
//! a rolling window x_n..x_{n+len-1} and an additive constant c, each step
//! computes
//!
//! ```text
//! x_{n+len} = c + a_0 * x_n + a_1 * x_{n+1} + ... + a_{len-1} * x_{n+len-1}
//! ```
//!
//! emits it through the word codec and slides it into the window, dropping
//! the oldest element.

use core::marker::PhantomData;
use std::collections::VecDeque;

use byteorder::{ByteOrder, LittleEndian};
use rand::RngCore;
use zeroize::Zeroize;

use gfcrs_api::{ByteStream, Result as CoreResult};
use gfcrs_params::crs::{CRS_MAX_LEN, CRS_MIN_LEN};

use crate::error::{to_core_result, validate, Error, Result};
use crate::gf::{BinaryCodec, FieldElement};

/// Lifecycle of a live generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsState {
    /// Seeded, nothing produced yet
    Ready,
    /// At least one step taken
    Stepping,
}

/// Seed of a CRS generator, as codec words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrsConfig<W: BinaryCodec = u8> {
    /// Recurrence length, the size of the window and of the tap vector
    pub len: usize,
    /// Taps a_0..a_{len-1}
    pub coefficients: Vec<W>,
    /// Initial window x_0..x_{len-1}
    pub elements: Vec<W>,
    /// Additive constant
    pub constant: W,
}

impl<W: BinaryCodec> CrsConfig<W> {
    /// Configuration whose length is taken from the tap vector
    pub fn new(coefficients: Vec<W>, elements: Vec<W>, constant: W) -> Self {
        Self {
            len: coefficients.len(),
            coefficients,
            elements,
            constant,
        }
    }

    /// Check the length bounds and that both vectors hold exactly `len` words
    pub fn validate(&self) -> Result<()> {
        validate::configuration(
            self.len >= CRS_MIN_LEN,
            "len",
            "cannot make a sequence of length 0",
        )?;
        validate::maximum("len", self.len, CRS_MAX_LEN)?;
        validate::count("coefficients", self.coefficients.len(), self.len)?;
        validate::count("elements", self.elements.len(), self.len)
    }
}

/// CRS generator over the field of the codec word `W`
///
/// The byte generator is `Crs<u8>`; `Crs<u16>` and `Crs<u32>` run the same
/// recurrence over GF(2^16) and GF(2^32). Coefficients and constant are fixed
/// at construction. Every element the generator owns is zeroized on drop.
#[derive(Debug)]
pub struct Crs<W: BinaryCodec = u8> {
    coefficients: Vec<FieldElement<'static>>,
    history: VecDeque<FieldElement<'static>>,
    constant: FieldElement<'static>,
    state: CrsState,
    steps: u64,
    _word: PhantomData<W>,
}

impl<W: BinaryCodec> Crs<W> {
    /// Seed a generator
    ///
    /// The configuration is validated before anything is allocated.
    pub fn new(config: &CrsConfig<W>) -> Result<Self> {
        config.validate()?;

        let mut coefficients = Vec::new();
        coefficients
            .try_reserve_exact(config.len)
            .map_err(|_| Error::Allocation {
                context: "crs coefficients",
            })?;
        for &word in &config.coefficients {
            coefficients.push(word.to_element()?);
        }

        let mut history = VecDeque::new();
        history
            .try_reserve_exact(config.len)
            .map_err(|_| Error::Allocation {
                context: "crs history",
            })?;
        for &word in &config.elements {
            history.push_back(word.to_element()?);
        }

        Ok(Self {
            coefficients,
            history,
            constant: config.constant.to_element()?,
            state: CrsState::Ready,
            steps: 0,
            _word: PhantomData,
        })
    }

    /// Advance the recurrence by one step and return the new element's word
    pub fn step(&mut self) -> Result<W> {
        let mut acc = self.constant.try_clone()?;
        for (a, x) in self.coefficients.iter().zip(self.history.iter()) {
            acc.accumulate(&a.mul(x)?)?;
        }
        let word = W::from_element(&acc)?;

        // Window capacity is exactly len, so this never reallocates
        if let Some(mut evicted) = self.history.pop_front() {
            evicted.zeroize();
        }
        self.history.push_back(acc);

        self.state = CrsState::Stepping;
        self.steps = self.steps.saturating_add(1);
        Ok(word)
    }

    /// Next word of the sequence
    ///
    /// # Panics
    ///
    /// Panics if a step fails. Every element is built from the codec's own
    /// field, so a failure means the generator state was corrupted.
    pub fn next_word(&mut self) -> W {
        match self.step() {
            Ok(word) => word,
            Err(e) => panic!("CRS generator invariant violated: {}", e),
        }
    }

    /// Fill `out` with consecutive words of the sequence
    pub fn fill_words(&mut self, out: &mut [W]) -> Result<()> {
        for word in out.iter_mut() {
            *word = self.step()?;
        }
        Ok(())
    }

    /// Recurrence length
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false: a live generator has at least one tap
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Current lifecycle state
    pub fn state(&self) -> CrsState {
        self.state
    }

    /// Number of steps taken since seeding
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current window, oldest first
    pub fn history(&self) -> Result<Vec<W>> {
        self.history.iter().map(W::from_element).collect()
    }

    /// Taps, in index order
    pub fn coefficients(&self) -> Result<Vec<W>> {
        self.coefficients.iter().map(W::from_element).collect()
    }

    /// Additive constant
    pub fn constant(&self) -> Result<W> {
        W::from_element(&self.constant)
    }

    /// Tear the generator down, zeroizing its state
    pub fn release(self) {
        drop(self);
    }
}

impl Crs<u8> {
    /// Next byte of the sequence
    ///
    /// # Panics
    ///
    /// Same conditions as [`Crs::next_word`].
    pub fn next_byte(&mut self) -> u8 {
        self.next_word()
    }
}

impl<W: BinaryCodec> Drop for Crs<W> {
    fn drop(&mut self) {
        for e in self.coefficients.iter_mut() {
            e.zeroize();
        }
        for e in self.history.iter_mut() {
            e.zeroize();
        }
        self.constant.zeroize();
    }
}

impl ByteStream for Crs<u8> {
    fn try_next_byte(&mut self) -> CoreResult<u8> {
        to_core_result(self.step(), "crs step")
    }

    fn bytes_generated(&self) -> u64 {
        self.steps
    }
}

fn rng_error(err: Error) -> rand::Error {
    rand::Error::new(err)
}

/// Byte-stream adapter for the `rand` ecosystem
///
/// Words are assembled little-endian from consecutive bytes. The generator
/// is linear and fully determined by its seed; it does not implement
/// `CryptoRng`.
impl RngCore for Crs<u8> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        LittleEndian::read_u32(&buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        LittleEndian::read_u64(&buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        for byte in dest.iter_mut() {
            *byte = self.step().map_err(rng_error)?;
        }
        Ok(())
    }
}
