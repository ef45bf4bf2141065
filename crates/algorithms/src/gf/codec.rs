//! Integer codec for the binary fields
//!
//! A w-bit word maps to the element of GF(2^w) whose coefficient of x^i is
//! bit i of the word. Both directions are bijective on the field's elements.

use core::fmt::Debug;

use super::element::FieldElement;
use super::field::{equal_fields, GaloisField, GF2_16, GF2_32, GF2_8};
use crate::error::{validate, Result};
use crate::poly::Polynomial;

/// Largest supported word width in bits
const MAX_WORD_BITS: usize = 32;

/// An unsigned word that encodes elements of a built-in binary field
pub trait BinaryCodec: Copy + Eq + Debug + Send + Sync + 'static {
    /// Width of the word in bits, equal to the field's extension degree
    const BITS: usize;

    /// The field this word width encodes
    fn field() -> &'static GaloisField;

    /// Expand the word's bits into a field element
    fn to_element(self) -> Result<FieldElement<'static>>;

    /// Evaluate an element of [`BinaryCodec::field`] back into a word
    fn from_element(element: &FieldElement<'_>) -> Result<Self>;
}

fn element_from_bits(
    value: u32,
    bits: usize,
    field: &'static GaloisField,
) -> Result<FieldElement<'static>> {
    let mut coeffs = [0u8; MAX_WORD_BITS];
    for (i, c) in coeffs.iter_mut().take(bits).enumerate() {
        *c = ((value >> i) & 1) as u8;
    }

    let poly = Polynomial::new(&coeffs[..bits], field.characteristic())?;
    Ok(FieldElement::from_reduced(poly, field))
}

fn bits_from_element(
    element: &FieldElement<'_>,
    field: &GaloisField,
    operation: &'static str,
) -> Result<u32> {
    validate::same_field(equal_fields(element.field(), field), operation)?;

    let word = element
        .polynomial()
        .coeffs()
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &c)| acc | ((c as u32) << i));
    Ok(word)
}

macro_rules! impl_binary_codec {
    ($word:ty, $field:ident, $operation:literal) => {
        impl BinaryCodec for $word {
            const BITS: usize = <$word>::BITS as usize;

            fn field() -> &'static GaloisField {
                &$field
            }

            fn to_element(self) -> Result<FieldElement<'static>> {
                element_from_bits(self as u32, <Self as BinaryCodec>::BITS, Self::field())
            }

            fn from_element(element: &FieldElement<'_>) -> Result<Self> {
                bits_from_element(element, Self::field(), $operation).map(|w| w as $word)
            }
        }
    };
}

impl_binary_codec!(u8, GF2_8, "decode u8");
impl_binary_codec!(u16, GF2_16, "decode u16");
impl_binary_codec!(u32, GF2_32, "decode u32");

/// Element of GF(2^8) for a byte
pub fn from_u8(x: u8) -> Result<FieldElement<'static>> {
    x.to_element()
}

/// Byte for an element of GF(2^8)
pub fn to_u8(e: &FieldElement<'_>) -> Result<u8> {
    u8::from_element(e)
}

/// Element of GF(2^16) for a 16-bit word
pub fn from_u16(x: u16) -> Result<FieldElement<'static>> {
    x.to_element()
}

/// 16-bit word for an element of GF(2^16)
pub fn to_u16(e: &FieldElement<'_>) -> Result<u16> {
    u16::from_element(e)
}

/// Element of GF(2^32) for a 32-bit word
pub fn from_u32(x: u32) -> Result<FieldElement<'static>> {
    x.to_element()
}

/// 32-bit word for an element of GF(2^32)
pub fn to_u32(e: &FieldElement<'_>) -> Result<u32> {
    u32::from_element(e)
}
