//! Traits implemented by the gfcrs generators

pub mod stream;

pub use stream::ByteStream;
