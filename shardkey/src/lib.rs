//! Reversible bit-prefix encoders for shard routing.
//!
//! An encoder takes a small shard-selector field out of a key, reverses its
//! bits and moves it to the most significant end, so a shard can be picked by
//! reading the top bits of the encoded key. Nothing is lost: every encoder is
//! a bijection over its key width.

mod bits;
pub use bits::*;

mod encoded;
pub use encoded::*;

mod encoder;
pub use encoder::*;

mod error;
pub use error::*;

mod layout;
pub use layout::*;

mod uuid_encoder;
pub use uuid_encoder::*;

mod word;
pub use word::*;

pub use uuid::Uuid;

#[cfg(test)]
mod tests;
