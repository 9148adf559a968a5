use std::{
    fmt::{Debug, LowerHex},
    marker::PhantomData,
};

use crate::{Encoded, KeyError, KeyResult, KeyWord, Layout};

/// Encode/decode interface and bit-layout metadata shared by every key width.
pub trait KeyEncoder {
    type Key: Copy + PartialEq + Debug + LowerHex;

    /// Reverse the field and move it into the top `prefix_size` bits.
    fn encode(&self, v: Self::Key) -> Encoded<Self::Key>;

    /// Inverse of `encode`.
    fn decode(&self, e: Encoded<Self::Key>) -> Self::Key;

    /// The promoted bits of `e`, still reversed.
    fn prefix(&self, e: Encoded<Self::Key>) -> Self::Key;

    /// Bits between the prefix and the untouched low bits.
    fn left_size(&self) -> u32;

    /// Width of the prefix.
    fn prefix_size(&self) -> u32;

    /// Low bits left in place.
    fn right_size(&self) -> u32;

    /// Width of an encoded value.
    fn encoded_bits(&self) -> u32;

    #[inline(always)]
    fn prefix_hex_size(&self) -> u32 {
        self.prefix_size().div_ceil(4)
    }

    /// Bits of a key, right-aligned in a u128.
    fn key_bits(key: Self::Key) -> u128;

    /// The prefix of `e` as a right-aligned integer.
    #[inline(always)]
    fn prefix_bits(&self, e: Encoded<Self::Key>) -> u128 {
        Self::key_bits(self.prefix(e))
    }
}

/// Bit-prefix encoder over a whole machine word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitPrefixEncoder<W: KeyWord> {
    layout: Layout,
    _word: PhantomData<W>,
}

pub type Key32Encoder = BitPrefixEncoder<u32>;

pub type Key64Encoder = BitPrefixEncoder<u64>;

impl<W: KeyWord> BitPrefixEncoder<W> {
    /// Extract `size` bits starting at bit `offset` (0 = LSB).
    pub fn new(offset: u32, size: u32) -> KeyResult<Self> {
        let layout = Layout::new(W::BITS, offset, size)?;
        log::debug!(
            "{} encoder: offset {}, size {}, left {}",
            W::NAME,
            offset,
            size,
            layout.left_size()
        );
        Ok(Self {
            layout,
            _word: PhantomData,
        })
    }

    #[inline(always)]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// See [`Layout::prefix_hex_pad`].
    #[inline(always)]
    pub fn prefix_hex_pad(&self, prefix: W) -> W {
        self.layout.prefix_hex_pad(prefix)
    }
}

impl<W: KeyWord> KeyEncoder for BitPrefixEncoder<W> {
    type Key = W;

    #[inline(always)]
    fn encode(&self, v: W) -> Encoded<W> {
        Encoded::from_raw(self.layout.encode_word(v))
    }

    #[inline(always)]
    fn decode(&self, e: Encoded<W>) -> W {
        self.layout.decode_word(e.into_inner())
    }

    #[inline(always)]
    fn prefix(&self, e: Encoded<W>) -> W {
        self.layout.prefix_word(e.into_inner())
    }

    #[inline(always)]
    fn left_size(&self) -> u32 {
        self.layout.left_size()
    }

    #[inline(always)]
    fn prefix_size(&self) -> u32 {
        self.layout.prefix_size()
    }

    #[inline(always)]
    fn right_size(&self) -> u32 {
        self.layout.right_size()
    }

    #[inline(always)]
    fn encoded_bits(&self) -> u32 {
        W::BITS
    }

    #[inline(always)]
    fn key_bits(key: W) -> u128 {
        key.as_u128()
    }
}

/// Round-trip every value through `encoder` and check that its prefix is the
/// top `prefix_size` bits of the encoded value. Returns how many were checked.
pub fn verify_bijection<E, I>(encoder: &E, values: I) -> KeyResult<usize>
where
    E: KeyEncoder,
    I: IntoIterator<Item = E::Key>,
{
    let size = encoder.prefix_size();
    let shift = encoder.encoded_bits() - size;

    let mut checked = 0;
    for v in values {
        let e = encoder.encode(v);
        let decoded = encoder.decode(e);
        if decoded != v {
            return Err(KeyError::RoundTrip {
                input: format!("{v:x}"),
                decoded: format!("{decoded:x}"),
            });
        }

        let want = E::key_bits(e.into_inner()).shr_or_zero(shift) & u128::low_mask(size);
        let got = encoder.prefix_bits(e);
        if got != want {
            return Err(KeyError::PrefixMismatch {
                encoded: format!("{:x}", e.into_inner()),
                got: format!("{got:x}"),
                want: format!("{want:x}"),
            });
        }
        checked += 1;
    }
    log::trace!("verified {} round-trips", checked);
    Ok(checked)
}
