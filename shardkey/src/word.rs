use rand::RngCore;

use std::{
    fmt::{Binary, Debug, Display, LowerHex, UpperHex},
    hash::Hash,
    ops::{BitAnd, BitOr},
};

use crate::bits::bit_reverse_u8;

/// Fixed-width unsigned words a key can be encoded in.
pub trait KeyWord:
    Copy
    + Clone
    + Debug
    + Default
    + Display
    + LowerHex
    + UpperHex
    + Binary
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + 'static
{
    /// name
    const NAME: &'static str;

    /// width in bits
    const BITS: u32;

    /// all bits cleared
    const ZERO: Self;

    /// all bits set
    const MAX: Self;

    /// Reverse the bit order of the whole word.
    fn reverse_word(self) -> Self;

    /// Left shift; shifting by `BITS` or more yields zero.
    fn shl_or_zero(self, n: u32) -> Self;

    /// Right shift; shifting by `BITS` or more yields zero.
    fn shr_or_zero(self, n: u32) -> Self;

    /// Mask of the low `bits` bits. Saturates at `MAX`.
    #[inline(always)]
    fn low_mask(bits: u32) -> Self {
        Self::MAX.shr_or_zero(Self::BITS.saturating_sub(bits))
    }

    /// Widen into a u128.
    fn as_u128(self) -> u128;

    /// Narrow a u128, returning `None` when it does not fit.
    fn from_u128(v: u128) -> Option<Self>;

    /// create a random word from rng.
    /// test only -- the output may not be uniformly random.
    fn random_unsafe(rng: impl RngCore) -> Self;
}

macro_rules! key_word_for_number {
    ($int_type: ident, |$rng: ident| $random: expr) => {
        impl KeyWord for $int_type {
            const NAME: &'static str = stringify!($int_type);

            const BITS: u32 = $int_type::BITS;

            const ZERO: Self = 0;

            const MAX: Self = $int_type::MAX;

            #[inline(always)]
            fn reverse_word(self) -> Self {
                // reversing the byte order and then the bits within each byte
                let mut bytes = self.to_be_bytes();
                bytes.iter_mut().for_each(|b| *b = bit_reverse_u8(*b));
                $int_type::from_le_bytes(bytes)
            }

            #[inline(always)]
            fn shl_or_zero(self, n: u32) -> Self {
                self.checked_shl(n).unwrap_or(0)
            }

            #[inline(always)]
            fn shr_or_zero(self, n: u32) -> Self {
                self.checked_shr(n).unwrap_or(0)
            }

            #[inline(always)]
            fn as_u128(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn from_u128(v: u128) -> Option<Self> {
                $int_type::try_from(v).ok()
            }

            #[inline(always)]
            fn random_unsafe(mut $rng: impl RngCore) -> Self {
                $random
            }
        }
    };
}

key_word_for_number!(u32, |rng| rng.next_u32());
key_word_for_number!(u64, |rng| rng.next_u64());
key_word_for_number!(u128, |rng| ((rng.next_u64() as u128) << 64)
    | rng.next_u64() as u128);
