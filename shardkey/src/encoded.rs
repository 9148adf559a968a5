use std::fmt::{self, Binary, Display, LowerHex, UpperHex};

/// A key after encoding.
///
/// It carries no layout information; only the encoder that produced it can
/// decode it or read its prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Encoded<T>(T);

impl<T> Encoded<T> {
    /// Wrap a value previously obtained from [`Encoded::into_inner`].
    #[inline(always)]
    pub const fn from_raw(raw: T) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.0
    }

    #[inline(always)]
    pub fn as_inner(&self) -> &T {
        &self.0
    }
}

impl<T: Display> Display for Encoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: LowerHex> LowerHex for Encoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl<T: UpperHex> UpperHex for Encoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        UpperHex::fmt(&self.0, f)
    }
}

impl<T: Binary> Binary for Encoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Binary::fmt(&self.0, f)
    }
}
