use crate::{bit_reverse, KeyError, KeyResult, KeyWord};

/// Bit layout of a key: a `size`-bit field sitting `offset` bits above the
/// least significant bit of a `width`-bit word.
///
/// Encoding reverses the field and promotes it to the top `size` bits. The
/// bits above the field slide down by `size` and the low `offset` bits stay
/// where they are:
///
/// ```text
///   original: [ left | field | right ]
///   encoded:  [ rev(field) | left | right ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    width: u32,
    offset: u32,
    size: u32,
}

impl Layout {
    pub fn new(width: u32, offset: u32, size: u32) -> KeyResult<Self> {
        match offset.checked_add(size) {
            Some(end) if end <= width => Ok(Self {
                width,
                offset,
                size,
            }),
            _ => Err(KeyError::InvalidLayout {
                offset,
                size,
                width,
            }),
        }
    }

    /// Only for layouts known to be valid at compile time.
    pub(crate) const fn new_unchecked(width: u32, offset: u32, size: u32) -> Self {
        assert!(offset + size <= width);
        Self {
            width,
            offset,
            size,
        }
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline(always)]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Bits above the field. After encoding they sit directly below the prefix.
    #[inline(always)]
    pub fn left_size(&self) -> u32 {
        self.width - self.offset - self.size
    }

    #[inline(always)]
    pub fn prefix_size(&self) -> u32 {
        self.size
    }

    /// Bits below the field, left in place.
    #[inline(always)]
    pub fn right_size(&self) -> u32 {
        self.offset
    }

    /// Hex nibbles needed to print a prefix.
    #[inline(always)]
    pub fn prefix_hex_size(&self) -> u32 {
        self.size.div_ceil(4)
    }

    /// Shift a right-aligned prefix so its top bit lines up with the top bit
    /// of its hex rendering.
    #[inline(always)]
    pub fn prefix_hex_pad<W: KeyWord>(&self, prefix: W) -> W {
        prefix.shl_or_zero(4 * self.prefix_hex_size() - self.size)
    }

    /// `v` must fit in `width` bits.
    #[inline]
    pub(crate) fn encode_word<W: KeyWord>(&self, v: W) -> W {
        debug_assert!(self.width <= W::BITS);

        let field = v.shr_or_zero(self.offset) & W::low_mask(self.size);
        let rev = bit_reverse(field, self.size);

        let left = v.shr_or_zero(self.offset + self.size);
        let right = v & W::low_mask(self.offset);

        rev.shl_or_zero(self.width - self.size) | left.shl_or_zero(self.offset) | right
    }

    /// `e` must fit in `width` bits.
    #[inline]
    pub(crate) fn decode_word<W: KeyWord>(&self, e: W) -> W {
        debug_assert!(self.width <= W::BITS);

        let rev = self.prefix_word(e);
        let field = bit_reverse(rev, self.size);

        let left = e.shr_or_zero(self.offset) & W::low_mask(self.left_size());
        let right = e & W::low_mask(self.offset);

        left.shl_or_zero(self.offset + self.size) | field.shl_or_zero(self.offset) | right
    }

    /// Top `size` bits of a `width`-bit word, right-aligned.
    #[inline(always)]
    pub(crate) fn prefix_word<W: KeyWord>(&self, e: W) -> W {
        e.shr_or_zero(self.width - self.size) & W::low_mask(self.size)
    }
}
