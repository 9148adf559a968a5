use uuid::Uuid;

use crate::{Encoded, KeyEncoder, KeyError, KeyResult, KeyWord, Layout};

/// Layout of a UUID encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidLayout {
    /// Keys pass through untouched.
    Identity,

    /// The transform runs inside the top `layout.width()` bits; everything
    /// below is payload.
    Window(Layout),
}

/// Bit-prefix encoder over UUID-shaped keys, confined to a window anchored at
/// the most significant end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UuidEncoder {
    layout: UuidLayout,
}

impl UuidEncoder {
    /// 48-bit timestamp window of a UUIDv7, 4-bit shard at offset 11.
    pub const UUID_V7: Self = Self::window_unchecked(48, 11, 4);

    /// 48-bit timestamp window of a ULID, 16-bit shard at offset 16.
    pub const ULID: Self = Self::window_unchecked(48, 16, 16);

    /// `window_bits` of 0 together with a zero offset and size is the identity.
    /// Any other zero window covers all 128 bits, the same as a 128-bit window.
    pub fn new(window_bits: u32, offset: u32, size: u32) -> KeyResult<Self> {
        let layout = match (window_bits, offset, size) {
            (0, 0, 0) => UuidLayout::Identity,
            (0, _, _) => UuidLayout::Window(Layout::new(u128::BITS, offset, size)?),
            (w, _, _) if w > u128::BITS => {
                return Err(KeyError::InvalidWindow { window_bits });
            }
            _ => UuidLayout::Window(Layout::new(window_bits, offset, size)?),
        };
        log::debug!("uuid encoder: {:?}", layout);
        Ok(Self { layout })
    }

    #[inline(always)]
    pub const fn identity() -> Self {
        Self {
            layout: UuidLayout::Identity,
        }
    }

    #[inline(always)]
    pub const fn uuid_v7() -> Self {
        Self::UUID_V7
    }

    #[inline(always)]
    pub const fn ulid() -> Self {
        Self::ULID
    }

    const fn window_unchecked(window_bits: u32, offset: u32, size: u32) -> Self {
        Self {
            layout: UuidLayout::Window(Layout::new_unchecked(window_bits, offset, size)),
        }
    }

    #[inline(always)]
    pub fn layout(&self) -> &UuidLayout {
        &self.layout
    }

    /// Width of the window the transform runs in; the identity covers all 128 bits.
    #[inline(always)]
    pub fn window_bits(&self) -> u32 {
        match &self.layout {
            UuidLayout::Identity => u128::BITS,
            UuidLayout::Window(layout) => layout.width(),
        }
    }

    /// See [`Layout::prefix_hex_pad`].
    #[inline]
    pub fn prefix_hex_pad(&self, prefix: u128) -> u128 {
        match &self.layout {
            UuidLayout::Identity => prefix,
            UuidLayout::Window(layout) => layout.prefix_hex_pad(prefix),
        }
    }

    /// Run `f` over the window of `key`, leaving the payload below it alone.
    #[inline]
    fn in_window(layout: &Layout, key: Uuid, f: impl FnOnce(&Layout, u128) -> u128) -> Uuid {
        let value = key.as_u128();
        let payload_bits = u128::BITS - layout.width();

        let window = value.shr_or_zero(payload_bits);
        let payload = value & u128::low_mask(payload_bits);

        Uuid::from_u128(f(layout, window).shl_or_zero(payload_bits) | payload)
    }
}

impl Default for UuidEncoder {
    fn default() -> Self {
        Self::identity()
    }
}

impl KeyEncoder for UuidEncoder {
    type Key = Uuid;

    fn encode(&self, v: Uuid) -> Encoded<Uuid> {
        match &self.layout {
            UuidLayout::Identity => Encoded::from_raw(v),
            UuidLayout::Window(layout) => {
                Encoded::from_raw(Self::in_window(layout, v, |l, w| l.encode_word(w)))
            }
        }
    }

    fn decode(&self, e: Encoded<Uuid>) -> Uuid {
        match &self.layout {
            UuidLayout::Identity => e.into_inner(),
            UuidLayout::Window(layout) => {
                Self::in_window(layout, e.into_inner(), |l, w| l.decode_word(w))
            }
        }
    }

    /// The prefix bits in place at the top of a UUID, every other bit cleared.
    fn prefix(&self, e: Encoded<Uuid>) -> Uuid {
        match &self.layout {
            UuidLayout::Identity => Uuid::nil(),
            UuidLayout::Window(layout) => {
                let payload = u128::low_mask(u128::BITS - layout.size());
                Uuid::from_u128(e.into_inner().as_u128() & !payload)
            }
        }
    }

    #[inline(always)]
    fn key_bits(key: Uuid) -> u128 {
        key.as_u128()
    }

    /// `prefix` keeps the bits at the top, so shift them down.
    fn prefix_bits(&self, e: Encoded<Uuid>) -> u128 {
        Self::key_bits(self.prefix(e)).shr_or_zero(u128::BITS - self.prefix_size())
    }

    fn left_size(&self) -> u32 {
        match &self.layout {
            UuidLayout::Identity => u128::BITS,
            UuidLayout::Window(layout) => layout.left_size(),
        }
    }

    fn prefix_size(&self) -> u32 {
        match &self.layout {
            UuidLayout::Identity => 0,
            UuidLayout::Window(layout) => layout.prefix_size(),
        }
    }

    fn right_size(&self) -> u32 {
        match &self.layout {
            UuidLayout::Identity => 0,
            UuidLayout::Window(layout) => layout.right_size(),
        }
    }

    fn encoded_bits(&self) -> u32 {
        u128::BITS
    }
}
