use crate::KeyWord;

// NOTE: table from https://github.com/EugeneGonzalez/bit_reverse
#[rustfmt::skip]
const U8_REVERSE_LOOKUP: [u8; 256] = [
    0,  128, 64, 192, 32, 160,  96, 224, 16, 144, 80, 208, 48, 176, 112, 240,
    8,  136, 72, 200, 40, 168, 104, 232, 24, 152, 88, 216, 56, 184, 120, 248,
    4,  132, 68, 196, 36, 164, 100, 228, 20, 148, 84, 212, 52, 180, 116, 244,
    12, 140, 76, 204, 44, 172, 108, 236, 28, 156, 92, 220, 60, 188, 124, 252,
    2,  130, 66, 194, 34, 162,  98, 226, 18, 146, 82, 210, 50, 178, 114, 242,
    10, 138, 74, 202, 42, 170, 106, 234, 26, 154, 90, 218, 58, 186, 122, 250,
    6,  134, 70, 198, 38, 166, 102, 230, 22, 150, 86, 214, 54, 182, 118, 246,
    14, 142, 78, 206, 46, 174, 110, 238, 30, 158, 94, 222, 62, 190, 126, 254,
    1,  129, 65, 193, 33, 161,  97, 225, 17, 145, 81, 209, 49, 177, 113, 241,
    9,  137, 73, 201, 41, 169, 105, 233, 25, 153, 89, 217, 57, 185, 121, 249,
    5,  133, 69, 197, 37, 165, 101, 229, 21, 149, 85, 213, 53, 181, 117, 245,
    13, 141, 77, 205, 45, 173, 109, 237, 29, 157, 93, 221, 61, 189, 125, 253,
    3,  131, 67, 195, 35, 163,  99, 227, 19, 147, 83, 211, 51, 179, 115, 243,
    11, 139, 75, 203, 43, 171, 107, 235, 27, 155, 91, 219, 59, 187, 123, 251,
    7,  135, 71, 199, 39, 167, 103, 231, 23, 151, 87, 215, 55, 183, 119, 247,
    15, 143, 79, 207, 47, 175, 111, 239, 31, 159, 95, 223, 63, 191, 127, 255
];

#[inline(always)]
pub(crate) fn bit_reverse_u8(a: u8) -> u8 {
    U8_REVERSE_LOOKUP[a as usize]
}

/// Reverse the low `bit_width` bits of `n`: bit `i` moves to bit `bit_width - 1 - i`.
///
/// Bits of `n` at or above `bit_width` are discarded, and a zero-width
/// reversal is zero.
#[inline(always)]
pub fn bit_reverse<W: KeyWord>(n: W, bit_width: u32) -> W {
    if bit_width == 0 {
        return W::ZERO;
    }
    debug_assert!(bit_width <= W::BITS);

    n.reverse_word().shr_or_zero(W::BITS - bit_width)
}

#[cfg(test)]
mod bit_reverse_test {
    use crate::bit_reverse;

    #[test]
    fn test_lut_bit_reverse() {
        (1..17u32).for_each(|width| {
            (0..(1u32 << width))
                .for_each(|i| assert_eq!(bit_reverse(bit_reverse(i, width), width), i))
        })
    }

    #[test]
    fn test_bit_reverse_matches_intrinsic() {
        let seed: u64 = 0x0123_4567_89AB_CDEF;
        for width in 1..=64u32 {
            let input = seed & (u64::MAX >> (64 - width));
            assert_eq!(
                bit_reverse(input, width),
                input.reverse_bits() >> (64 - width),
                "width {width}"
            );
        }

        let wide: u128 = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210;
        assert_eq!(bit_reverse(wide, 128), wide.reverse_bits());
        assert_eq!(bit_reverse(0x56u32, 8), 0x6A);
        assert_eq!(bit_reverse(0x1Fu32, 13), 0x1F00);
    }

    #[test]
    fn test_zero_width_reverse() {
        assert_eq!(bit_reverse(u32::MAX, 0), 0);
        assert_eq!(bit_reverse(u128::MAX, 0), 0);
    }
}
