use ark_std::test_rng;

use crate::{Key64Encoder, KeyEncoder, KeyWord};

#[test]
fn test_encoder64_table() {
    // (orig, offset, size, want_enc)
    let cases: [(u64, u32, u32, u64); 4] = [
        // field 0xCD reverses to 0xB3
        (0x0123_4567_89AB_CDEF, 8, 8, 0xB301_2345_6789_ABEF),
        (0, 5, 4, 0),
        (u64::MAX, 32, 32, u64::MAX),
        (0x0123_4567_89AB_CDEF, 11, 13, 0x9EA8_091A_2B3C_4DEF),
    ];

    for (orig, offset, size, want_enc) in cases {
        let enc = Key64Encoder::new(offset, size).unwrap();

        assert_eq!(enc.left_size(), 64 - offset - size);
        assert_eq!(enc.prefix_size(), size);
        assert_eq!(enc.right_size(), offset);
        assert_eq!(enc.left_size() + enc.prefix_size() + enc.right_size(), 64);
        assert_eq!(enc.encoded_bits(), 64);

        let got = enc.encode(orig);
        assert_eq!(
            got.into_inner(),
            want_enc,
            "encode({orig:#018x}) = {got:#018x}; want {want_enc:#018x}"
        );

        let mask = (1u64 << size) - 1;
        assert_eq!(enc.prefix(got), (got.into_inner() >> (64 - size)) & mask);
        assert_eq!(enc.decode(got), orig);
    }
}

#[test]
fn test_full_width_reversal() {
    let enc = Key64Encoder::new(0, 64).unwrap();
    let mut rng = test_rng();
    for _ in 0..100 {
        let v = u64::random_unsafe(&mut rng);
        let e = enc.encode(v);
        assert_eq!(e.into_inner(), v.reverse_bits());
        assert_eq!(enc.prefix(e), e.into_inner());
        assert_eq!(enc.decode(e), v);
    }
}

#[test]
fn test_low_bits_untouched() {
    let enc = Key64Encoder::new(11, 13).unwrap();
    let mut rng = test_rng();
    for _ in 0..100 {
        let v = u64::random_unsafe(&mut rng);
        let e = enc.encode(v).into_inner();
        assert_eq!(e & 0x7FF, v & 0x7FF);
        // bits above the field slide down by the field width
        assert_eq!((e >> 11) & ((1 << 40) - 1), v >> 24);
    }
}

#[test]
fn test_prefix_hex() {
    let enc = Key64Encoder::new(11, 13).unwrap();
    assert_eq!(enc.prefix_hex_size(), 4);
    assert_eq!(enc.prefix_hex_pad(0x1FFF), 0xFFF8);

    let enc = Key64Encoder::new(0, 64).unwrap();
    assert_eq!(enc.prefix_hex_size(), 16);
    assert_eq!(enc.prefix_hex_pad(u64::MAX), u64::MAX);
}
