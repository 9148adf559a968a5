use crate::{KeyError, Layout};

#[test]
fn test_layout_sizes() {
    let layout = Layout::new(48, 11, 4).unwrap();
    assert_eq!(layout.width(), 48);
    assert_eq!(layout.offset(), 11);
    assert_eq!(layout.size(), 4);
    assert_eq!(layout.right_size(), 11);
    assert_eq!(layout.prefix_size(), 4);
    assert_eq!(layout.left_size(), 33);
    assert_eq!(layout.prefix_hex_size(), 1);

    for width in [0u32, 1, 12, 32, 48, 64, 128] {
        for offset in 0..=width {
            for size in 0..=(width - offset) {
                let layout = Layout::new(width, offset, size).unwrap();
                assert_eq!(
                    layout.left_size() + layout.prefix_size() + layout.right_size(),
                    width
                );
            }
        }
    }
}

#[test]
fn test_invalid_layout() {
    assert_eq!(
        Layout::new(32, 20, 13),
        Err(KeyError::InvalidLayout {
            offset: 20,
            size: 13,
            width: 32
        })
    );
    assert!(Layout::new(0, 0, 1).is_err());
    assert!(Layout::new(64, 65, 0).is_err());
    assert!(Layout::new(64, 0, u32::MAX).is_err());

    let err = Layout::new(32, 20, 13).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid layout: offset 20 + size 13 exceeds 32 bits"
    );
}

#[test]
fn test_layout_words() {
    // a 16-bit layout carried in a u64
    let layout = Layout::new(16, 4, 4).unwrap();
    assert_eq!(layout.encode_word(0xABCDu64), 0x3ABDu64);
    assert_eq!(layout.decode_word(0x3ABDu64), 0xABCD);
    assert_eq!(layout.prefix_word(0x3ABDu64), 0x3);
}
