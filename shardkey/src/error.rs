use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid layout: offset {offset} + size {size} exceeds {width} bits")]
    InvalidLayout { offset: u32, size: u32, width: u32 },

    #[error("invalid window: {window_bits} bits, expected at most 128")]
    InvalidWindow { window_bits: u32 },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("round-trip failure: {input} decoded to {decoded}")]
    RoundTrip { input: String, decoded: String },

    #[error("prefix mismatch for {encoded}: got {got}, want {want}")]
    PrefixMismatch {
        encoded: String,
        got: String,
        want: String,
    },
}

pub type KeyResult<T> = std::result::Result<T, KeyError>;
