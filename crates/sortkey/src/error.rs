#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Only non-negative integers have a key
    #[error("Cannot encode negative value {0}")]
    NegativeKey(i64),

    /// The value is larger than [`MAX_SAFE_INTEGER`](crate::MAX_SAFE_INTEGER)
    #[error("Value {0} exceeds the maximum key value 9007199254740991")]
    KeyOverflow(u64),

    /// The input contained a character not part of the key alphabet
    #[error("Invalid character {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The decoded value does not fit in a `u64`
    #[error("Key of length {len} is too large to decode")]
    Unrepresentable { len: usize },

    /// A canonical key must be exactly [`KEY_LEN`](crate::KEY_LEN) symbols
    #[error("Invalid key length {0}, expected 10")]
    InvalidLength(usize),
}
