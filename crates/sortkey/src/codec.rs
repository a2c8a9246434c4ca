use smol_str::SmolStr;

use crate::alphabet;
use crate::KeyError;

/// Width of every key produced by [`encode`].
pub const KEY_LEN: usize = 10;

/// Largest encodable value, `2^53 - 1`.
///
/// This is the largest integer a double-precision float represents exactly, which keeps
/// keys interchangeable with environments that only have floating point numbers.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

// precalculated list of 64^x powers
const POWERS: [u64; KEY_LEN] = {
    let mut powers = [1u64; KEY_LEN];
    let mut i = 1;
    while i < KEY_LEN {
        powers[i] = powers[i - 1] * 64;
        i += 1;
    }
    powers
};

const _: () = assert!(POWERS[KEY_LEN - 1] * 64 - 1 >= MAX_SAFE_INTEGER);

/// Writes `value` as `KEY_LEN` base-64 digits, most significant first.
///
/// `value` must not exceed [`MAX_SAFE_INTEGER`].
pub(crate) const fn encode_digits(value: u64) -> [u8; KEY_LEN] {
    let mut buf = [alphabet::ZERO; KEY_LEN];
    let mut remaining = value;

    let mut place = KEY_LEN - 1;
    while place > 0 {
        let base = POWERS[place];

        if remaining >= base {
            let digit = remaining / base;
            remaining -= digit * base;
            buf[KEY_LEN - 1 - place] = alphabet::symbol(digit as u8);
        }

        place -= 1;
    }

    debug_assert!(remaining < 64);
    buf[KEY_LEN - 1] = alphabet::symbol(remaining as u8);

    buf
}

/// Encodes a non-negative integer into a fixed-width key.
///
/// Keys of different values compare in the same order as the values themselves.
///
/// ```
/// assert_eq!(sortkey::encode(0).unwrap(), "..........");
/// assert_eq!(sortkey::encode(64).unwrap(), "........0.");
/// assert!(sortkey::encode(63).unwrap() < sortkey::encode(64).unwrap());
/// ```
pub fn encode(value: i64) -> Result<SmolStr, KeyError> {
    if value < 0 {
        return Err(KeyError::NegativeKey(value));
    }

    encode_u64(value as u64)
}

/// Same as [`encode`], for callers that already hold an unsigned value.
pub fn encode_u64(value: u64) -> Result<SmolStr, KeyError> {
    if value > MAX_SAFE_INTEGER {
        return Err(KeyError::KeyOverflow(value));
    }

    let buf = encode_digits(value);

    // every alphabet symbol is ASCII
    Ok(SmolStr::new_inline(unsafe { std::str::from_utf8_unchecked(&buf) }))
}

/// Decodes a key of any length back into its integer value.
///
/// Each character is a base-64 digit, the last one being the least significant, so
/// `"0."` decodes to `64` just as `"........0."` does.
///
/// The result is not checked against [`MAX_SAFE_INTEGER`], see [`decode_bounded`] for that.
pub fn decode(key: &str) -> Result<u64, KeyError> {
    let mut value = Some(0u64);
    let mut len = 0;

    for (position, symbol) in key.chars().enumerate() {
        let Some(digit) = u8::try_from(symbol).ok().and_then(alphabet::digit) else {
            return Err(KeyError::InvalidSymbol { symbol, position });
        };

        // keep scanning after an overflow so invalid symbols are still reported first
        value = value.and_then(|v| v.checked_mul(64)).and_then(|v| v.checked_add(digit as u64));
        len += 1;
    }

    value.ok_or(KeyError::Unrepresentable { len })
}

/// Decodes a key, rejecting values that [`encode`] could never have produced.
pub fn decode_bounded(key: &str) -> Result<u64, KeyError> {
    match decode(key)? {
        value if value > MAX_SAFE_INTEGER => Err(KeyError::KeyOverflow(value)),
        value => Ok(value),
    }
}
