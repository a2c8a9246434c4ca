//! The 64-symbol digit alphabet and its inverse lookup table.
//!
//! Symbols are listed in ascending ASCII order, so comparing two keys byte by byte
//! compares their digits numerically.

/// Digit symbols, indexed by digit value.
pub const ALPHABET: &[u8; 64] = b".0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Symbol for digit `0`, used as left padding.
pub const ZERO: u8 = ALPHABET[0];

/// Symbol for digit `63`.
pub const MAX_DIGIT: u8 = ALPHABET[63];

const INVALID: u8 = 0xFF;

// ASCII byte -> digit value, INVALID for bytes outside the alphabet
static DIGITS: [u8; 128] = build_digits();

const fn build_digits() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const _: () = {
    let mut i = 1;
    while i < ALPHABET.len() {
        assert!(ALPHABET[i - 1] < ALPHABET[i], "alphabet must be strictly ascending");
        i += 1;
    }
};

/// Returns the symbol for a digit value in `0..64`.
#[inline(always)]
pub const fn symbol(digit: u8) -> u8 {
    debug_assert!(digit < 64);

    ALPHABET[(digit & 63) as usize]
}

/// Returns the digit value of `symbol`, or `None` if it is not part of the alphabet.
#[inline]
pub fn digit(symbol: u8) -> Option<u8> {
    match DIGITS.get(symbol as usize) {
        Some(&d) if d != INVALID => Some(d),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sorted() {
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));

        // same property through `str` ordering, which is what callers compare with
        let symbols: Vec<String> = ALPHABET.iter().map(|&b| (b as char).to_string()).collect();
        assert!(symbols.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_inverse_table() {
        for (i, &s) in ALPHABET.iter().enumerate() {
            assert_eq!(digit(s), Some(i as u8));
            assert_eq!(symbol(i as u8), s);
        }

        assert_eq!(ZERO, b'.');
        assert_eq!(MAX_DIGIT, b'z');
        assert_eq!(symbol(1), b'0');
        assert_eq!(symbol(37), b'_');
    }

    #[test]
    fn test_outside_alphabet() {
        let valid = (0..=255u8).filter(|&b| digit(b).is_some()).count();
        assert_eq!(valid, 64);

        for b in [b'!', b' ', b'-', b'/', b'`', b'{', 0x7F, 0x80, 0xFF] {
            assert_eq!(digit(b), None, "byte 0x{b:x}");
        }
    }
}
