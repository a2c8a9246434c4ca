use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use smol_str::SmolStr;

use crate::codec::{self, KEY_LEN, MAX_SAFE_INTEGER};
use crate::{alphabet, KeyError};

/// A canonical sortable key: exactly [`KEY_LEN`] symbols encoding a value
/// no larger than [`MAX_SAFE_INTEGER`].
///
/// Ordering is plain byte-wise ordering of the string form, which is also
/// the numeric ordering of the encoded values.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Key of `0`
    pub const MIN: Key = Key([alphabet::ZERO; KEY_LEN]);

    /// Key of [`MAX_SAFE_INTEGER`]
    pub const MAX: Key = Key(codec::encode_digits(MAX_SAFE_INTEGER));

    pub fn new(value: i64) -> Result<Key, KeyError> {
        if value < 0 {
            return Err(KeyError::NegativeKey(value));
        }

        Key::from_u64(value as u64)
    }

    pub fn from_u64(value: u64) -> Result<Key, KeyError> {
        if value > MAX_SAFE_INTEGER {
            return Err(KeyError::KeyOverflow(value));
        }

        Ok(Key(codec::encode_digits(value)))
    }

    /// The integer this key encodes.
    pub fn value(&self) -> u64 {
        // symbols were validated on construction
        self.0.iter().fold(0, |acc, &s| acc * 64 + alphabet::digit(s).unwrap_or(0) as u64)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // every alphabet symbol is ASCII
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }

    #[inline]
    pub fn to_smol_str(&self) -> SmolStr {
        SmolStr::new_inline(self.as_str())
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != KEY_LEN {
            return Err(KeyError::InvalidLength(len));
        }

        codec::decode_bounded(s)?;

        // all symbols are single-byte, so `s` is exactly KEY_LEN bytes
        let mut buf = [alphabet::ZERO; KEY_LEN];
        buf.copy_from_slice(s.as_bytes());

        Ok(Key(buf))
    }
}

impl TryFrom<i64> for Key {
    type Error = KeyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Key::new(value)
    }
}

impl From<Key> for SmolStr {
    fn from(key: Key) -> SmolStr {
        key.to_smol_str()
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::MIN
    }
}

impl Deref for Key {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Key {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Key({:?} = {})", self.as_str(), self.value())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Key {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Key {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct KeyVisitor;

            impl<'de> Visitor<'de> for KeyVisitor {
                type Value = Key;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a 10-character sortable key")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
                    Key::from_str(v).map_err(E::custom)
                }
            }

            deserializer.deserialize_str(KeyVisitor)
        }
    }
}
