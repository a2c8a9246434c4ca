//! Order-preserving keys for non-negative integers.
//!
//! Integers in `0..=2^53 - 1` are written as ten base-64 digits using an alphabet whose
//! symbols are already in ASCII order. Comparing two keys as plain strings therefore
//! gives the same result as comparing the integers they encode.
//!
//! ```
//! use sortkey::{decode, encode, Key};
//!
//! let a = encode(63).unwrap();
//! let b = encode(64).unwrap();
//!
//! assert_eq!(a, ".........z");
//! assert_eq!(b, "........0.");
//! assert!(a < b);
//! assert_eq!(decode(&b), Ok(64));
//!
//! let key: Key = b.parse().unwrap();
//! assert_eq!(key.value(), 64);
//! ```

pub mod alphabet;

mod codec;
mod error;
mod key;

pub use codec::{decode, decode_bounded, encode, encode_u64, KEY_LEN, MAX_SAFE_INTEGER};
pub use error::KeyError;
pub use key::Key;

pub use smol_str::SmolStr;
