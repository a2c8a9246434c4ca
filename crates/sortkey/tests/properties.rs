use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sortkey::{decode, encode, encode_u64, Key, KEY_LEN, MAX_SAFE_INTEGER};

const SAMPLES: usize = 20_000;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5071_4b3e)
}

/// Uniform samples are dominated by huge values, so mix in small ones and
/// values right around each power of 64.
fn sample(rng: &mut ChaCha8Rng) -> u64 {
    match rng.gen_range(0..4) {
        0 => rng.gen_range(0..=MAX_SAFE_INTEGER),
        1 => rng.gen_range(0..100_000),
        2 => {
            let place = rng.gen_range(1..9u32);
            let base = 64u64.pow(place);
            base - 2 + rng.gen_range(0..4)
        }
        _ => MAX_SAFE_INTEGER - rng.gen_range(0..1000),
    }
}

#[test]
fn test_round_trip() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let n = sample(&mut rng);
        let key = encode_u64(n).unwrap();

        assert_eq!(key.len(), KEY_LEN, "{n}");
        assert_eq!(decode(&key), Ok(n), "{n} => {key}");
    }

    for n in 0..=5000u64 {
        assert_eq!(decode(&encode_u64(n).unwrap()), Ok(n));
    }
}

#[test]
fn test_order_preservation() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let a = sample(&mut rng);
        let b = sample(&mut rng);

        let ka = encode_u64(a).unwrap();
        let kb = encode_u64(b).unwrap();

        assert_eq!(a.cmp(&b), ka.as_bytes().cmp(kb.as_bytes()), "{a} vs {b}");
        assert_eq!(a.cmp(&b), ka.cmp(&kb), "{a} vs {b}");
    }
}

#[test]
fn test_sorted_keys_decode_in_numeric_order() {
    let mut rng = rng();

    let mut values: Vec<u64> = (0..2000).map(|_| sample(&mut rng)).collect();
    let mut keys: Vec<_> = values.iter().map(|&n| encode_u64(n).unwrap()).collect();

    values.sort_unstable();
    keys.sort_unstable();

    let decoded: Vec<u64> = keys.iter().map(|k| decode(k).unwrap()).collect();
    assert_eq!(decoded, values);
}

#[test]
fn test_adjacent_values() {
    // every carry boundary up to the top digit
    for place in 1..KEY_LEN as u32 {
        let base = 64u64.pow(place).min(MAX_SAFE_INTEGER);

        let below = encode_u64(base - 1).unwrap();
        let at = encode_u64(base).unwrap();

        assert!(below < at, "{below} < {at}");
    }

    let last = encode(MAX_SAFE_INTEGER as i64 - 1).unwrap();
    let max = encode(MAX_SAFE_INTEGER as i64).unwrap();
    assert!(last < max);
    assert_eq!(max, Key::MAX.as_str());
}

#[test]
fn test_typed_keys_agree_with_strings() {
    let mut rng = rng();

    for _ in 0..1000 {
        let n = sample(&mut rng);

        let key = Key::from_u64(n).unwrap();
        let parsed: Key = encode_u64(n).unwrap().parse().unwrap();

        assert_eq!(key, parsed);
        assert_eq!(key.value(), n);
    }
}

#[test]
fn test_boundaries() {
    assert_eq!(encode(0).unwrap(), ".".repeat(KEY_LEN));
    assert_eq!(decode(&".".repeat(KEY_LEN)), Ok(0));

    assert!(encode(-1).is_err());
    assert!(encode(MAX_SAFE_INTEGER as i64 + 1).is_err());
    assert!(decode("!!!").is_err());
}
