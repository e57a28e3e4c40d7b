use rand::Rng;

const ASCII_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Random lowercase word with length drawn uniformly from `min..=max`.
pub fn word<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    let len = rng.gen_range(min..=max);
    let mut result = String::with_capacity(len);
    for _ in 0..len {
        result.push(ASCII_LOWER[rng.gen_range(0..ASCII_LOWER.len())] as char);
    }
    result
}

/// Random word with the first letter uppercased.
pub fn capitalized<R: Rng>(rng: &mut R, min: usize, max: usize) -> String {
    let mut result = word(rng, min, max);
    // word() only emits single-byte ASCII, so the slice is boundary-safe.
    if let Some(first) = result.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    result
}

/// Random string of exactly `len` decimal digits.
pub fn digits<R: Rng>(rng: &mut R, len: usize) -> String {
    let mut result = String::with_capacity(len);
    for _ in 0..len {
        result.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    result
}
