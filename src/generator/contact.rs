use rand::seq::SliceRandom;
use rand::Rng;

use crate::generator::words;
use crate::vocab;

const NAME_WORD_MIN: usize = 4;
const NAME_WORD_MAX: usize = 8;
const COMPANY_WORD_MIN: usize = 5;
const COMPANY_WORD_MAX: usize = 9;
const LOCATION_WORD_MIN: usize = 4;
const LOCATION_WORD_MAX: usize = 10;
const PHONE_DIGITS: usize = 10;

/// Two capitalized words joined by a single space.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}",
        words::capitalized(rng, NAME_WORD_MIN, NAME_WORD_MAX),
        words::capitalized(rng, NAME_WORD_MIN, NAME_WORD_MAX)
    )
}

/// Email whose local part is the lowercased name with spaces replaced by
/// dots, plus a numeric suffix. Contains exactly one `@`.
pub fn email<R: Rng>(rng: &mut R, name: &str) -> String {
    let local = name.to_lowercase().replace(' ', ".");
    let num: u32 = rng.gen_range(1..=9999);
    let domain = vocab::EMAIL_DOMAINS.choose(rng).unwrap_or(&"example.com");
    format!("{}{}@{}", local, num, domain)
}

pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    words::digits(rng, PHONE_DIGITS)
}

pub fn company<R: Rng>(rng: &mut R) -> String {
    let suffix = vocab::COMPANY_SUFFIXES.choose(rng).unwrap_or(&"Inc");
    format!(
        "{} {}",
        words::capitalized(rng, COMPANY_WORD_MIN, COMPANY_WORD_MAX),
        suffix
    )
}

pub fn location<R: Rng>(rng: &mut R) -> String {
    words::capitalized(rng, LOCATION_WORD_MIN, LOCATION_WORD_MAX)
}
