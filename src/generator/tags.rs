use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Schema;
use crate::vocab;

/// Comma-joined tag sample for one row. The basic schema draws 1-3 tags
/// with replacement from the numbered vocabulary; the extended schema
/// draws 1-2 distinct tags from the semantic vocabulary.
pub fn sample<R: Rng>(rng: &mut R, schema: Schema) -> String {
    match schema {
        Schema::Basic => {
            let count = rng.gen_range(1..=3);
            let picks: Vec<&str> = (0..count)
                .map(|_| *vocab::BASIC_TAGS.choose(rng).unwrap_or(&"tag1"))
                .collect();
            picks.join(",")
        }
        Schema::Extended => {
            let count = rng.gen_range(1..=2);
            let picks: Vec<&str> = vocab::EXTENDED_TAGS
                .choose_multiple(rng, count)
                .copied()
                .collect();
            picks.join(",")
        }
    }
}
