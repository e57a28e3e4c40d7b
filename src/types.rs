use std::str::FromStr;

use crate::error::ContactSeedError;

/// Column set and tag-sampling variant for the generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Basic,
    Extended,
}

impl Schema {
    /// Header columns, in output order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Schema::Basic => &["name", "email", "phone", "company", "tags"],
            Schema::Extended => &["name", "email", "phone", "company", "location", "tags"],
        }
    }
}

impl FromStr for Schema {
    type Err = ContactSeedError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" | "b" => Ok(Schema::Basic),
            "extended" | "e" => Ok(Schema::Extended),
            other => Err(ContactSeedError::InvalidParameter(format!(
                "unknown schema '{}', expected 'basic' or 'extended'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub rows: u64,
    pub schema: Schema,
    /// Progress log interval in rows. 0 disables progress logging.
    pub progress_every: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 1_000_000,
            schema: Schema::Basic,
            progress_every: 100_000,
        }
    }
}
