pub static EMAIL_DOMAINS: &[&str] = &[
    "example.com", "test.com", "domain.net", "sample.org", "email.co",
];

pub static COMPANY_SUFFIXES: &[&str] = &["Inc", "Ltd", "Group", "LLC", "Holdings"];

/// Tag vocabulary for the basic schema, sampled with replacement.
pub static BASIC_TAGS: &[&str] = &["tag1", "tag2", "tag3", "tag4", "tag5"];

/// Tag vocabulary for the extended schema, sampled without replacement.
pub static EXTENDED_TAGS: &[&str] = &[
    "customer", "lead", "vip", "partner", "trial", "internal", "archived",
];
