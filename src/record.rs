use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::{contact, tags};
use crate::types::Schema;

/// One synthetic contact row. `location` is populated only for the
/// extended schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub tags: String,
}

impl ContactRecord {
    /// Assemble one record, threading the generated name into the email
    /// generator so the address matches the name.
    pub fn generate<R: Rng>(rng: &mut R, schema: Schema) -> Self {
        let name = contact::full_name(rng);
        let email = contact::email(rng, &name);
        Self {
            email,
            phone: contact::phone_number(rng),
            company: contact::company(rng),
            location: (schema == Schema::Extended).then(|| contact::location(rng)),
            tags: tags::sample(rng, schema),
            name,
        }
    }

    /// Output fields in column order. Matches `Schema::columns` for the
    /// schema the record was generated with.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.company.as_str(),
        ];
        if let Some(location) = &self.location {
            fields.push(location.as_str());
        }
        fields.push(self.tags.as_str());
        fields
    }
}
