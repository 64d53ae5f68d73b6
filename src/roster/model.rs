use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned record identity. Always positive.
pub type PersonId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Canada,
    America,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::Canada, Country::America];

    pub fn label(&self) -> &'static str {
        match self {
            Country::Canada => "Canada",
            Country::America => "America",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown country: {}", wanted))
    }
}

/// Everything about a person except its identity.
///
/// This is what the form hands to the store on both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub country: Option<Country>,
}

impl PersonFields {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            address: address.into(),
            city: String::new(),
            country: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    #[serde(flatten)]
    pub fields: PersonFields,
}

impl Person {
    pub fn new(id: PersonId, fields: PersonFields) -> Self {
        Self { id, fields }
    }

    pub fn full_name(&self) -> &str {
        &self.fields.full_name
    }

    /// Street and city joined the way the table shows them.
    pub fn location(&self) -> String {
        if self.fields.city.is_empty() {
            self.fields.address.clone()
        } else {
            format!("{}, {}", self.fields.address, self.fields.city)
        }
    }
}
