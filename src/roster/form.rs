//! # Form Binding
//!
//! The form is the boundary between raw user input and the store. It owns:
//!
//! - the current text of each input ([`FormValues`]),
//! - whether the next submit edits an existing record (edit mode),
//! - presence/length/choice validation.
//!
//! Validation happens here and only here. A [`ValidationErrors`] never reaches
//! the store and never mutates anything.
//!
//! Entering edit mode is a single [`FormState::load_record`] call that takes the
//! whole record, so the inputs and the bound id can't disagree.

use crate::model::{Country, Person, PersonFields, PersonId};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_MAX_NAME_LEN: usize = 30;
pub const DEFAULT_MAX_EMAIL_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_name_len: usize,
    pub max_email_len: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_email_len: DEFAULT_MAX_EMAIL_LEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Address,
    City,
    Country,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Email => "Email",
            Field::Address => "Address",
            Field::City => "City",
            Field::Country => "Country",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    TooLong { max: usize },
    NotAnOption,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// The message shown next to the offending input.
    pub fn message(&self) -> String {
        match &self.kind {
            FieldErrorKind::Required => "* This field is required".to_string(),
            FieldErrorKind::TooLong { max } => {
                format!("{} cannot exceed {} characters", self.field.label(), max)
            }
            FieldErrorKind::NotAnOption => "* Select one option".to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw text currently in each input. Country is the selected option label,
/// empty meaning nothing selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub country: String,
}

impl From<&Person> for FormValues {
    fn from(person: &Person) -> Self {
        let f = &person.fields;
        Self {
            full_name: f.full_name.clone(),
            email: f.email.clone(),
            address: f.address.clone(),
            city: f.city.clone(),
            country: f.country.map(|c| c.label().to_string()).unwrap_or_default(),
        }
    }
}

/// A batch of edits typed into the form. `None` leaves an input untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// What a submit asks the store to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    Create(PersonFields),
    Update(PersonId, PersonFields),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    edit_target: Option<PersonId>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn edit_target(&self) -> Option<PersonId> {
        self.edit_target
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.edit_mode() {
            "Edit"
        } else {
            "Submit"
        }
    }

    pub fn apply(&mut self, input: FormInput) {
        let v = &mut self.values;
        if let Some(s) = input.full_name {
            v.full_name = s;
        }
        if let Some(s) = input.email {
            v.email = s;
        }
        if let Some(s) = input.address {
            v.address = s;
        }
        if let Some(s) = input.city {
            v.city = s;
        }
        if let Some(s) = input.country {
            v.country = s;
        }
    }

    /// Populate every input from `person` and bind its id for the next submit.
    pub fn load_record(&mut self, person: &Person) {
        self.values = FormValues::from(person);
        self.edit_target = Some(person.id);
    }

    /// Back to empty defaults, out of edit mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self, limits: &FieldLimits) -> Result<PersonFields, ValidationErrors> {
        let v = &self.values;
        let mut errors = Vec::new();

        let full_name = v.full_name.trim();
        check_text(&mut errors, Field::FullName, full_name, Some(limits.max_name_len));
        let email = v.email.trim();
        check_text(&mut errors, Field::Email, email, Some(limits.max_email_len));
        let address = v.address.trim();
        check_text(&mut errors, Field::Address, address, None);
        let city = v.city.trim();
        check_text(&mut errors, Field::City, city, None);

        let country = match v.country.parse::<Country>() {
            Ok(c) => Some(c),
            Err(_) => {
                errors.push(FieldError {
                    field: Field::Country,
                    kind: FieldErrorKind::NotAnOption,
                });
                None
            }
        };

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(PersonFields {
            full_name: full_name.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            country,
        })
    }

    /// Create unless a record is bound for editing.
    pub fn intent(&self, fields: PersonFields) -> FormIntent {
        match self.edit_target {
            Some(id) => FormIntent::Update(id, fields),
            None => FormIntent::Create(fields),
        }
    }
}

fn check_text(errors: &mut Vec<FieldError>, field: Field, value: &str, max: Option<usize>) {
    if value.is_empty() {
        errors.push(FieldError {
            field,
            kind: FieldErrorKind::Required,
        });
        return;
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            errors.push(FieldError {
                field,
                kind: FieldErrorKind::TooLong { max },
            });
        }
    }
}
