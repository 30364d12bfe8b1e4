//! Form validation: per-field rules composed into a field-error mapping
//!
//! The rules themselves live as `validator` attributes on the form payloads
//! (see `models::user`); this module turns their output into the
//! field-to-message mapping the console renders next to inputs.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use crate::models::user::{UserDraft, UserPatch};

/// A form field that can carry an error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    MobileNumber,
    Country,
    Birthday,
    AboutYou,
    /// Errors not attributable to a single field
    General,
}

impl FormField {
    /// Wire/display name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::MobileNumber => "mobileNumber",
            FormField::Country => "country",
            FormField::Birthday => "birthday",
            FormField::AboutYou => "aboutYou",
            FormField::General => "general",
        }
    }

    fn from_struct_field(name: &str) -> Self {
        match name {
            "name" => FormField::Name,
            "email" => FormField::Email,
            "mobile_number" => FormField::MobileNumber,
            "country" => FormField::Country,
            "birthday" => FormField::Birthday,
            "about_you" => FormField::AboutYou,
            _ => FormField::General,
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-name to message mapping produced by client-side validation and by
/// translating server errors.
///
/// Cleared per-field on successful re-validation, wholesale on successful
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single general (non-field) error
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(FormField::General, message);
        errors
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop one field's error, e.g. after it re-validates cleanly
    pub fn clear_field(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                out.insert(FormField::from_struct_field(field), message);
            }
        }
        out
    }
}

/// Validate a complete create payload
pub fn validate_draft(draft: &UserDraft) -> FieldErrors {
    match draft.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}

/// Validate only the fields present in an update payload
pub fn validate_patch(patch: &UserPatch) -> FieldErrors {
    match patch.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => errors.into(),
    }
}

/// Re-validate one field against the current draft, clearing or replacing
/// its entry in place
pub fn revalidate_field(draft: &UserDraft, field: FormField, errors: &mut FieldErrors) {
    match validate_draft(draft).get(field) {
        Some(message) => {
            let message = message.to_string();
            errors.insert(field, message);
        }
        None => errors.clear_field(field),
    }
}
