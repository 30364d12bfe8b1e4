//! User model and form payloads

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::MAX_AGE_YEARS;

lazy_static::lazy_static! {
    /// Mirror of the server-side email check
    static ref EMAIL_REGEX: regex::Regex =
        regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    /// Letters and spaces only (name, country)
    static ref LETTERS_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-zA-Z\s]+$").unwrap();
    /// Optional leading +, then 10-15 digits or separators
    static ref MOBILE_REGEX: regex::Regex =
        regex::Regex::new(r"^\+?[\d\s\-()]{10,15}$").unwrap();
}

/// User record as returned by the server.
///
/// The server is authoritative; the client holds transient copies for
/// display and editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub country: String,
    pub about_you: String,
    pub birthday: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user. Mirrors the server's validation rules.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[validate(length(min = 2, max = 50, message = "Name is required and must be at least 2 characters"))]
    #[validate(regex(path = *LETTERS_REGEX, message = "Name should only contain letters and spaces"))]
    pub name: String,

    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number format"))]
    pub mobile_number: String,

    #[validate(length(min = 2, max = 20, message = "Country is required and must be at least 2 characters"))]
    #[validate(regex(path = *LETTERS_REGEX, message = "Country should only contain letters and spaces"))]
    pub country: String,

    #[validate(length(min = 10, max = 250, message = "About You is required and must be at least 10 characters"))]
    pub about_you: String,

    #[validate(custom(function = validate_birthday))]
    pub birthday: NaiveDate,
}

/// Partial payload for updating a user.
///
/// Only provided fields are sent and validated; the server keeps the rest.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 50, message = "Name is required and must be at least 2 characters"))]
    #[validate(regex(path = *LETTERS_REGEX, message = "Name should only contain letters and spaces"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *MOBILE_REGEX, message = "Invalid mobile number format"))]
    pub mobile_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 20, message = "Country is required and must be at least 2 characters"))]
    #[validate(regex(path = *LETTERS_REGEX, message = "Country should only contain letters and spaces"))]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 10, max = 250, message = "About You is required and must be at least 10 characters"))]
    pub about_you: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = validate_birthday))]
    pub birthday: Option<NaiveDate>,
}

impl From<&UserRecord> for UserPatch {
    /// Full-record patch, the shape an edit form starts from
    fn from(record: &UserRecord) -> Self {
        UserPatch {
            name: Some(record.name.clone()),
            email: Some(record.email.clone()),
            mobile_number: Some(record.mobile_number.clone()),
            country: Some(record.country.clone()),
            about_you: Some(record.about_you.clone()),
            birthday: Some(record.birthday),
        }
    }
}

/// Validate a birthday: required to be in the past and within a plausible age
fn validate_birthday(birthday: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();
    if *birthday > today {
        let mut err = ValidationError::new("birthday");
        err.message = Some("Birthday cannot be in the future".into());
        return Err(err);
    }
    if today.years_since(*birthday).unwrap_or(0) > MAX_AGE_YEARS {
        let mut err = ValidationError::new("birthday");
        err.message = Some("Invalid age".into());
        return Err(err);
    }
    Ok(())
}
