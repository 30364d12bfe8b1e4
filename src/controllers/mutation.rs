//! Mutation controller
//!
//! Orchestrates create/update/delete calls and maps failures onto form
//! fields. Holds no reference to list state: on success the caller
//! triggers the list refresh.

use std::sync::Arc;

use crate::client::UsersApi;
use crate::error::{ApiError, ApiResult};
use crate::models::user::{UserDraft, UserPatch, UserRecord};
use crate::utils::validation::{validate_draft, validate_patch, FieldErrors, FormField};

pub struct MutationController {
    api: Arc<dyn UsersApi>,
}

impl MutationController {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        MutationController { api }
    }

    /// Validate every field, then create. A draft that fails validation
    /// never reaches the network.
    pub async fn create(&self, draft: &UserDraft) -> Result<UserRecord, FieldErrors> {
        let errors = validate_draft(draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        self.api.create_user(draft).await.map_err(translate_api_error)
    }

    /// Validate the provided fields, then update
    pub async fn update(&self, id: i64, patch: &UserPatch) -> Result<UserRecord, FieldErrors> {
        let errors = validate_patch(patch);
        if !errors.is_empty() {
            return Err(errors);
        }

        self.api.update_user(id, patch).await.map_err(translate_api_error)
    }

    /// Delete without client-side validation
    pub async fn remove(&self, id: i64) -> ApiResult<()> {
        self.api.delete_user(id).await
    }
}

/// Map a server error onto form fields.
///
/// Duplicate detection is substring matching against server-controlled
/// text: a message mentioning "email" lands on the email field, "mobile
/// number" on the mobile number field, anything else on `general`. The
/// wording contract is preserved as documented.
fn translate_api_error(error: ApiError) -> FieldErrors {
    match &error {
        ApiError::Validation(message)
        | ApiError::Conflict(message)
        | ApiError::Unknown(message) => {
            let mut errors = FieldErrors::new();
            if message.contains("email") {
                errors.insert(FormField::Email, message.clone());
            } else if message.contains("mobile number") {
                errors.insert(FormField::MobileNumber, message.clone());
            } else {
                errors.insert(FormField::General, message.clone());
            }
            errors
        }
        other => {
            tracing::warn!(kind = other.kind(), "mutation failed: {}", other);
            FieldErrors::general(other.to_string())
        }
    }
}
