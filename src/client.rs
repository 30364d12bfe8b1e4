//! HTTP client for the remote users API
//!
//! Builds requests from structured parameters and normalizes every
//! response and failure into the [`ApiError`] taxonomy. All endpoints wrap
//! their payload in an `{error, payload}` envelope; the unwrap logic is
//! shared across operations.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Config;
use crate::constants::USERS_PATH;
use crate::error::{ApiError, ApiResult};
use crate::models::filters::FilterSet;
use crate::models::pagination::{PageInfo, PaginationSpec};
use crate::models::user::{UserDraft, UserPatch, UserRecord};
use crate::query;

/// One page of users plus its pagination metadata
#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    pub users: Vec<UserRecord>,
    pub pagination: PageInfo,
}

/// Operations of the remote users API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// List users matching the filters, one page at a time
    async fn list_users(
        &self,
        filters: &FilterSet,
        pagination: &PaginationSpec,
    ) -> ApiResult<UserPage>;

    /// Fetch a single user by id
    async fn get_user(&self, id: i64) -> ApiResult<UserRecord>;

    /// Create a user; the server assigns the id
    async fn create_user(&self, draft: &UserDraft) -> ApiResult<UserRecord>;

    /// Update a user; absent patch fields are left unchanged
    async fn update_user(&self, id: i64, patch: &UserPatch) -> ApiResult<UserRecord>;

    /// Delete a user
    async fn delete_user(&self, id: i64) -> ApiResult<()>;
}

/// The `{error, payload}` wrapper every endpoint uses
#[derive(Debug, Deserialize)]
struct Envelope {
    error: bool,
    #[serde(default)]
    payload: Value,
}

/// reqwest-backed client for the remote users API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration. The timeout is a hardening
    /// measure; latency past it surfaces as a server error.
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| ApiError::Unknown(format!("failed to build HTTP client: {}", e)))?;

        Ok(ApiClient {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn users_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, USERS_PATH, id)
    }

    /// Fail fast on a missing id; no request is issued
    fn require_id(id: i64) -> ApiResult<()> {
        if id <= 0 {
            return Err(ApiError::InvalidArgument("User ID is required".to_string()));
        }
        Ok(())
    }

    async fn read_payload<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status().as_u16();
        match response.json::<Value>().await.ok() {
            Some(body) => unwrap_envelope(status, body),
            None if !(200..300).contains(&status) => Err(ApiError::from_status(status, None)),
            None => Err(ApiError::Unknown("malformed response body".to_string())),
        }
    }
}

#[async_trait]
impl UsersApi for ApiClient {
    async fn list_users(
        &self,
        filters: &FilterSet,
        pagination: &PaginationSpec,
    ) -> ApiResult<UserPage> {
        let url = format!("{}?{}", self.users_url(), query::encode(filters, pagination));
        tracing::debug!(%url, "fetching users");

        let response = self.http.get(url).send().await?;
        Self::read_payload(response).await
    }

    async fn get_user(&self, id: i64) -> ApiResult<UserRecord> {
        Self::require_id(id)?;

        let response = self.http.get(self.user_url(id)).send().await?;
        Self::read_payload(response).await
    }

    async fn create_user(&self, draft: &UserDraft) -> ApiResult<UserRecord> {
        let response = self.http.post(self.users_url()).json(draft).send().await?;
        Self::read_payload(response).await
    }

    async fn update_user(&self, id: i64, patch: &UserPatch) -> ApiResult<UserRecord> {
        Self::require_id(id)?;

        let response = self
            .http
            .put(self.user_url(id))
            .json(patch)
            .send()
            .await?;
        Self::read_payload(response).await
    }

    async fn delete_user(&self, id: i64) -> ApiResult<()> {
        Self::require_id(id)?;

        let response = self.http.delete(self.user_url(id)).send().await?;
        let status = response.status().as_u16();
        match response.json::<Value>().await.ok() {
            Some(body) => unwrap_envelope::<Value>(status, body).map(|_| ()),
            None if !(200..300).contains(&status) => Err(ApiError::from_status(status, None)),
            // a 2xx with an empty body is still a successful delete
            None => Ok(()),
        }
    }
}

/// Unwrap the response envelope.
///
/// An `error: true` payload inside a 2xx response is a logical failure,
/// not a success. Non-2xx statuses are normalized through
/// [`ApiError::from_status`], reusing the payload message when present.
fn unwrap_envelope<T: DeserializeOwned>(status: u16, body: Value) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        let message = body
            .get("payload")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(ApiError::from_status(status, message));
    }

    let envelope: Envelope = serde_json::from_value(body)
        .map_err(|e| ApiError::Unknown(format!("malformed envelope: {}", e)))?;

    if envelope.error {
        let message = envelope
            .payload
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| "An error occurred".to_string());
        return Err(ApiError::Unknown(message));
    }

    serde_json::from_value(envelope.payload)
        .map_err(|e| ApiError::Unknown(format!("unexpected payload shape: {}", e)))
}
