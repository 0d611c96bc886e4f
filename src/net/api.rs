//! Bearer-token REST calls to the workout collaborators.
//!
//! ERROR HANDLING
//! ==============
//! Every call attaches `Authorization: Bearer <token>` from the session
//! store and maps HTTP 401 to `AuthError::SessionExpired` through one
//! classifier, so pages handle forced logout uniformly via
//! `SessionController::absorb_error`. A missing stored token short-circuits
//! to the same error without a network round trip.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use crate::config::AuthConfig;
use crate::net::error::AuthError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::classify_response;
use crate::net::types::{AnalysisResponse, WorkoutRecord};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::session_store;

#[cfg(any(test, feature = "hydrate"))]
const HISTORY_FALLBACK: &str = "Failed to fetch workout history";
#[cfg(feature = "hydrate")]
const UPLOAD_FALLBACK: &str = "Failed to upload file";
#[cfg(any(test, feature = "hydrate"))]
const ANALYZE_FALLBACK: &str = "Failed to analyze workout history";

/// HTTP client for the backend API, built once from startup config.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
        }
    }

    /// Fetch the full uploaded workout history.
    ///
    /// # Errors
    ///
    /// `SessionExpired` on 401 or a missing token; `NetworkFailure` or
    /// `ServerRejected` otherwise.
    pub async fn fetch_workout_history(&self) -> Result<Vec<WorkoutRecord>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let token = bearer_token()?;
            let url = format!("{}/workout-history", self.base_url);
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            parse_json_body(status, &body, HISTORY_FALLBACK)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side_stub())
        }
    }

    /// Upload a workout CSV export; returns the stored file key.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ApiClient::fetch_workout_history`].
    #[cfg(feature = "hydrate")]
    pub async fn upload_workout_csv(&self, file: &web_sys::File) -> Result<String, AuthError> {
        let token = bearer_token()?;
        let form = web_sys::FormData::new()
            .map_err(|_| AuthError::InvalidInput("could not build upload form".to_owned()))?;
        form.append_with_blob("file", file)
            .map_err(|_| AuthError::InvalidInput("could not attach file".to_owned()))?;

        let url = format!("{}/upload", self.base_url);
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .header("Accept", "application/json")
            .body(form)
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        #[derive(serde::Deserialize)]
        struct UploadResponse {
            file_key: String,
        }
        let parsed: UploadResponse = parse_json_body(status, &body, UPLOAD_FALLBACK)?;
        Ok(parsed.file_key)
    }

    /// Request an AI analysis of the supplied history.
    ///
    /// Downstream throttling surfaces as `RateLimited` so callers can show
    /// the softer message and discourage an immediate retry.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`ApiClient::fetch_workout_history`], plus
    /// `RateLimited`.
    pub async fn analyze_workouts(
        &self,
        history: &[WorkoutRecord],
    ) -> Result<AnalysisResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let token = bearer_token()?;
            let url = format!("{}/analyze-workouts", self.base_url);
            let payload = serde_json::json!({ "workoutHistory": history });
            let resp = gloo_net::http::Request::post(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .header("Accept", "application/json")
                .json(&payload)
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            parse_json_body(status, &body, ANALYZE_FALLBACK)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = history;
            Err(server_side_stub())
        }
    }
}

/// Token for the `Authorization` header; absence means the session is gone.
#[cfg(any(test, feature = "hydrate"))]
fn bearer_token() -> Result<String, AuthError> {
    session_store::get().ok_or(AuthError::SessionExpired)
}

/// Decode a settled collaborator response, classifying failures uniformly.
#[cfg(any(test, feature = "hydrate"))]
fn parse_json_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, AuthError> {
    if !(200..300).contains(&status) {
        return Err(classify_response(status, body, fallback));
    }
    serde_json::from_str(body)
        .map_err(|e| AuthError::ServerRejected(format!("malformed response: {e}")))
}

#[cfg(not(feature = "hydrate"))]
fn server_side_stub() -> AuthError {
    AuthError::NetworkFailure("not available on server".to_owned())
}
