//! Shared wire DTOs for the client/server boundary.

use serde::{Deserialize, Serialize};

/// Authenticated user identity as reported by the credential provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user identifier.
    pub id: String,
    /// Email address used as the login identifier.
    pub email: String,
}

/// A live session: bearer token plus the identity it belongs to.
///
/// Produced only by credential-provider calls; ownership transfers to the
/// session store and session controller on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token; the only value persisted across reloads.
    pub token: String,
    pub user: User,
}

/// One row of uploaded workout history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: i64,
    /// Workout date (`YYYY-MM-DD`).
    pub date: String,
    pub exercise: String,
    pub category: String,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub reps: Option<i64>,
    pub distance: Option<f64>,
    pub distance_unit: Option<String>,
    /// Duration as recorded in the source CSV (free-form).
    pub time: Option<String>,
    pub comment: Option<String>,
    pub created_at: String,
}

/// Token usage reported by the analysis backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// AI workout analysis returned by `POST /analyze-workouts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Markdown body of the analysis.
    pub analysis: String,
    pub model: Option<String>,
    pub usage: Option<AnalysisUsage>,
}
