//! Credential providers: the component that turns user-entered credentials
//! into a [`Session`].
//!
//! DESIGN
//! ======
//! Exactly one provider is constructed, at startup, by
//! [`CredentialProvider::from_config`]; the flavor flag is never re-read.
//! The two backends answer in different shapes ([`LocalAuthResult`] vs
//! [`ManagedLoginResult`]), so each has an explicit adapter that normalizes
//! into the single `Session` type the rest of the app consumes. The managed
//! adapter derives the bearer token from the identity service's real
//! authentication result (the id token), never a synthesized stand-in; a
//! login answer without one is a typed rejection.
//!
//! Network calls run only in the browser (`hydrate`); response handling is
//! factored into pure functions so it stays testable off-browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use crate::config::{AuthConfig, ProviderKind};
use crate::net::error::AuthError;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::server_error_message;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::User;
use crate::net::types::Session;

/// Outcome of a registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The backend issued a session immediately (local flavor).
    SessionIssued(Session),
    /// The account exists but needs a confirmation code (managed flavor).
    ConfirmationRequired,
}

/// The pluggable identity backend, selected once at startup.
#[derive(Clone, Debug)]
pub enum CredentialProvider {
    Local(LocalProvider),
    Managed(ManagedProvider),
}

impl CredentialProvider {
    /// Factory: build the one concrete provider for this process.
    pub fn from_config(config: &AuthConfig) -> Self {
        match &config.provider {
            ProviderKind::Local => Self::Local(LocalProvider {
                base_url: config.api_url.clone(),
            }),
            ProviderKind::Managed {
                endpoint,
                client_id,
            } => Self::Managed(ManagedProvider {
                endpoint: endpoint.clone(),
                client_id: client_id.clone(),
            }),
        }
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// `AuthenticationFailed` for rejected credentials, `NetworkFailure`
    /// when the backend is unreachable, `ServerRejected` otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        match self {
            Self::Local(p) => p.login(email, password).await,
            Self::Managed(p) => p.login(email, password).await,
        }
    }

    /// Create an account. The managed flavor always requires confirmation;
    /// the local flavor always issues a session immediately.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CredentialProvider::login`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        match self {
            Self::Local(p) => p.register(email, password, name).await,
            Self::Managed(p) => p.register(email, password, name).await,
        }
    }

    /// Submit a registration confirmation code. No-op success for the local
    /// flavor, which never issues codes.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CredentialProvider::login`].
    pub async fn confirm_registration(&self, email: &str, code: &str) -> Result<(), AuthError> {
        match self {
            Self::Local(_) => Ok(()),
            Self::Managed(p) => p.confirm_registration(email, code).await,
        }
    }
}

// =============================================================
// Local flavor: REST credential server on the API host
// =============================================================

/// Talks to the local credential server (`/auth/login`, `/auth/register`).
#[derive(Clone, Debug)]
pub struct LocalProvider {
    base_url: String,
}

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FALLBACK: &str = "Failed to login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_FALLBACK: &str = "Failed to register";

/// Successful body from the local credential server.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct LocalAuthResult {
    token: String,
    user: LocalUser,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct LocalUser {
    #[serde(alias = "user_id")]
    id: String,
    email: String,
}

/// Adapter: local wire shape -> normalized session.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_local(result: LocalAuthResult) -> Session {
    Session {
        token: result.token,
        user: User {
            id: result.user.id,
            email: result.user.email,
        },
    }
}

/// Parse a settled local auth response into a session.
///
/// Non-2xx surfaces the server's `error` text when present; 401/403 become
/// `AuthenticationFailed` so the login form can show the backend message
/// verbatim.
#[cfg(any(test, feature = "hydrate"))]
fn parse_local_session(status: u16, body: &str, fallback: &str) -> Result<Session, AuthError> {
    if (200..300).contains(&status) {
        let result: LocalAuthResult = serde_json::from_str(body)
            .map_err(|e| AuthError::ServerRejected(format!("malformed auth response: {e}")))?;
        return Ok(session_from_local(result));
    }
    let message = server_error_message(body).unwrap_or_else(|| fallback.to_owned());
    if status == 401 || status == 403 {
        Err(AuthError::AuthenticationFailed(message))
    } else {
        Err(AuthError::ServerRejected(message))
    }
}

impl LocalProvider {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let (status, body) =
                post_json(&format!("{}/auth/login", self.base_url), &payload).await?;
            parse_local_session(status, &body, LOGIN_FALLBACK)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(server_side_stub())
        }
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload =
                serde_json::json!({ "email": email, "password": password, "name": name });
            let (status, body) =
                post_json(&format!("{}/auth/register", self.base_url), &payload).await?;
            parse_local_session(status, &body, REGISTER_FALLBACK)
                .map(RegisterOutcome::SessionIssued)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, name);
            Err(server_side_stub())
        }
    }
}

// =============================================================
// Managed flavor: cloud identity service
// =============================================================

/// Talks to the managed identity service's JSON protocol.
#[derive(Clone, Debug)]
pub struct ManagedProvider {
    endpoint: String,
    client_id: String,
}

#[cfg(feature = "hydrate")]
const TARGET_INITIATE_AUTH: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
#[cfg(feature = "hydrate")]
const TARGET_SIGN_UP: &str = "AWSCognitoIdentityProviderService.SignUp";
#[cfg(feature = "hydrate")]
const TARGET_CONFIRM_SIGN_UP: &str = "AWSCognitoIdentityProviderService.ConfirmSignUp";

/// Successful `InitiateAuth` body from the managed service.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ManagedLoginResult {
    authentication_result: Option<ManagedTokens>,
    challenge_name: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ManagedTokens {
    id_token: String,
}

/// Error body from the managed service.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ManagedErrorBody {
    #[serde(rename = "__type")]
    kind: Option<String>,
    message: Option<String>,
}

/// Claims the client cares about inside the managed id token.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: Option<String>,
    email: Option<String>,
}

/// Decode the payload segment of a JWT without verifying it.
///
/// The client treats the token as opaque for transport; the claims are read
/// only to populate the local `User` cache. Verification belongs to the
/// backends that accept the token.
#[cfg(any(test, feature = "hydrate"))]
fn claims_from_jwt(token: &str) -> Option<IdTokenClaims> {
    use base64::Engine as _;

    let payload = token.split('.').nth(1)?;
    let raw = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .ok()?;
    serde_json::from_slice(&raw).ok()
}

/// Adapter: managed wire shape -> normalized session.
///
/// The bearer token is the service-issued id token. A response carrying a
/// challenge instead of tokens is surfaced as a typed rejection rather than
/// papered over with a placeholder.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_managed(email: &str, result: ManagedLoginResult) -> Result<Session, AuthError> {
    let Some(tokens) = result.authentication_result else {
        let reason = result
            .challenge_name
            .map_or_else(
                || "identity service returned no session".to_owned(),
                |challenge| format!("identity service requires additional step: {challenge}"),
            );
        return Err(AuthError::ServerRejected(reason));
    };

    let claims = claims_from_jwt(&tokens.id_token);
    let user = User {
        id: claims
            .as_ref()
            .and_then(|c| c.sub.clone())
            .unwrap_or_else(|| email.to_owned()),
        email: claims
            .and_then(|c| c.email)
            .unwrap_or_else(|| email.to_owned()),
    };
    Ok(Session {
        token: tokens.id_token,
        user,
    })
}

/// Map a managed-service error body onto the shared taxonomy.
#[cfg(any(test, feature = "hydrate"))]
fn managed_error(status: u16, body: &str) -> AuthError {
    let parsed: Option<ManagedErrorBody> = serde_json::from_str(body).ok();
    let kind = parsed
        .as_ref()
        .and_then(|b| b.kind.as_deref())
        .unwrap_or("")
        .to_owned();
    let message = parsed
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("identity service request failed: {status}"));

    match kind.rsplit('#').next().unwrap_or("") {
        "NotAuthorizedException" | "UserNotFoundException" | "UserNotConfirmedException" => {
            AuthError::AuthenticationFailed(message)
        }
        "TooManyRequestsException" | "LimitExceededException" => AuthError::RateLimited,
        _ => AuthError::ServerRejected(message),
    }
}

impl ManagedProvider {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "AuthFlow": "USER_PASSWORD_AUTH",
                "ClientId": self.client_id,
                "AuthParameters": { "USERNAME": email, "PASSWORD": password },
            });
            let (status, body) = self.call(TARGET_INITIATE_AUTH, &payload).await?;
            if !(200..300).contains(&status) {
                return Err(managed_error(status, &body));
            }
            let result: ManagedLoginResult = serde_json::from_str(&body)
                .map_err(|e| AuthError::ServerRejected(format!("malformed auth response: {e}")))?;
            session_from_managed(email, result)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(server_side_stub())
        }
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<RegisterOutcome, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "ClientId": self.client_id,
                "Username": email,
                "Password": password,
                "UserAttributes": [
                    { "Name": "email", "Value": email },
                    { "Name": "name", "Value": name },
                ],
            });
            let (status, body) = self.call(TARGET_SIGN_UP, &payload).await?;
            if !(200..300).contains(&status) {
                return Err(managed_error(status, &body));
            }
            // The managed service always requires a confirmation code before
            // the account can log in, so no session is issued here.
            Ok(RegisterOutcome::ConfirmationRequired)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, name);
            Err(server_side_stub())
        }
    }

    async fn confirm_registration(&self, email: &str, code: &str) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "ClientId": self.client_id,
                "Username": email,
                "ConfirmationCode": code,
            });
            let (status, body) = self.call(TARGET_CONFIRM_SIGN_UP, &payload).await?;
            if !(200..300).contains(&status) {
                return Err(managed_error(status, &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, code);
            Err(server_side_stub())
        }
    }

    /// One managed-service RPC: POST to the endpoint with the operation in
    /// the `x-amz-target` header.
    #[cfg(feature = "hydrate")]
    async fn call(
        &self,
        target: &str,
        payload: &serde_json::Value,
    ) -> Result<(u16, String), AuthError> {
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", target)
            .json(payload)
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok((status, body))
    }
}

/// POST a JSON payload and return the settled status and raw body.
#[cfg(feature = "hydrate")]
async fn post_json(url: &str, payload: &serde_json::Value) -> Result<(u16, String), AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| AuthError::NetworkFailure(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Ok((status, body))
}

#[cfg(not(feature = "hydrate"))]
fn server_side_stub() -> AuthError {
    AuthError::NetworkFailure("not available on server".to_owned())
}
