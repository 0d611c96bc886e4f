//! Build-time application configuration.
//!
//! DESIGN
//! ======
//! All environment input is read exactly once, at process start, through
//! `AuthConfig::from_env()`. The provider flavor becomes an explicit config
//! value handed to the credential-provider factory; nothing re-reads the
//! environment after startup, and a missing API URL fails the app before the
//! first request is ever made.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

/// Which credential-provider backend the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    /// Local credential server (`/auth/login`, `/auth/register` on the API).
    Local,
    /// Managed identity service with its own endpoint and app client id.
    Managed { endpoint: String, client_id: String },
}

/// Startup configuration for the auth layer and collaborator API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub api_url: String,
    /// Selected credential-provider flavor.
    pub provider: ProviderKind,
}

/// Startup configuration failures. All of these are fatal: the app renders
/// a configuration error screen instead of mounting the router.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("SWOLEPT_API_URL must be set at build time")]
    MissingApiUrl,
    #[error("unknown auth backend {0:?} (expected \"local\" or \"managed\")")]
    UnknownBackend(String),
    #[error("managed auth backend requires SWOLEPT_MANAGED_ENDPOINT and SWOLEPT_MANAGED_CLIENT_ID")]
    IncompleteManagedConfig,
}

impl AuthConfig {
    /// Read configuration from compile-time environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the API URL is missing, the backend flag
    /// is unrecognized, or the managed backend is selected without its
    /// endpoint and client id.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            option_env!("SWOLEPT_API_URL"),
            option_env!("SWOLEPT_AUTH_BACKEND"),
            option_env!("SWOLEPT_MANAGED_ENDPOINT"),
            option_env!("SWOLEPT_MANAGED_CLIENT_ID"),
        )
    }

    /// Build a config from raw environment values.
    ///
    /// The backend flag defaults to `"local"` when unset. Trailing slashes on
    /// the API URL are dropped so endpoint formatting stays uniform.
    ///
    /// # Errors
    ///
    /// See [`AuthConfig::from_env`].
    pub fn from_parts(
        api_url: Option<&str>,
        backend: Option<&str>,
        managed_endpoint: Option<&str>,
        managed_client_id: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_url = match api_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
            _ => return Err(ConfigError::MissingApiUrl),
        };

        let provider = match backend.map(str::trim).unwrap_or("local") {
            "local" => ProviderKind::Local,
            "managed" => match (managed_endpoint, managed_client_id) {
                (Some(endpoint), Some(client_id))
                    if !endpoint.trim().is_empty() && !client_id.trim().is_empty() =>
                {
                    ProviderKind::Managed {
                        endpoint: endpoint.trim().trim_end_matches('/').to_owned(),
                        client_id: client_id.trim().to_owned(),
                    }
                }
                _ => return Err(ConfigError::IncompleteManagedConfig),
            },
            other => return Err(ConfigError::UnknownBackend(other.to_owned())),
        };

        Ok(Self { api_url, provider })
    }
}
