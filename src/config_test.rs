use super::*;

#[test]
fn missing_api_url_fails_at_startup() {
    let err = AuthConfig::from_parts(None, Some("local"), None, None).unwrap_err();
    assert_eq!(err, ConfigError::MissingApiUrl);
}

#[test]
fn blank_api_url_fails_at_startup() {
    let err = AuthConfig::from_parts(Some("   "), None, None, None).unwrap_err();
    assert_eq!(err, ConfigError::MissingApiUrl);
}

#[test]
fn backend_flag_defaults_to_local() {
    let config = AuthConfig::from_parts(Some("https://api.example.com"), None, None, None)
        .expect("config should build");
    assert_eq!(config.provider, ProviderKind::Local);
}

#[test]
fn api_url_trailing_slash_is_dropped() {
    let config = AuthConfig::from_parts(Some("https://api.example.com/"), Some("local"), None, None)
        .expect("config should build");
    assert_eq!(config.api_url, "https://api.example.com");
}

#[test]
fn unknown_backend_flag_is_rejected() {
    let err =
        AuthConfig::from_parts(Some("https://api.example.com"), Some("staging"), None, None)
            .unwrap_err();
    assert_eq!(err, ConfigError::UnknownBackend("staging".to_owned()));
}

#[test]
fn managed_backend_requires_endpoint_and_client_id() {
    let err = AuthConfig::from_parts(
        Some("https://api.example.com"),
        Some("managed"),
        Some("https://idp.example.com"),
        None,
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::IncompleteManagedConfig);
}

#[test]
fn managed_backend_builds_with_full_config() {
    let config = AuthConfig::from_parts(
        Some("https://api.example.com"),
        Some("managed"),
        Some("https://idp.example.com/"),
        Some("client-123"),
    )
    .expect("config should build");
    assert_eq!(
        config.provider,
        ProviderKind::Managed {
            endpoint: "https://idp.example.com".to_owned(),
            client_id: "client-123".to_owned(),
        }
    );
}
