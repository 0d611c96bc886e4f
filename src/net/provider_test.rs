use super::*;
use crate::config::AuthConfig;

use base64::Engine as _;

fn jwt_with_claims(claims: &serde_json::Value) -> String {
    let encode = |v: &serde_json::Value| {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(v.to_string())
    };
    let header = encode(&serde_json::json!({ "alg": "RS256", "typ": "JWT" }));
    format!("{header}.{}.sig", encode(claims))
}

// =============================================================
// Factory
// =============================================================

#[test]
fn factory_builds_local_provider_from_local_config() {
    let config = AuthConfig::from_parts(Some("https://api.example.com"), Some("local"), None, None)
        .expect("config should build");
    let provider = CredentialProvider::from_config(&config);
    assert!(matches!(provider, CredentialProvider::Local(_)));
}

#[test]
fn factory_builds_managed_provider_from_managed_config() {
    let config = AuthConfig::from_parts(
        Some("https://api.example.com"),
        Some("managed"),
        Some("https://idp.example.com"),
        Some("client-123"),
    )
    .expect("config should build");
    let provider = CredentialProvider::from_config(&config);
    assert!(matches!(provider, CredentialProvider::Managed(_)));
}

// =============================================================
// Local adapter
// =============================================================

#[test]
fn local_success_normalizes_into_session() {
    let body = r#"{"token":"tok-1","user":{"user_id":"u-9","email":"a@x.com","username":"a@x.com"}}"#;
    let session = parse_local_session(200, body, LOGIN_FALLBACK).expect("session should parse");
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.user.id, "u-9");
    assert_eq!(session.user.email, "a@x.com");
}

#[test]
fn local_success_accepts_plain_id_key() {
    let body = r#"{"token":"tok-2","user":{"id":"u-1","email":"b@x.com"}}"#;
    let session = parse_local_session(200, body, LOGIN_FALLBACK).expect("session should parse");
    assert_eq!(session.user.id, "u-1");
}

#[test]
fn local_unauthorized_surfaces_backend_text_verbatim() {
    let err = parse_local_session(401, r#"{"error":"Invalid credentials"}"#, LOGIN_FALLBACK)
        .unwrap_err();
    assert_eq!(err, AuthError::AuthenticationFailed("Invalid credentials".to_owned()));
}

#[test]
fn local_failure_without_body_uses_fallback() {
    let err = parse_local_session(400, "", REGISTER_FALLBACK).unwrap_err();
    assert_eq!(err, AuthError::ServerRejected("Failed to register".to_owned()));
}

#[test]
fn local_malformed_success_body_is_rejected() {
    let err = parse_local_session(200, r#"{"token":42}"#, LOGIN_FALLBACK).unwrap_err();
    assert!(matches!(err, AuthError::ServerRejected(_)));
}

// =============================================================
// Managed adapter
// =============================================================

#[test]
fn managed_session_token_comes_from_id_token() {
    let token = jwt_with_claims(&serde_json::json!({ "sub": "sub-7", "email": "c@x.com" }));
    let result: ManagedLoginResult = serde_json::from_str(&format!(
        r#"{{"AuthenticationResult":{{"IdToken":"{token}","AccessToken":"at","ExpiresIn":3600}}}}"#
    ))
    .expect("result should parse");

    let session = session_from_managed("c@x.com", result).expect("session should adapt");
    assert_eq!(session.token, token);
    assert_eq!(session.user.id, "sub-7");
    assert_eq!(session.user.email, "c@x.com");
}

#[test]
fn managed_token_without_claims_falls_back_to_login_email() {
    let result = ManagedLoginResult {
        authentication_result: Some(ManagedTokens {
            id_token: "opaque-token".to_owned(),
        }),
        challenge_name: None,
    };
    let session = session_from_managed("d@x.com", result).expect("session should adapt");
    assert_eq!(session.token, "opaque-token");
    assert_eq!(session.user.id, "d@x.com");
    assert_eq!(session.user.email, "d@x.com");
}

#[test]
fn managed_login_without_tokens_is_a_typed_rejection() {
    let result = ManagedLoginResult {
        authentication_result: None,
        challenge_name: Some("NEW_PASSWORD_REQUIRED".to_owned()),
    };
    let err = session_from_managed("e@x.com", result).unwrap_err();
    assert_eq!(
        err,
        AuthError::ServerRejected(
            "identity service requires additional step: NEW_PASSWORD_REQUIRED".to_owned()
        )
    );
}

#[test]
fn managed_not_authorized_maps_to_authentication_failed() {
    let body = r#"{"__type":"NotAuthorizedException","message":"Incorrect username or password."}"#;
    assert_eq!(
        managed_error(400, body),
        AuthError::AuthenticationFailed("Incorrect username or password.".to_owned())
    );
}

#[test]
fn managed_error_kind_accepts_namespaced_type() {
    let body = r#"{"__type":"com.amazonaws.cognito#UserNotFoundException","message":"no such user"}"#;
    assert_eq!(
        managed_error(400, body),
        AuthError::AuthenticationFailed("no such user".to_owned())
    );
}

#[test]
fn managed_throttling_maps_to_rate_limited() {
    let body = r#"{"__type":"TooManyRequestsException","message":"slow down"}"#;
    assert_eq!(managed_error(400, body), AuthError::RateLimited);
}

#[test]
fn managed_unknown_error_keeps_status_in_fallback() {
    assert_eq!(
        managed_error(500, "not json"),
        AuthError::ServerRejected("identity service request failed: 500".to_owned())
    );
}

#[test]
fn jwt_claims_decode_ignores_garbage_tokens() {
    assert!(claims_from_jwt("not-a-jwt").is_none());
    assert!(claims_from_jwt("a.%%%.c").is_none());
}
