use super::*;

#[test]
fn server_error_message_reads_error_field() {
    let body = r#"{"error":"Invalid email or password"}"#;
    assert_eq!(
        server_error_message(body),
        Some("Invalid email or password".to_owned())
    );
}

#[test]
fn server_error_message_ignores_malformed_bodies() {
    assert_eq!(server_error_message("not json"), None);
    assert_eq!(server_error_message(r#"{"error":42}"#), None);
}

#[test]
fn unauthorized_response_classifies_as_session_expired() {
    let err = classify_response(401, r#"{"error":"token invalid"}"#, "Request failed");
    assert_eq!(err, AuthError::SessionExpired);
    assert!(err.invalidates_session());
}

#[test]
fn rate_limit_text_classifies_as_rate_limited() {
    let body = r#"{"error":"OpenAI API rate limit exceeded"}"#;
    assert_eq!(classify_response(429, body, "Request failed"), AuthError::RateLimited);
}

#[test]
fn rate_limit_match_is_case_insensitive() {
    assert!(is_rate_limit_text("Rate Limit exceeded"));
    assert!(!is_rate_limit_text("quota exhausted"));
}

#[test]
fn other_failures_surface_server_text() {
    let err = classify_response(500, r#"{"error":"database down"}"#, "Request failed");
    assert_eq!(err, AuthError::ServerRejected("database down".to_owned()));
}

#[test]
fn missing_server_text_uses_fallback() {
    let err = classify_response(502, "", "Failed to fetch workout history");
    assert_eq!(
        err,
        AuthError::ServerRejected("Failed to fetch workout history".to_owned())
    );
    assert!(!err.invalidates_session());
}
