use super::*;

#[test]
fn protect_allows_only_authenticated() {
    assert!(protect_allows(true));
    assert!(!protect_allows(false));
}

#[test]
fn public_only_allows_only_unauthenticated() {
    assert!(public_only_allows(false));
    assert!(!public_only_allows(true));
}

#[test]
fn guards_are_logical_complements() {
    for authenticated in [false, true] {
        assert_ne!(
            protect_allows(authenticated),
            public_only_allows(authenticated),
            "exactly one guard must allow for authenticated={authenticated}"
        );
    }
}
