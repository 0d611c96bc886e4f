use super::*;

// Tests run on their own threads, so the thread-local fallback slot keeps
// them isolated from each other.

#[test]
fn absent_token_reads_as_none() {
    clear();
    assert_eq!(get(), None);
}

#[test]
fn set_is_immediately_visible_to_get() {
    set("tok-abc");
    assert_eq!(get(), Some("tok-abc".to_owned()));
    clear();
}

#[test]
fn set_replaces_previous_token() {
    set("first");
    set("second");
    assert_eq!(get(), Some("second".to_owned()));
    clear();
}

#[test]
fn clear_is_idempotent() {
    set("tok-abc");
    clear();
    assert_eq!(get(), None);
    clear();
    assert_eq!(get(), None);
}
