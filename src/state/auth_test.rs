use super::*;
use crate::util::session_store;

fn session(token: &str) -> Session {
    Session {
        token: token.to_owned(),
        user: User {
            id: "u-1".to_owned(),
            email: "a@x.com".to_owned(),
        },
    }
}

/// Store and flag must agree after every settled action.
fn assert_consistent(controller: SessionController) {
    assert_eq!(
        session_store::get().is_some(),
        controller.is_authenticated(),
        "session store and authenticated flag diverged"
    );
}

#[test]
fn restore_without_stored_token_is_unauthenticated() {
    session_store::clear();
    let controller = SessionController::restore();
    assert!(!controller.is_authenticated());
    assert!(controller.user().is_none());
    assert_consistent(controller);
}

#[test]
fn restore_with_stored_token_is_authenticated() {
    session_store::set("tok-prior");
    let controller = SessionController::restore();
    assert!(controller.is_authenticated());
    // Identity is not persisted; only the token survives a reload.
    assert!(controller.user().is_none());
    assert_consistent(controller);
    session_store::clear();
}

#[test]
fn establish_pairs_store_write_with_flag() {
    session_store::clear();
    let controller = SessionController::restore();
    controller.establish(session("tok-1"));
    assert!(controller.is_authenticated());
    assert_eq!(session_store::get(), Some("tok-1".to_owned()));
    assert_eq!(controller.user().map(|u| u.email), Some("a@x.com".to_owned()));
    assert_consistent(controller);
    session_store::clear();
}

#[test]
fn logout_pairs_store_clear_with_flag() {
    session_store::clear();
    let controller = SessionController::restore();
    controller.establish(session("tok-1"));
    controller.logout();
    assert!(!controller.is_authenticated());
    assert_eq!(session_store::get(), None);
    assert!(controller.user().is_none());
    assert_consistent(controller);
}

#[test]
fn logout_twice_stays_consistent() {
    session_store::clear();
    let controller = SessionController::restore();
    controller.logout();
    assert_consistent(controller);
    controller.logout();
    assert!(!controller.is_authenticated());
    assert_eq!(session_store::get(), None);
    assert_consistent(controller);
}

#[test]
fn invariant_holds_across_action_sequences() {
    session_store::clear();
    let controller = SessionController::restore();
    for _ in 0..3 {
        controller.establish(session("tok-loop"));
        assert_consistent(controller);
        controller.logout();
        assert_consistent(controller);
    }
}

#[test]
fn session_expired_error_forces_logout() {
    session_store::clear();
    let controller = SessionController::restore();
    controller.establish(session("tok-1"));
    controller.absorb_error(&AuthError::SessionExpired);
    assert!(!controller.is_authenticated());
    assert_eq!(session_store::get(), None);
    assert_consistent(controller);
}

#[test]
fn non_session_errors_leave_session_alone() {
    session_store::clear();
    let controller = SessionController::restore();
    controller.establish(session("tok-1"));
    controller.absorb_error(&AuthError::ServerRejected("boom".to_owned()));
    controller.absorb_error(&AuthError::RateLimited);
    assert!(controller.is_authenticated());
    assert_eq!(session_store::get(), Some("tok-1".to_owned()));
    assert_consistent(controller);
    session_store::clear();
}
