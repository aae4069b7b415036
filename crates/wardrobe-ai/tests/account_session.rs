//! Integration coverage for registration, login, session storage, and the
//! password-reset flow, all through the public account facade.

use std::sync::Arc;

use serde_json::json;
use wardrobe_ai::account::{
    AccountError, AccountService, KeyValueStore, MemoryStore, UserRole,
};

fn service() -> (AccountService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (AccountService::new(store.clone()), store)
}

#[test]
fn register_login_logout_round_trip() {
    let (accounts, _store) = service();

    let created = accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");
    assert_eq!(created.role, UserRole::Admin, "first user becomes admin");

    let session = accounts
        .login("jordan", "Wardrobe1", false)
        .expect("login succeeds");
    assert_eq!(session.user().username, "jordan");

    session
        .save_data("favorite_color", &json!("navy"))
        .expect("session data saves");
    assert_eq!(
        session
            .load_data::<serde_json::Value>("favorite_color")
            .expect("session data loads"),
        Some(json!("navy"))
    );

    accounts.logout(session).expect("logout succeeds");
    assert!(
        accounts.resume().expect("resume runs").is_none(),
        "no session survives logout"
    );
}

#[test]
fn login_accepts_email_and_is_case_insensitive() {
    let (accounts, _store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");

    let by_email = accounts
        .login("JORDAN@Example.com", "Wardrobe1", false)
        .expect("email login succeeds");
    assert_eq!(by_email.user().username, "jordan");

    match accounts.login("jordan", "wrong-password", false) {
        Err(AccountError::InvalidCredentials) => {}
        other => panic!("expected invalid credentials, got {other:?}"),
    }
}

#[test]
fn duplicate_identities_are_rejected_case_insensitively() {
    let (accounts, _store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");

    match accounts.register("JORDAN", "other@example.com", "Wardrobe1") {
        Err(AccountError::UsernameTaken) => {}
        other => panic!("expected username conflict, got {other:?}"),
    }

    match accounts.register("sam", "Jordan@Example.COM", "Wardrobe1") {
        Err(AccountError::EmailTaken) => {}
        other => panic!("expected email conflict, got {other:?}"),
    }
}

#[test]
fn weak_credentials_never_reach_the_registry() {
    let (accounts, store) = service();

    assert!(matches!(
        accounts.register("jo", "jo@example.com", "Wardrobe1"),
        Err(AccountError::UsernameTooShort)
    ));
    assert!(matches!(
        accounts.register("jordan", "not-an-email", "Wardrobe1"),
        Err(AccountError::InvalidEmail)
    ));
    assert!(matches!(
        accounts.register("jordan", "jordan@example.com", "weak"),
        Err(AccountError::WeakPassword)
    ));

    assert_eq!(store.get("users").expect("store readable"), None);
}

#[test]
fn passwords_are_stored_hashed() {
    let (accounts, store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");

    let registry = store
        .get("users")
        .expect("store readable")
        .expect("registry present");
    let raw = registry.to_string();
    assert!(!raw.contains("Wardrobe1"), "plaintext must not be stored");
    assert!(raw.contains("argon2"), "hash uses the argon2 PHC format");
}

#[test]
fn remember_me_restores_the_session_within_the_window() {
    let (accounts, store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");
    let session = accounts
        .login("jordan", "Wardrobe1", true)
        .expect("login succeeds");

    // Simulate a fresh launch: the login flag is gone, the token remains.
    drop(session);
    store.remove("current_user").expect("clear login flag");

    let resumed = accounts
        .resume()
        .expect("resume runs")
        .expect("remember-me token restores the session");
    assert_eq!(resumed.user().username, "jordan");
}

#[test]
fn expired_remember_me_tokens_are_discarded() {
    let (accounts, store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");
    accounts
        .login("jordan", "Wardrobe1", true)
        .expect("login succeeds");
    store.remove("current_user").expect("clear login flag");

    let mut token = store
        .get("remembered_login")
        .expect("store readable")
        .expect("token present");
    token["issued_at"] = json!("2020-01-01T00:00:00Z");
    store.set("remembered_login", token).expect("token patched");

    assert!(accounts.resume().expect("resume runs").is_none());
    assert_eq!(
        store.get("remembered_login").expect("store readable"),
        None,
        "expired token is cleaned up"
    );
}

#[test]
fn password_reset_flow_rotates_the_credential() {
    let (accounts, _store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");

    match accounts.reset_password("jordan@example.com", "000000", "Wardrobe2") {
        Err(AccountError::NoResetRequested) => {}
        other => panic!("expected missing reset request, got {other:?}"),
    }

    let code = accounts
        .request_password_reset("jordan@example.com")
        .expect("reset code issued");
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|ch| ch.is_ascii_digit()));

    let wrong_code = if code == "000001" { "000002" } else { "000001" };
    match accounts.reset_password("jordan@example.com", wrong_code, "Wardrobe2") {
        Err(AccountError::ResetCodeMismatch) => {}
        other => panic!("expected code mismatch, got {other:?}"),
    }

    accounts
        .reset_password("jordan@example.com", &code, "Wardrobe2")
        .expect("reset succeeds");

    assert!(accounts.login("jordan", "Wardrobe1", false).is_err());
    accounts
        .login("jordan", "Wardrobe2", false)
        .expect("new password works");
}

#[test]
fn expired_reset_codes_are_single_use_garbage() {
    let (accounts, store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");
    let code = accounts
        .request_password_reset("jordan@example.com")
        .expect("reset code issued");

    let mut registry = store
        .get("users")
        .expect("store readable")
        .expect("registry present");
    registry[0]["reset_code"]["expires_at"] = json!("2020-01-01T00:00:00Z");
    store.set("users", registry).expect("registry patched");

    match accounts.reset_password("jordan@example.com", &code, "Wardrobe2") {
        Err(AccountError::ResetCodeExpired) => {}
        other => panic!("expected expired code, got {other:?}"),
    }

    // The stale code was cleared, so a retry reports no pending request.
    match accounts.reset_password("jordan@example.com", &code, "Wardrobe2") {
        Err(AccountError::NoResetRequested) => {}
        other => panic!("expected missing reset request, got {other:?}"),
    }
}

#[test]
fn per_user_data_is_namespaced() {
    let (accounts, _store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("first registration");
    accounts
        .register("sam", "sam@example.com", "Wardrobe1")
        .expect("second registration");

    let jordan = accounts
        .login("jordan", "Wardrobe1", false)
        .expect("jordan logs in");
    jordan
        .save_data("theme", &json!("dark"))
        .expect("jordan saves");

    let sam = accounts.login("sam", "Wardrobe1", false).expect("sam logs in");
    sam.save_data("theme", &json!("light")).expect("sam saves");

    assert_eq!(
        jordan
            .load_data::<serde_json::Value>("theme")
            .expect("jordan loads"),
        Some(json!("dark"))
    );
    assert_eq!(jordan.data_keys().expect("jordan keys"), vec!["theme"]);
}

#[test]
fn directory_listing_is_admin_only() {
    let (accounts, _store) = service();
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("first registration");
    accounts
        .register("sam", "sam@example.com", "Wardrobe1")
        .expect("second registration");

    let admin = accounts
        .login("jordan", "Wardrobe1", false)
        .expect("admin logs in");
    let listing = accounts.list_users(&admin).expect("admin may list");
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[1].role, UserRole::Member);

    let member = accounts.login("sam", "Wardrobe1", false).expect("member logs in");
    match accounts.list_users(&member) {
        Err(AccountError::Unauthorized) => {}
        other => panic!("expected unauthorized, got {other:?}"),
    }
}
