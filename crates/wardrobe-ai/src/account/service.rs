use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, Utc};
use rand::Rng;
use tracing::{debug, info};

use super::domain::{
    CurrentUser, RememberedLogin, ResetCode, UserId, UserRecord, UserRole, UserSummary,
};
use super::session::SessionContext;
use super::storage::{KeyValueStore, StorageError};

const REGISTRY_KEY: &str = "users";
const CURRENT_USER_KEY: &str = "current_user";
const REMEMBERED_LOGIN_KEY: &str = "remembered_login";

const MIN_USERNAME_CHARS: usize = 3;
const REMEMBER_WINDOW_DAYS: i64 = 7;
const RESET_CODE_TTL_MINUTES: i64 = 5;

/// Error raised by the account service.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("username, email, and password are all required")]
    MissingFields,
    #[error("username must be at least 3 characters")]
    UsernameTooShort,
    #[error("invalid email format")]
    InvalidEmail,
    #[error("password must be at least 8 characters with upper and lower case letters and a digit")]
    WeakPassword,
    #[error("username already exists")]
    UsernameTaken,
    #[error("email already exists")]
    EmailTaken,
    #[error("invalid email/username or password")]
    InvalidCredentials,
    #[error("no account found with this email address")]
    UnknownEmail,
    #[error("no password reset request found")]
    NoResetRequested,
    #[error("reset code has expired, request a new one")]
    ResetCodeExpired,
    #[error("invalid reset code")]
    ResetCodeMismatch,
    #[error("operation requires the admin role")]
    Unauthorized,
    #[error("credential hashing failed: {0}")]
    Hash(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Registry and session lifecycle over a key-value store.
pub struct AccountService<S> {
    store: Arc<S>,
}

impl<S> AccountService<S>
where
    S: KeyValueStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a new account. The first registered user becomes the admin.
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<CurrentUser, AccountError> {
        let username = username.trim();
        let email = email.trim().to_lowercase();
        let password = password.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }
        if username.chars().count() < MIN_USERNAME_CHARS {
            return Err(AccountError::UsernameTooShort);
        }
        if !valid_email(&email) {
            return Err(AccountError::InvalidEmail);
        }
        if !valid_password(password) {
            return Err(AccountError::WeakPassword);
        }

        let mut users = self.registry()?;

        let username_lower = username.to_lowercase();
        if users
            .iter()
            .any(|user| user.username.to_lowercase() == username_lower)
        {
            return Err(AccountError::UsernameTaken);
        }
        if users.iter().any(|user| user.email == email) {
            return Err(AccountError::EmailTaken);
        }

        let record = UserRecord {
            id: UserId(format!("user-{:06}", users.len() + 1)),
            username: username.to_string(),
            email,
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
            role: if users.is_empty() {
                UserRole::Admin
            } else {
                UserRole::Member
            },
            reset_code: None,
        };
        let sanitized = record.sanitized();

        users.push(record);
        self.save_registry(&users)?;

        info!(username = %sanitized.username, role = sanitized.role.label(), "registered user");
        Ok(sanitized)
    }

    /// Authenticate by username or email and open a session.
    pub fn login(
        &self,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> Result<SessionContext, AccountError> {
        let needle = identifier.trim().to_lowercase();
        let password = password.trim();
        let users = self.registry()?;

        let user = users
            .iter()
            .find(|user| user.username.to_lowercase() == needle || user.email == needle)
            .ok_or(AccountError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, password) {
            return Err(AccountError::InvalidCredentials);
        }

        let current = user.sanitized();
        self.store
            .set(CURRENT_USER_KEY, serde_json::to_value(&current).map_err(StorageError::from)?)?;

        if remember {
            let token = RememberedLogin {
                identifier: identifier.trim().to_string(),
                issued_at: Utc::now(),
            };
            self.store.set(
                REMEMBERED_LOGIN_KEY,
                serde_json::to_value(&token).map_err(StorageError::from)?,
            )?;
        } else {
            self.store.remove(REMEMBERED_LOGIN_KEY)?;
        }

        info!(username = %current.username, "user logged in");
        Ok(self.session_for(current))
    }

    /// Restore a session from the stored login state or a remember-me token.
    pub fn resume(&self) -> Result<Option<SessionContext>, AccountError> {
        let users = self.registry()?;

        if let Some(raw) = self.store.get(CURRENT_USER_KEY)? {
            let current: CurrentUser =
                serde_json::from_value(raw).map_err(StorageError::from)?;
            let still_registered = users.iter().any(|user| {
                user.id == current.id
                    && user.username == current.username
                    && user.email == current.email
            });
            if still_registered {
                return Ok(Some(self.session_for(current)));
            }
            // The stored login points at a user that no longer exists.
            self.store.remove(CURRENT_USER_KEY)?;
        }

        if let Some(raw) = self.store.get(REMEMBERED_LOGIN_KEY)? {
            let token: RememberedLogin =
                serde_json::from_value(raw).map_err(StorageError::from)?;
            if Utc::now() - token.issued_at < Duration::days(REMEMBER_WINDOW_DAYS) {
                let needle = token.identifier.trim().to_lowercase();
                if let Some(user) = users
                    .iter()
                    .find(|user| user.username.to_lowercase() == needle || user.email == needle)
                {
                    let current = user.sanitized();
                    self.store.set(
                        CURRENT_USER_KEY,
                        serde_json::to_value(&current).map_err(StorageError::from)?,
                    )?;
                    debug!(username = %current.username, "session restored from remember-me token");
                    return Ok(Some(self.session_for(current)));
                }
            } else {
                self.store.remove(REMEMBERED_LOGIN_KEY)?;
            }
        }

        Ok(None)
    }

    /// Close the session. Registered users and their stored data are kept.
    pub fn logout(&self, session: SessionContext) -> Result<(), AccountError> {
        info!(username = %session.user().username, "user logged out");
        self.store.remove(CURRENT_USER_KEY)?;
        self.store.remove(REMEMBERED_LOGIN_KEY)?;
        Ok(())
    }

    /// Issue a six-digit reset code valid for five minutes.
    ///
    /// The code is returned to the caller because there is no delivery
    /// transport in this system; a deployment would send it out-of-band.
    pub fn request_password_reset(&self, email: &str) -> Result<String, AccountError> {
        let email = email.trim().to_lowercase();
        let mut users = self.registry()?;

        let user = users
            .iter_mut()
            .find(|user| user.email == email)
            .ok_or(AccountError::UnknownEmail)?;

        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000u32));
        user.reset_code = Some(ResetCode {
            code: code.clone(),
            expires_at: Utc::now() + Duration::minutes(RESET_CODE_TTL_MINUTES),
        });

        info!(%email, "password reset code issued");
        self.save_registry(&users)?;
        Ok(code)
    }

    /// Replace the password after verifying a pending reset code.
    pub fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AccountError> {
        let email = email.trim().to_lowercase();
        let new_password = new_password.trim();
        let mut users = self.registry()?;

        let user = users
            .iter_mut()
            .find(|user| user.email == email)
            .ok_or(AccountError::UnknownEmail)?;

        let pending = user
            .reset_code
            .clone()
            .ok_or(AccountError::NoResetRequested)?;

        if Utc::now() > pending.expires_at {
            user.reset_code = None;
            self.save_registry(&users)?;
            return Err(AccountError::ResetCodeExpired);
        }
        if pending.code != code.trim() {
            return Err(AccountError::ResetCodeMismatch);
        }
        if !valid_password(new_password) {
            return Err(AccountError::WeakPassword);
        }

        user.password_hash = hash_password(new_password)?;
        user.reset_code = None;
        self.save_registry(&users)?;

        info!(%email, "password reset completed");
        Ok(())
    }

    /// Directory listing, available to administrators only.
    pub fn list_users(&self, session: &SessionContext) -> Result<Vec<UserSummary>, AccountError> {
        if session.user().role != UserRole::Admin {
            return Err(AccountError::Unauthorized);
        }

        Ok(self
            .registry()?
            .iter()
            .map(|user| UserSummary {
                id: user.id.clone(),
                username: user.username.clone(),
                email: user.email.clone(),
                role: user.role,
                created_at: user.created_at,
            })
            .collect())
    }

    fn session_for(&self, user: CurrentUser) -> SessionContext {
        let store: Arc<dyn KeyValueStore> = self.store.clone();
        SessionContext::new(user, store)
    }

    fn registry(&self) -> Result<Vec<UserRecord>, AccountError> {
        match self.store.get(REGISTRY_KEY)? {
            Some(raw) => Ok(serde_json::from_value(raw).map_err(StorageError::from)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_registry(&self, users: &[UserRecord]) -> Result<(), AccountError> {
        self.store
            .set(REGISTRY_KEY, serde_json::to_value(users).map_err(StorageError::from)?)?;
        Ok(())
    }
}

fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AccountError::Hash(err.to_string()))
}

fn verify_password(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

// Mirrors the shape check the signup form applies: one @, a dot somewhere in
// the domain, no whitespace anywhere.
fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain
            .split('.')
            .filter(|segment| !segment.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// At least 8 characters with an uppercase letter, a lowercase letter, and a digit.
fn valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|ch| ch.is_ascii_uppercase())
        && password.chars().any(|ch| ch.is_ascii_lowercase())
        && password.chars().any(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_requires_a_dotted_domain() {
        assert!(valid_email("sam@example.com"));
        assert!(valid_email("sam.jones@mail.example.co"));
        assert!(!valid_email("sam@example"));
        assert!(!valid_email("sam example@mail.com"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email("sam@"));
    }

    #[test]
    fn password_policy_requires_mixed_case_and_a_digit() {
        assert!(valid_password("Wardrobe1"));
        assert!(!valid_password("short1A"));
        assert!(!valid_password("alllowercase1"));
        assert!(!valid_password("ALLUPPERCASE1"));
        assert!(!valid_password("NoDigitsHere"));
    }

    #[test]
    fn hashes_verify_and_never_store_plaintext() {
        let hash = hash_password("Wardrobe1").expect("hash");

        assert!(!hash.contains("Wardrobe1"));
        assert!(verify_password(&hash, "Wardrobe1"));
        assert!(!verify_password(&hash, "Wardrobe2"));
        assert!(!verify_password("not-a-phc-string", "Wardrobe1"));
    }
}
