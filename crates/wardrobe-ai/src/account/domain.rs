use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Member,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

/// Registry record. Credentials are stored as an argon2id hash only; the
/// plaintext never touches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_code: Option<ResetCode>,
}

impl UserRecord {
    pub fn sanitized(&self) -> CurrentUser {
        CurrentUser {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Single-use password reset code with a short expiry window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// Sanitized identity carried by a session; no credential material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// Remember-me token persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RememberedLogin {
    pub identifier: String,
    pub issued_at: DateTime<Utc>,
}

/// Directory entry exposed to administrators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}
