//! Accounts, sessions, and the local key-value store behind them.
//!
//! Identity flows through an explicitly injected [`SessionContext`]; there is
//! no ambient global user state. Credentials are argon2id-hashed before they
//! reach the store.

pub mod domain;
pub mod service;
pub mod session;
pub mod storage;

pub use domain::{CurrentUser, RememberedLogin, UserId, UserRecord, UserRole, UserSummary};
pub use service::{AccountError, AccountService};
pub use session::SessionContext;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
