use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::domain::CurrentUser;
use super::storage::{KeyValueStore, StorageError};

/// Identity plus per-user storage access, created by a successful login and
/// torn down at logout. Components needing identity take this explicitly;
/// there is no ambient global session.
#[derive(Clone)]
pub struct SessionContext {
    user: CurrentUser,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    pub(crate) fn new(user: CurrentUser, store: Arc<dyn KeyValueStore>) -> Self {
        Self { user, store }
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    fn scoped_key(&self, key: &str) -> String {
        format!("user_{}_{}", self.user.id.0, key)
    }

    fn scope_prefix(&self) -> String {
        format!("user_{}_", self.user.id.0)
    }

    /// Persist a value under this user's namespace.
    pub fn save_data<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.store
            .set(&self.scoped_key(key), serde_json::to_value(value)?)
    }

    /// Load a value from this user's namespace, `None` when absent.
    pub fn load_data<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get(&self.scoped_key(key))? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub fn clear_data(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(&self.scoped_key(key))
    }

    /// Keys stored for this user, with the namespace prefix stripped.
    pub fn data_keys(&self) -> Result<Vec<String>, StorageError> {
        let prefix = self.scope_prefix();
        Ok(self
            .store
            .keys()?
            .into_iter()
            .filter_map(|key| key.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }

    /// Drop every stored value belonging to this user.
    pub fn clear_all_data(&self) -> Result<(), StorageError> {
        for key in self.data_keys()? {
            self.clear_data(&key)?;
        }
        Ok(())
    }
}
