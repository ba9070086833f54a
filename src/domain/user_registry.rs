//! Username registry with uniqueness enforcement.
//!
//! [`UserRegistry`] tracks the set of known usernames. Names are
//! case-sensitive and stored trimmed. There is no deletion: once
//! registered, a name stays taken for the lifetime of the process.

use std::collections::BTreeSet;

use tokio::sync::RwLock;

use crate::error::ServiceError;

/// Set of registered usernames.
///
/// Backed by a `BTreeSet` so [`UserRegistry::list_all`] comes out in
/// lexicographic order for free.
#[derive(Debug)]
pub struct UserRegistry {
    users: RwLock<BTreeSet<String>>,
}

impl UserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeSet::new()),
        }
    }

    /// Registers a new username, returning the stored (trimmed) name.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] when the name is empty
    /// after trimming, and [`ServiceError::DuplicateUser`] when the exact
    /// (case-sensitive) name is already registered. A failed call leaves
    /// the registry unchanged.
    pub async fn register(&self, name: &str) -> Result<String, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "username must not be empty".to_string(),
            ));
        }

        let mut users = self.users.write().await;
        if users.contains(name) {
            return Err(ServiceError::DuplicateUser(name.to_string()));
        }
        users.insert(name.to_string());
        Ok(name.to_string())
    }

    /// Returns `true` if `name` is registered (exact match).
    pub async fn exists(&self, name: &str) -> bool {
        self.users.read().await.contains(name)
    }

    /// Returns all registered names in lexicographic order.
    pub async fn list_all(&self) -> Vec<String> {
        self.users.read().await.iter().cloned().collect()
    }

    /// Returns the number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns `true` if no users are registered.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_trims_and_stores() {
        let registry = UserRegistry::new();
        let Ok(stored) = registry.register("  alice  ").await else {
            panic!("valid name");
        };
        assert_eq!(stored, "alice");
        assert!(registry.exists("alice").await);
        assert!(!registry.exists("  alice  ").await);
    }

    #[tokio::test]
    async fn register_rejects_blank_names() {
        let registry = UserRegistry::new();
        assert!(registry.register("").await.is_err());
        assert!(registry.register("   ").await.is_err());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn duplicate_registration_fails_and_keeps_membership() {
        let registry = UserRegistry::new();
        assert!(registry.register("alice").await.is_ok());

        let second = registry.register("alice").await;
        assert!(matches!(second, Err(ServiceError::DuplicateUser(_))));
        assert_eq!(registry.len().await, 1);
        assert!(registry.exists("alice").await);
    }

    #[tokio::test]
    async fn names_are_case_sensitive() {
        let registry = UserRegistry::new();
        assert!(registry.register("alice").await.is_ok());
        assert!(registry.register("Alice").await.is_ok());
        assert!(!registry.exists("ALICE").await);
    }

    #[tokio::test]
    async fn list_all_is_lexicographic() {
        let registry = UserRegistry::new();
        for name in ["mallory", "alice", "bob"] {
            assert!(registry.register(name).await.is_ok());
        }
        assert_eq!(registry.list_all().await, ["alice", "bob", "mallory"]);
    }
}
