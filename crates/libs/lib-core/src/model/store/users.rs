//! User records and the store that owns them.
//!
//! Emails are the unique key, compared case-insensitively. Records are
//! inserted by registration (or demo seeding) and never updated or deleted.

use lib_auth::hash_password;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Id of the pre-seeded demo account.
pub const DEMO_USER_ID: &str = "demo-user";

const DEMO_USER_NAME: &str = "Taylor Nguyen";
const DEMO_USER_EMAIL: &str = "demo@canadianinsights.ca";
const DEMO_USER_PASSWORD: &str = "northstar-demo";

/// A stored user record.
///
/// `password_hash` never leaves the store boundary in responses; project
/// through [`PublicUser`](crate::dto::PublicUser) instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Input for [`UserStore::insert`]. The store assigns the id.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a user already exists with this email")]
    AlreadyExists,
}

#[derive(Default)]
struct StoreInner {
    /// User records keyed by id.
    users: HashMap<String, User>,
    /// Normalized (lowercased) email to user id.
    email_index: HashMap<String, String>,
}

/// In-memory credential store.
///
/// One `RwLock` guards both maps, so the check-then-insert in [`insert`]
/// is atomic: two concurrent registrations of the same normalized email
/// can never both succeed.
///
/// [`insert`]: UserStore::insert
pub struct UserStore {
    inner: RwLock<StoreInner>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// Create a store pre-seeded with the demo account.
    pub async fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().await;
            let demo = User {
                id: DEMO_USER_ID.to_string(),
                name: DEMO_USER_NAME.to_string(),
                email: DEMO_USER_EMAIL.to_string(),
                password_hash: hash_password(DEMO_USER_PASSWORD),
            };
            inner
                .email_index
                .insert(normalize_email(&demo.email), demo.id.clone());
            inner.users.insert(demo.id.clone(), demo);
        }
        store
    }

    /// Find a user by email, compared case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.read().await;
        let id = inner.email_index.get(&normalize_email(email))?;
        inner.users.get(id).cloned()
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        self.inner.read().await.users.get(id).cloned()
    }

    /// Insert a new user, assigning a fresh random id.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if the normalized email is
    /// already taken. The duplicate check and the insert happen under a
    /// single write lock.
    pub async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        let normalized = normalize_email(&new_user.email);
        if inner.email_index.contains_key(&normalized) {
            return Err(StoreError::AlreadyExists);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: normalized.clone(),
            password_hash: new_user.password_hash,
        };

        inner.email_index.insert(normalized, user.id.clone());
        inner.users.insert(user.id.clone(), user.clone());

        Ok(user)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Alice".to_string(),
            email: email.to_string(),
            password_hash: hash_password("secret123"),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = UserStore::new();
        let user = store
            .insert(new_user("alice@example.com"))
            .await
            .expect("insert should succeed");

        let by_email = store
            .find_by_email("alice@example.com")
            .await
            .expect("user should be found by email");
        assert_eq!(by_email.id, user.id);

        let by_id = store
            .find_by_id(&user.id)
            .await
            .expect("user should be found by id");
        assert_eq!(by_id.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let store = UserStore::new();
        store
            .insert(new_user("Alice@Example.com"))
            .await
            .expect("insert should succeed");

        assert!(store.find_by_email("ALICE@EXAMPLE.COM").await.is_some());
        assert!(store.find_by_email("alice@example.com").await.is_some());
        assert!(store.find_by_email("bob@example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_across_case() {
        let store = UserStore::new();
        store
            .insert(new_user("A@x.com"))
            .await
            .expect("first insert should succeed");

        let err = store
            .insert(new_user("a@x.com"))
            .await
            .expect_err("second insert should conflict");
        assert_eq!(err, StoreError::AlreadyExists);
    }

    #[tokio::test]
    async fn test_seeded_store_has_demo_user() {
        let store = UserStore::seeded().await;

        let demo = store
            .find_by_id(DEMO_USER_ID)
            .await
            .expect("demo user should be seeded");
        assert_eq!(demo.email, DEMO_USER_EMAIL);
        assert_eq!(demo.password_hash, hash_password(DEMO_USER_PASSWORD));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_registration_admits_exactly_one() {
        let store = Arc::new(UserStore::new());

        let mut handles = Vec::new();
        for _ in 0..100 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert(new_user("race@example.com")).await
            }));
        }

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.expect("task should not panic") {
                Ok(_) => created += 1,
                Err(StoreError::AlreadyExists) => conflicts += 1,
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 99);
    }
}
