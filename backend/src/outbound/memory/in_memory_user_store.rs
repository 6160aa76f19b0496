//! `UserStore` kept in a vector behind a mutex.
//!
//! Records are lost on restart. The username check and the push happen under
//! one lock, so concurrent inserts of the same username cannot both succeed.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{PasswordDigest, UserProfile, UserRecord, Username};

/// Volatile user store in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, Vec<UserRecord>>, UserStoreError> {
        self.records
            .lock()
            .map_err(|_| UserStoreError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        Ok(self
            .records()?
            .iter()
            .any(|record| record.profile().username() == username))
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), UserStoreError> {
        let mut records = self.records()?;
        let username = record.profile().username();
        if records
            .iter()
            .any(|existing| existing.profile().username() == username)
        {
            return Err(UserStoreError::duplicate_username(username.as_ref()));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<UserProfile>, UserStoreError> {
        Ok(self
            .records()?
            .iter()
            .find(|record| {
                record.profile().username().as_ref() == username
                    && record.password_digest() == digest
            })
            .map(|record| record.profile().clone()))
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<UserProfile>, UserStoreError> {
        Ok(self
            .records()?
            .iter()
            .skip(offset)
            .take(limit)
            .map(|record| record.profile().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn record(name: &str, lastname: &str, username: &str, digest: &str) -> UserRecord {
        UserRecord::new(
            UserProfile::new(name, lastname, Username::new(username).expect("valid username")),
            PasswordDigest::new(digest),
        )
    }

    #[fixture]
    fn store() -> InMemoryUserStore {
        InMemoryUserStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_taken_username(store: InMemoryUserStore) {
        store
            .insert(&record("John", "Doe", "johndoe", "a"))
            .await
            .expect("first insert");

        let error = store
            .insert(&record("Jo", "Hndoe", "johndoe", "b"))
            .await
            .expect_err("duplicate");

        assert_eq!(error, UserStoreError::duplicate_username("johndoe"));
        assert!(
            store
                .username_exists(&Username::new("johndoe").expect("valid username"))
                .await
                .expect("probe")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn credentials_must_match_username_and_digest(store: InMemoryUserStore) {
        store
            .insert(&record("John", "Doe", "johndoe", "digest"))
            .await
            .expect("insert");

        let hit = store
            .find_by_credentials("johndoe", &PasswordDigest::new("digest"))
            .await
            .expect("lookup");
        let miss = store
            .find_by_credentials("johndoe", &PasswordDigest::new("other"))
            .await
            .expect("lookup");

        assert_eq!(hit.map(|p| p.username().to_string()), Some("johndoe".to_owned()));
        assert!(miss.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn list_windows_in_insertion_order(store: InMemoryUserStore) {
        for n in 0..5 {
            store
                .insert(&record("User", &n.to_string(), &format!("user{n}"), "d"))
                .await
                .expect("insert");
        }

        let page = store.list(2, 2).await.expect("list");

        let names: Vec<_> = page.iter().map(|p| p.username().to_string()).collect();
        assert_eq!(names, ["user2", "user3"]);
    }
}
