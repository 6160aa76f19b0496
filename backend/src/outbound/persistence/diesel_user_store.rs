//! PostgreSQL-backed `UserStore` implementation using Diesel ORM.
//!
//! The unique index on `users.username` turns a lost allocation race into
//! `UserStoreError::DuplicateUsername`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{PasswordDigest, UserProfile, UserRecord, Username};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserProfileRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserStore`] port.
#[derive(Clone)]
pub struct DieselUserStore {
    pool: DbPool,
}

impl DieselUserStore {
    /// Create a store over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_profile(row: UserProfileRow) -> Result<UserProfile, UserStoreError> {
    let username = Username::new(row.username)
        .map_err(|err| UserStoreError::query(format!("stored username invalid: {err}")))?;
    Ok(UserProfile::new(row.name, row.lastname, username))
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl UserStore for DieselUserStore {
    async fn username_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            users::table.filter(users::username.eq(username.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, None))
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), UserStoreError> {
        let profile = record.profile();
        let row = NewUserRow {
            name: profile.name(),
            lastname: profile.lastname(),
            username: profile.username().as_ref(),
            password_digest: record.password_digest().as_ref(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(drop)
            .map_err(|err| map_diesel_error(err, Some(profile.username().as_ref())))
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        digest: &PasswordDigest,
    ) -> Result<Option<UserProfile>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::username.eq(username))
            .filter(users::password_digest.eq(digest.as_ref()))
            .select(UserProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        row.map(row_to_profile).transpose()
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<UserProfile>, UserStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserProfileRow> = users::table
            .order(users::id.asc())
            .offset(to_i64(offset))
            .limit(to_i64(limit))
            .select(UserProfileRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        rows.into_iter().map(row_to_profile).collect()
    }
}
