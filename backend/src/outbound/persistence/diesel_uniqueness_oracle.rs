//! PostgreSQL-backed [`UniquenessOracle`].
//!
//! Each lookup checks out a pooled connection, runs a single read-only
//! `SELECT EXISTS(...)` and drops the connection before returning.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UniquenessOracle, UserLookupError};
use crate::domain::{EmailAddress, Username};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::users;

/// Answers "is this username/email taken?" from the `users` table.
#[derive(Clone)]
pub struct DieselUniquenessOracle {
    pool: DbPool,
}

impl DieselUniquenessOracle {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UniquenessOracle for DieselUniquenessOracle {
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserLookupError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(exists(
            users::table.filter(users::username.eq(username.as_ref())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserLookupError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(exists(users::table.filter(users::email.eq(email.as_ref()))))
            .get_result::<bool>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
