//! User repository for HobbyHub.
//!
//! This module provides the parameterized queries the registration and
//! login flows need.

use super::user::{NewUser, User};
use super::DbPool;
use crate::{HubError, Result};

const USER_COLUMNS: &str = "id, name, email, password, created_at, last_login";

/// Repository for user persistence operations.
pub struct UserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns the created user with the assigned ID. A duplicate email
    /// surfaces as a `Database` error carrying the UNIQUE constraint text.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .fetch_one(self.pool)
        .await
        .map_err(|e| HubError::Database(e.to_string()))?;

        self.get_by_id(id)
            .await?
            .ok_or_else(|| HubError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| HubError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a user by email (case-insensitive).
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1 COLLATE NOCASE"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| HubError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check whether a user with the given email already exists
    /// (case-insensitive).
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1 COLLATE NOCASE")
                .bind(email)
                .fetch_one(self.pool)
                .await
                .map_err(|e| HubError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    /// Update the last login timestamp for a user.
    pub async fn update_last_login(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = datetime('now') WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| HubError::Database(e.to_string()))?;
        Ok(())
    }
}
