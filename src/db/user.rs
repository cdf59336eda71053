//! User model for HobbyHub.

use sqlx::FromRow;

/// User entity representing a registered member.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address (unique, case-insensitive).
    pub email: String,
    /// Password hash (Argon2).
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
    /// Last login timestamp (None before the first login).
    pub last_login: Option<String>,
}

/// Data for creating a new user.
///
/// The password field must already be hashed; plaintext never reaches the
/// storage layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password hash.
    pub password: String,
}

impl NewUser {
    /// Create a new user record from its required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
