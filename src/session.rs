//! Session state for HobbyHub.
//!
//! The session is a cookie-keyed server-side record managed by
//! `tower-sessions`. It carries the authenticated user's id and display
//! name, plus an optional one-shot flash message that is removed the first
//! time it is read.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::db::User;
use crate::{HubError, Result};

/// Session key for the authenticated user's id.
pub const USER_ID_KEY: &str = "user_id";

/// Session key for the authenticated user's display name.
pub const USER_NAME_KEY: &str = "user_name";

/// Session key for the pending flash message.
pub const FLASH_KEY: &str = "flash";

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    /// Neutral notice.
    Info,
    /// A completed action.
    Success,
    /// A failed action.
    Error,
}

impl FlashLevel {
    /// CSS-class-friendly name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Info => "info",
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// One-shot notification stored in the session and shown once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Message text.
    pub message: String,
    /// Severity level.
    pub level: FlashLevel,
}

impl Flash {
    /// Create an info flash.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Info,
        }
    }

    /// Create a success flash.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Success,
        }
    }

    /// Create an error flash.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Error,
        }
    }
}

/// The signed-in user as recorded in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// User id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Read the signed-in user from the session, if any.
pub async fn current_user(session: &Session) -> Option<CurrentUser> {
    let id = session.get::<i64>(USER_ID_KEY).await.ok().flatten()?;
    let name = session
        .get::<String>(USER_NAME_KEY)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    Some(CurrentUser { id, name })
}

/// Whether the session carries a user id.
pub async fn is_authenticated(session: &Session) -> bool {
    current_user(session).await.is_some()
}

/// Bind the session to a user after registration or login.
pub async fn sign_in(session: &Session, user: &User) -> Result<()> {
    session
        .insert(USER_ID_KEY, user.id)
        .await
        .map_err(|e| HubError::Session(e.to_string()))?;
    session
        .insert(USER_NAME_KEY, user.name.clone())
        .await
        .map_err(|e| HubError::Session(e.to_string()))?;
    Ok(())
}

/// Discard the session record entirely.
pub async fn sign_out(session: &Session) -> Result<()> {
    session
        .flush()
        .await
        .map_err(|e| HubError::Session(e.to_string()))
}

/// Store a flash message to be shown on the next rendered page.
pub async fn set_flash(session: &Session, flash: Flash) -> Result<()> {
    session
        .insert(FLASH_KEY, flash)
        .await
        .map_err(|e| HubError::Session(e.to_string()))
}

/// Take the pending flash message, removing it from the session.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    session.remove::<Flash>(FLASH_KEY).await.ok().flatten()
}
