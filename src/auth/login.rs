//! Login flow for HobbyHub.

use thiserror::Error;
use tracing::{error, info, warn};

use crate::auth::password::verify_password;
use crate::auth::validation::sanitize_input;
use crate::db::{User, UserRepository};

/// Login failures, with user-facing `#[error]` messages.
///
/// Unknown email and wrong password produce the same message, so the form
/// does not reveal which addresses are registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Credentials did not match a user.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Storage was unreachable; the user can only retry.
    #[error("An error occurred. Please try again later.")]
    ServiceUnavailable,
}

/// Authenticate a user by email and password.
///
/// On success the user's last-login timestamp is updated; a failure to do
/// so is logged but does not fail the login.
pub async fn authenticate(
    repo: &UserRepository<'_>,
    email: &str,
    password: &str,
) -> Result<User, LoginError> {
    let email = sanitize_input(email);
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::InvalidCredentials);
    }

    let user = match repo.get_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(LoginError::InvalidCredentials),
        Err(e) => {
            error!(error = %e, "login lookup failed");
            return Err(LoginError::ServiceUnavailable);
        }
    };

    verify_password(password, &user.password).map_err(|_| LoginError::InvalidCredentials)?;

    if let Err(e) = repo.update_last_login(user.id).await {
        warn!(error = %e, user_id = user.id, "failed to record last login");
    }

    info!(user_id = user.id, "user logged in");
    Ok(user)
}
