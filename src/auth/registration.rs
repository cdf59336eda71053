//! User registration flow for HobbyHub.
//!
//! The flow has two outcomes: a created user, or the ordered list of
//! problems to show on the form. Storage errors never surface verbatim;
//! they are logged here and the user sees a generic retry message.

use tracing::{error, info};

use crate::auth::password::hash_password;
use crate::auth::validation::{sanitize_input, validate_registration, RegistrationIssue};
use crate::db::{NewUser, User, UserRepository};
use crate::HubError;

/// Submitted registration form data.
///
/// Name and email are sanitized on construction; passwords are kept as
/// submitted.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

impl RegistrationRequest {
    /// Create a request from raw form fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: sanitize_input(&name.into()),
            email: sanitize_input(&email.into()),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

/// Result of a registration attempt.
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// The user was created.
    Registered(User),
    /// The submission was rejected; the issues are shown in order.
    Rejected(Vec<RegistrationIssue>),
}

/// Whether a storage error is the email uniqueness constraint firing.
fn is_unique_violation(err: &HubError) -> bool {
    matches!(err, HubError::Database(msg) if msg.contains("UNIQUE"))
}

/// Register a new user.
///
/// This function:
/// 1. Runs all local field validations, collecting every failure
/// 2. Only if those pass, checks storage for a duplicate email
/// 3. Hashes the password
/// 4. Inserts the user, mapping a uniqueness violation (a concurrent
///    registration won the race) back to the duplicate-email issue
pub async fn register(
    repo: &UserRepository<'_>,
    request: RegistrationRequest,
) -> RegistrationOutcome {
    let mut issues = validate_registration(
        &request.name,
        &request.email,
        &request.password,
        &request.confirm_password,
    );

    // The storage round trip is skipped for locally-invalid submissions.
    if issues.is_empty() {
        match repo.email_exists(&request.email).await {
            Ok(true) => issues.push(RegistrationIssue::EmailTaken),
            Ok(false) => {}
            Err(e) => {
                error!(error = %e, "registration duplicate check failed");
                issues.push(RegistrationIssue::ServiceUnavailable);
            }
        }
    }

    if issues.is_empty() {
        match hash_password(&request.password) {
            Ok(password_hash) => {
                let new_user = NewUser::new(&request.name, &request.email, password_hash);
                match repo.create(&new_user).await {
                    Ok(user) => {
                        info!(user_id = user.id, "new user registered");
                        return RegistrationOutcome::Registered(user);
                    }
                    Err(e) if is_unique_violation(&e) => {
                        // Lost the check-then-insert race to a concurrent
                        // registration; same outcome as the pre-check.
                        issues.push(RegistrationIssue::EmailTaken);
                    }
                    Err(e) => {
                        error!(error = %e, "user insert failed");
                        issues.push(RegistrationIssue::ServiceUnavailable);
                    }
                }
            }
            Err(e) => {
                error!(error = %e, "password hashing failed");
                issues.push(RegistrationIssue::ServiceUnavailable);
            }
        }
    }

    RegistrationOutcome::Rejected(issues)
}
