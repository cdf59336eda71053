//! Input validation for HobbyHub registration.
//!
//! Validation collects every failure instead of stopping at the first one,
//! so the form can show the complete list in a single round trip. The
//! `#[error]` strings are the user-facing messages and are rendered
//! verbatim.

use thiserror::Error;
use validator::ValidateEmail;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// A single registration problem, in the order checks run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationIssue {
    /// Name is missing.
    #[error("Name is required")]
    NameRequired,

    /// Email is missing.
    #[error("Email is required")]
    EmailRequired,

    /// Email does not parse as an address.
    #[error("Invalid email format")]
    EmailInvalid,

    /// Password is missing.
    #[error("Password is required")]
    PasswordRequired,

    /// Password is too short.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    PasswordTooShort,

    /// Password is too long.
    #[error("Password must be at most {MAX_PASSWORD_LENGTH} characters long")]
    PasswordTooLong,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Email is already registered.
    #[error("Email already registered")]
    EmailTaken,

    /// Storage was unreachable; the user can only retry.
    #[error("An error occurred. Please try again later.")]
    ServiceUnavailable,
}

/// Sanitize a submitted text field: trim surrounding whitespace and drop
/// control characters.
///
/// Applied to name and email before validation and echoing. Passwords are
/// never sanitized; they are used byte-for-byte.
pub fn sanitize_input(value: &str) -> String {
    value.trim().chars().filter(|c| !c.is_control()).collect()
}

/// Check an email address against the address grammar.
fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Validate the local registration fields, collecting every failure.
///
/// The returned list preserves check order: name, email, password,
/// confirmation. The duplicate-email check is a storage concern and lives
/// in the registration flow, which only runs it when this list is empty.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Vec<RegistrationIssue> {
    let mut issues = Vec::new();

    if name.is_empty() {
        issues.push(RegistrationIssue::NameRequired);
    }

    if email.is_empty() {
        issues.push(RegistrationIssue::EmailRequired);
    } else if !is_valid_email(email) {
        issues.push(RegistrationIssue::EmailInvalid);
    }

    if password.is_empty() {
        issues.push(RegistrationIssue::PasswordRequired);
    } else if password.len() < MIN_PASSWORD_LENGTH {
        issues.push(RegistrationIssue::PasswordTooShort);
    } else if password.len() > MAX_PASSWORD_LENGTH {
        issues.push(RegistrationIssue::PasswordTooLong);
    }

    if password != confirm_password {
        issues.push(RegistrationIssue::PasswordMismatch);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_valid() {
        let issues = validate_registration("Ada", "ada@example.com", "longenough1", "longenough1");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_empty_name() {
        let issues = validate_registration("", "ada@example.com", "longenough1", "longenough1");
        assert_eq!(issues, vec![RegistrationIssue::NameRequired]);
    }

    #[test]
    fn test_empty_email() {
        let issues = validate_registration("Ada", "", "longenough1", "longenough1");
        assert_eq!(issues, vec![RegistrationIssue::EmailRequired]);
    }

    #[test]
    fn test_invalid_email() {
        for email in ["not-an-email", "user@", "@example.com", "a b@example.com"] {
            let issues = validate_registration("Ada", email, "longenough1", "longenough1");
            assert_eq!(issues, vec![RegistrationIssue::EmailInvalid], "{email}");
        }
    }

    #[test]
    fn test_empty_password() {
        let issues = validate_registration("Ada", "ada@example.com", "", "");
        assert_eq!(issues, vec![RegistrationIssue::PasswordRequired]);
    }

    #[test]
    fn test_short_password() {
        let issues = validate_registration("Ada", "ada@example.com", "short12", "short12");
        assert_eq!(issues, vec![RegistrationIssue::PasswordTooShort]);
    }

    #[test]
    fn test_minimum_length_password() {
        let issues = validate_registration("Ada", "ada@example.com", "12345678", "12345678");
        assert!(issues.is_empty());
    }

    #[test]
    fn test_overlong_password() {
        let password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let issues = validate_registration("Ada", "ada@example.com", &password, &password);
        assert_eq!(issues, vec![RegistrationIssue::PasswordTooLong]);
    }

    #[test]
    fn test_password_mismatch() {
        let issues =
            validate_registration("Ada", "ada@example.com", "longenough1", "longenough2");
        assert_eq!(issues, vec![RegistrationIssue::PasswordMismatch]);
    }

    #[test]
    fn test_mismatch_reported_alongside_other_errors() {
        let issues = validate_registration("", "bad-email", "short", "different");
        assert_eq!(
            issues,
            vec![
                RegistrationIssue::NameRequired,
                RegistrationIssue::EmailInvalid,
                RegistrationIssue::PasswordTooShort,
                RegistrationIssue::PasswordMismatch,
            ]
        );
    }

    #[test]
    fn test_everything_empty_collects_in_order() {
        let issues = validate_registration("", "", "", "");
        // Empty password equals empty confirmation, so no mismatch.
        assert_eq!(
            issues,
            vec![
                RegistrationIssue::NameRequired,
                RegistrationIssue::EmailRequired,
                RegistrationIssue::PasswordRequired,
            ]
        );
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(RegistrationIssue::NameRequired.to_string(), "Name is required");
        assert_eq!(
            RegistrationIssue::EmailInvalid.to_string(),
            "Invalid email format"
        );
        assert_eq!(
            RegistrationIssue::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            RegistrationIssue::EmailTaken.to_string(),
            "Email already registered"
        );
        assert_eq!(
            RegistrationIssue::ServiceUnavailable.to_string(),
            "An error occurred. Please try again later."
        );
    }

    #[test]
    fn test_sanitize_input_trims_and_strips_controls() {
        assert_eq!(sanitize_input("  Ada  "), "Ada");
        assert_eq!(sanitize_input("Ada\x00 Lovelace"), "Ada Lovelace");
        assert_eq!(sanitize_input("Ada\nLovelace"), "AdaLovelace");
        assert_eq!(sanitize_input("\t \t"), "");
    }
}
