//! Signup validation and registration.

use thiserror::Error;

use crate::user::{UserDirectory, UserRecord};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Why a signup attempt was rejected. Display strings double as the
/// inline form messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Passwords don't match!")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters!")]
    PasswordTooShort,
    #[error("Email already registered!")]
    DuplicateEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validates a signup request and appends the new user on success.
///
/// Checks run in a fixed order: confirmation mismatch, minimum length,
/// duplicate email. The directory is untouched on any failure; the
/// caller persists the snapshot after a success.
pub fn signup(
    directory: &mut UserDirectory,
    request: SignupRequest,
) -> Result<UserRecord, SignupError> {
    if request.password != request.confirm_password {
        return Err(SignupError::PasswordMismatch);
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(SignupError::PasswordTooShort);
    }
    if directory.find_by_email(&request.email).is_some() {
        return Err(SignupError::DuplicateEmail);
    }

    let user = UserRecord {
        id: directory.next_id(),
        name: request.name,
        email: request.email,
        password: request.password,
    };
    directory.add(user.clone());
    log::info!("Registered user {} (id {})", user.email, user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, confirm: &str) -> SignupRequest {
        SignupRequest {
            name: "Jane".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_signup_appends_with_sequential_id() {
        let mut directory = UserDirectory::seeded();
        let user = signup(&mut directory, request("jane@x.com", "abcdef", "abcdef"))
            .expect("signup should succeed");
        assert_eq!(user.id, 2);
        assert_eq!(directory.len(), 2);
        assert!(directory.find_by_email("jane@x.com").is_some());
    }

    #[test]
    fn test_mismatch_rejected_before_length() {
        let mut directory = UserDirectory::new();
        // Both too short and mismatched; mismatch wins.
        let err = signup(&mut directory, request("jane@x.com", "abc", "abd")).unwrap_err();
        assert_eq!(err, SignupError::PasswordMismatch);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut directory = UserDirectory::new();
        let err = signup(&mut directory, request("jane@x.com", "abcde", "abcde")).unwrap_err();
        assert_eq!(err, SignupError::PasswordTooShort);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_six_character_password_accepted() {
        let mut directory = UserDirectory::new();
        assert!(signup(&mut directory, request("jane@x.com", "abcdef", "abcdef")).is_ok());
    }

    #[test]
    fn test_duplicate_email_rejected_and_directory_unchanged() {
        let mut directory = UserDirectory::seeded();
        let before = directory.clone();
        let err = signup(
            &mut directory,
            request("masud.nil74@gmail.com", "abcdef", "abcdef"),
        )
        .unwrap_err();
        assert_eq!(err, SignupError::DuplicateEmail);
        assert_eq!(directory, before);
    }

    #[test]
    fn test_fresh_email_adds_exactly_one_record() {
        let mut directory = UserDirectory::seeded();
        let before = directory.len();
        signup(&mut directory, request("new@x.com", "abcdef", "abcdef")).unwrap();
        assert_eq!(directory.len(), before + 1);
    }

    #[test]
    fn test_error_messages_match_form_copy() {
        assert_eq!(
            SignupError::PasswordMismatch.to_string(),
            "Passwords don't match!"
        );
        assert_eq!(
            SignupError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters!"
        );
        assert_eq!(
            SignupError::DuplicateEmail.to_string(),
            "Email already registered!"
        );
    }
}
