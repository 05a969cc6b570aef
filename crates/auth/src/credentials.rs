//! Login form validation rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters with a letter and a digit")]
    WeakPassword,
}

/// Raw login/registration input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Field-level validation, surfaced next to the offending field by the
    /// caller. Email check is shape-only (local@domain.tld); deliverability
    /// is the backend's problem.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if !is_plausible_email(&self.email) {
            return Err(CredentialsError::InvalidEmail);
        }
        if !is_acceptable_password(&self.password) {
            return Err(CredentialsError::WeakPassword);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && !email.contains(char::is_whitespace)
}

fn is_acceptable_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_ordinary_credentials() {
        assert!(creds("chef@cantina.co", "espresso1").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "no-at-sign", "@host.com", "user@", "user@nodot", "a b@c.de"] {
            assert_eq!(
                creds(email, "espresso1").validate(),
                Err(CredentialsError::InvalidEmail),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_weak_passwords() {
        for pw in ["short1", "onlyletters", "12345678"] {
            assert_eq!(
                creds("chef@cantina.co", pw).validate(),
                Err(CredentialsError::WeakPassword),
                "{pw:?} should be rejected"
            );
        }
    }
}
