//! Email one-time code for login/registration.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use thiserror::Error;

/// Codes are short-lived and guess-limited.
const CODE_TTL_MINUTES: i64 = 10;
const MAX_ATTEMPTS: u8 = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("code has expired")]
    Expired,

    #[error("code does not match")]
    Mismatch,

    #[error("too many failed attempts")]
    TooManyAttempts,
}

/// A 4-digit verification code with an expiry window and a bounded number
/// of verification attempts. The caller sends `digits()` to the user's
/// email through whatever delivery channel it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode {
    digits: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    failed_attempts: u8,
}

impl OneTimeCode {
    pub fn issue(now: DateTime<Utc>) -> Self {
        let value: u16 = rand::rng().random_range(1000..10000);
        Self {
            digits: value.to_string(),
            issued_at: now,
            expires_at: now + Duration::minutes(CODE_TTL_MINUTES),
            failed_attempts: 0,
        }
    }

    /// The code to deliver to the user.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check a user-typed code. Mismatches are counted; after
    /// `MAX_ATTEMPTS` failures the code is dead even if the right value
    /// shows up later.
    pub fn verify(&mut self, input: &str, now: DateTime<Utc>) -> Result<(), CodeError> {
        if now >= self.expires_at {
            return Err(CodeError::Expired);
        }
        if self.failed_attempts >= MAX_ATTEMPTS {
            return Err(CodeError::TooManyAttempts);
        }
        if input.trim() != self.digits {
            self.failed_attempts += 1;
            return Err(CodeError::Mismatch);
        }
        Ok(())
    }
}
