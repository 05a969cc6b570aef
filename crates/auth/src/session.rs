//! Explicit session object for protected operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use cantina_core::UserId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Proof of a completed login.
///
/// This is what replaces the source system's client-local "logged in" flag:
/// every protected operation receives a `Session` and calls [`validate`]
/// against the current time. The token is opaque to the client; the backend
/// checks it on every request.
///
/// [`validate`]: Session::validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub user_id: UserId,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn start(
        user_id: UserId,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token: Uuid::now_v7(),
            user_id,
            email: email.into(),
            issued_at,
            expires_at,
        }
    }

    /// Deterministically validate the session window.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.expires_at <= self.issued_at {
            return Err(SessionError::InvalidTimeWindow);
        }
        if now < self.issued_at {
            return Err(SessionError::NotYetValid);
        }
        if now >= self.expires_at {
            return Err(SessionError::Expired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(issued: DateTime<Utc>, expires: DateTime<Utc>) -> Session {
        Session::start(UserId::new(1), "chef@cantina.co", issued, expires)
    }

    #[test]
    fn valid_window_passes() {
        let now = Utc::now();
        let s = session(now - Duration::minutes(1), now + Duration::minutes(30));
        assert!(s.validate(now).is_ok());
    }

    #[test]
    fn expired_session_fails() {
        let now = Utc::now();
        let s = session(now - Duration::hours(2), now - Duration::hours(1));
        assert_eq!(s.validate(now), Err(SessionError::Expired));
    }

    #[test]
    fn future_session_fails() {
        let now = Utc::now();
        let s = session(now + Duration::minutes(5), now + Duration::hours(1));
        assert_eq!(s.validate(now), Err(SessionError::NotYetValid));
    }

    #[test]
    fn inverted_window_fails() {
        let now = Utc::now();
        let s = session(now, now);
        assert_eq!(s.validate(now), Err(SessionError::InvalidTimeWindow));
    }

    #[test]
    fn tokens_are_unique() {
        let now = Utc::now();
        let a = session(now, now + Duration::hours(1));
        let b = session(now, now + Duration::hours(1));
        assert_ne!(a.token, b.token);
    }
}
