//! Session Service
//!
//! Opaque random session tokens held in an in-process map. Tokens are not
//! signed or bound to anything beyond this map; restarting the process drops
//! every session. Expiry is one week by default, matching the cookie.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::shared::error::{PlatformError, Result};

const TOKEN_LENGTH: usize = 48;

/// A live session record
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// In-memory session registry
pub struct SessionService {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Mint a session for the given user and return it
    pub fn create(&self, user_id: &str, email: &str) -> Session {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let now = Utc::now();
        let session = Session {
            token: token.clone(),
            user_id: user_id.to_string(),
            email: email.to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions.insert(token, session.clone());
        session
    }

    /// Look up a session token, rejecting expired entries
    pub fn validate(&self, token: &str) -> Result<Session> {
        let session = self
            .sessions
            .get(token)
            .map(|s| s.clone())
            .ok_or_else(|| PlatformError::unauthorized("Invalid session"))?;

        if session.is_expired() {
            self.sessions.remove(token);
            return Err(PlatformError::unauthorized("Session expired"));
        }

        Ok(session)
    }

    /// Best-effort server-side revocation on logout
    pub fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_validate() {
        let service = SessionService::new(3600);
        let session = service.create("u-1", "a@b.c");
        assert_eq!(session.token.len(), TOKEN_LENGTH);

        let found = service.validate(&session.token).unwrap();
        assert_eq!(found.user_id, "u-1");
        assert_eq!(found.email, "a@b.c");
    }

    #[test]
    fn test_unknown_token_rejected() {
        let service = SessionService::new(3600);
        assert!(service.validate("nope").is_err());
    }

    #[test]
    fn test_expired_session_rejected_and_removed() {
        let service = SessionService::new(-1); // already expired
        let session = service.create("u-1", "a@b.c");
        assert!(service.validate(&session.token).is_err());
        assert_eq!(service.active_count(), 0);
    }

    #[test]
    fn test_revoke() {
        let service = SessionService::new(3600);
        let session = service.create("u-1", "a@b.c");
        service.revoke(&session.token);
        assert!(service.validate(&session.token).is_err());
    }

    #[test]
    fn test_tokens_are_unique() {
        let service = SessionService::new(3600);
        let a = service.create("u-1", "a@b.c");
        let b = service.create("u-1", "a@b.c");
        assert_ne!(a.token, b.token);
    }
}
