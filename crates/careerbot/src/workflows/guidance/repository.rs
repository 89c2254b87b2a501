use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::Session;

/// Opaque per-browser conversation key, carried in a cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accepts only well-formed UUIDs so arbitrary cookie values never reach storage.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim())
            .ok()
            .map(|uuid| Self(uuid.simple().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session storage owned by the hosting transport.
pub trait SessionRepository: Send + Sync {
    fn load(&self, id: &SessionId) -> Result<Option<Session>, RepositoryError>;
    fn save(&self, id: &SessionId, session: Session) -> Result<(), RepositoryError>;
    /// Drops sessions not touched since `cutoff`, returning how many were removed.
    fn purge_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_round_trip_through_parse() {
        let id = SessionId::generate();
        assert_eq!(SessionId::parse(id.as_str()), Some(id.clone()));
        assert_eq!(id.as_str().len(), 32);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(SessionId::parse("not-a-session"), None);
        assert_eq!(SessionId::parse(""), None);
    }
}
