use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use super::advisor::AdvisorGateway;
use super::dialogue::DialogueEngine;
use super::report::{ReportError, ReportStore};
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::session::Session;

/// A session together with the key it is stored under.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: SessionId,
    pub session: Session,
}

/// Service composing session storage, the dialogue engine, and report retrieval.
pub struct GuidanceService<R> {
    repository: Arc<R>,
    engine: DialogueEngine,
    reports: Arc<dyn ReportStore>,
    idle_ttl: chrono::Duration,
}

impl<R> GuidanceService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(
        repository: Arc<R>,
        advisor: Arc<dyn AdvisorGateway>,
        reports: Arc<dyn ReportStore>,
        idle_ttl: Duration,
    ) -> Self {
        let idle_ttl = chrono::Duration::from_std(idle_ttl)
            .unwrap_or_else(|_| chrono::Duration::days(1));

        Self {
            repository,
            engine: DialogueEngine::new(advisor, reports.clone()),
            reports,
            idle_ttl,
        }
    }

    /// Loads the caller's session, starting a fresh one when the key is missing or expired.
    pub fn open(&self, id: Option<&SessionId>) -> Result<Conversation, GuidanceError> {
        self.expire_idle()?;

        if let Some(id) = id {
            if let Some(session) = self.repository.load(id)? {
                return Ok(Conversation {
                    id: id.clone(),
                    session,
                });
            }
        }

        let id = SessionId::generate();
        let session = Session::new();
        self.repository.save(&id, session.clone())?;
        tracing::debug!(session = %id, "session started");
        Ok(Conversation { id, session })
    }

    /// Applies one user message. The stored session only changes if the whole turn succeeds.
    pub fn respond(
        &self,
        id: Option<&SessionId>,
        message: &str,
    ) -> Result<Conversation, GuidanceError> {
        let Conversation { id, session } = self.open(id)?;

        let mut next = session;
        self.engine.advance(&mut next, message)?;
        self.repository.save(&id, next.clone())?;

        Ok(Conversation { id, session: next })
    }

    /// Explicit reset back to the greeting, keeping the same key.
    pub fn restart(&self, id: Option<&SessionId>) -> Result<Conversation, GuidanceError> {
        let Conversation { id, .. } = self.open(id)?;
        let session = Session::new();
        self.repository.save(&id, session.clone())?;
        Ok(Conversation { id, session })
    }

    pub fn report(&self, file_name: &str) -> Result<Vec<u8>, GuidanceError> {
        self.reports.load(file_name).map_err(|err| match err {
            ReportError::NotFound(name) | ReportError::InvalidName(name) => {
                GuidanceError::UnknownReport(name)
            }
            other => GuidanceError::Report(other),
        })
    }

    fn expire_idle(&self) -> Result<(), GuidanceError> {
        let Some(cutoff) = Utc::now().checked_sub_signed(self.idle_ttl) else {
            return Ok(());
        };

        let purged = self.repository.purge_idle(cutoff)?;
        if purged > 0 {
            tracing::debug!(purged, "expired idle sessions");
        }
        Ok(())
    }
}

/// Error raised by the guidance service.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("report {0} not found")]
    UnknownReport(String),
    #[error("background task failed: {0}")]
    Worker(String),
}
