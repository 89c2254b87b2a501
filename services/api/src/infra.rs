use careerbot::workflows::guidance::{RepositoryError, Session, SessionId, SessionRepository};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

type SessionTable = HashMap<SessionId, (Session, DateTime<Utc>)>;

/// Process-local session table keyed by cookie id, stamped with the last time each session
/// was read or written.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<SessionTable>>,
}

impl InMemorySessionRepository {
    fn table(&self) -> Result<MutexGuard<'_, SessionTable>, RepositoryError> {
        self.sessions
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session mutex poisoned".to_string()))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.table().map(|guard| guard.len()).unwrap_or_default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self, id: &SessionId) -> Result<Option<Session>, RepositoryError> {
        let mut guard = self.table()?;
        Ok(guard.get_mut(id).map(|(session, touched)| {
            *touched = Utc::now();
            session.clone()
        }))
    }

    fn save(&self, id: &SessionId, session: Session) -> Result<(), RepositoryError> {
        self.table()?.insert(id.clone(), (session, Utc::now()));
        Ok(())
    }

    fn purge_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut guard = self.table()?;
        let before = guard.len();
        guard.retain(|_, (_, touched)| *touched >= cutoff);
        Ok(before - guard.len())
    }
}
