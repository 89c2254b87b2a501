use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::workflows::guidance::advisor::{AdvisorError, AdvisorGateway};
use crate::workflows::guidance::catalog::{QUESTIONS, QUESTION_COUNT};
use crate::workflows::guidance::dialogue::DialogueEngine;
use crate::workflows::guidance::report::{ReportArtifact, ReportError, ReportStore};
use crate::workflows::guidance::repository::{RepositoryError, SessionId, SessionRepository};
use crate::workflows::guidance::service::GuidanceService;
use crate::workflows::guidance::session::{Session, Step};

pub(super) const ADVICE: &str = "You reason carefully and adapt well. Science suits you.";

#[derive(Default)]
pub(super) struct MemoryRepository {
    sessions: Mutex<HashMap<SessionId, (Session, DateTime<Utc>)>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.sessions.lock().expect("repository mutex poisoned").len()
    }

    pub(super) fn stored(&self, id: &SessionId) -> Option<Session> {
        self.sessions
            .lock()
            .expect("repository mutex poisoned")
            .get(id)
            .map(|(session, _)| session.clone())
    }
}

impl SessionRepository for MemoryRepository {
    fn load(&self, id: &SessionId) -> Result<Option<Session>, RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
        Ok(guard.get_mut(id).map(|(session, touched)| {
            *touched = Utc::now();
            session.clone()
        }))
    }

    fn save(&self, id: &SessionId, session: Session) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
        guard.insert(id.clone(), (session, Utc::now()));
        Ok(())
    }

    fn purge_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, RepositoryError> {
        let mut guard = self.sessions.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|_, (_, touched)| *touched >= cutoff);
        Ok(before - guard.len())
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn load(&self, _id: &SessionId) -> Result<Option<Session>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn save(&self, _id: &SessionId, _session: Session) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance".to_string()))
    }

    fn purge_idle(&self, _cutoff: DateTime<Utc>) -> Result<usize, RepositoryError> {
        Ok(0)
    }
}

/// Advisor double that records prompts and answers with a canned reply, or fails when
/// no reply is configured.
#[derive(Debug, Default)]
pub(super) struct RecordingAdvisor {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingAdvisor {
    pub(super) fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn offline() -> Self {
        Self::default()
    }

    pub(super) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("advisor mutex poisoned").clone()
    }
}

impl AdvisorGateway for RecordingAdvisor {
    fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        self.prompts
            .lock()
            .expect("advisor mutex poisoned")
            .push(prompt.to_string());
        self.reply
            .clone()
            .ok_or_else(|| AdvisorError::Transport("connection refused".to_string()))
    }
}

#[derive(Debug, Default)]
pub(super) struct MemoryReports {
    stored: Mutex<Vec<Vec<u8>>>,
}

impl MemoryReports {
    pub(super) fn count(&self) -> usize {
        self.stored.lock().expect("report mutex poisoned").len()
    }
}

impl ReportStore for MemoryReports {
    fn store(&self, pdf: &[u8]) -> Result<ReportArtifact, ReportError> {
        let mut guard = self.stored.lock().expect("report mutex poisoned");
        guard.push(pdf.to_vec());
        let file_name = format!("report{}.pdf", guard.len());
        Ok(ReportArtifact {
            url: format!("/reports/{file_name}"),
            file_name,
        })
    }

    fn load(&self, file_name: &str) -> Result<Vec<u8>, ReportError> {
        let guard = self.stored.lock().expect("report mutex poisoned");
        file_name
            .strip_prefix("report")
            .and_then(|rest| rest.strip_suffix(".pdf"))
            .and_then(|index| index.parse::<usize>().ok())
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| guard.get(index).cloned())
            .ok_or_else(|| ReportError::NotFound(file_name.to_string()))
    }
}

#[derive(Debug)]
pub(super) struct UnwritableReports;

impl ReportStore for UnwritableReports {
    fn store(&self, _pdf: &[u8]) -> Result<ReportArtifact, ReportError> {
        Err(ReportError::Directory {
            path: "/read-only/reports".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn load(&self, file_name: &str) -> Result<Vec<u8>, ReportError> {
        Err(ReportError::NotFound(file_name.to_string()))
    }
}

pub(super) fn engine_with(
    advisor: Arc<dyn AdvisorGateway>,
    reports: Arc<dyn ReportStore>,
) -> DialogueEngine {
    DialogueEngine::new(advisor, reports)
}

pub(super) fn default_engine() -> (DialogueEngine, Arc<RecordingAdvisor>, Arc<MemoryReports>) {
    let advisor = Arc::new(RecordingAdvisor::replying(ADVICE));
    let reports = Arc::new(MemoryReports::default());
    let engine = engine_with(advisor.clone(), reports.clone());
    (engine, advisor, reports)
}

/// Walks a fresh session through name, field, and English level.
pub(super) fn session_at_quiz(engine: &DialogueEngine, english: &str) -> Session {
    let mut session = Session::new();
    for input in ["Alex", "Software/IT Field", english] {
        engine.advance(&mut session, input).expect("intro step");
    }
    assert_eq!(session.step, Step::Quiz);
    session
}

/// Answers every remaining question with the option at `rank`.
pub(super) fn answer_remaining(
    engine: &DialogueEngine,
    session: &mut Session,
    rank: usize,
) -> Result<(), ReportError> {
    while session.step == Step::Quiz && session.question_index < QUESTION_COUNT {
        let option = QUESTIONS[session.question_index].options[rank];
        engine.advance(session, option)?;
    }
    Ok(())
}

pub(super) fn build_service(
    reports: Arc<dyn ReportStore>,
) -> (Arc<GuidanceService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = GuidanceService::new(
        repository.clone(),
        Arc::new(RecordingAdvisor::replying(ADVICE)),
        reports,
        Duration::from_secs(3600),
    );
    (Arc::new(service), repository)
}
