use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::workflows::guidance::catalog::{QUESTIONS, QUESTION_COUNT};
use crate::workflows::guidance::repository::{RepositoryError, SessionId};
use crate::workflows::guidance::service::{GuidanceError, GuidanceService};
use crate::workflows::guidance::session::{Step, GREETING};

#[test]
fn open_starts_and_persists_a_greeting_session() {
    let (service, repository) = build_service(Arc::new(MemoryReports::default()));

    let conversation = service.open(None).expect("session opened");

    assert_eq!(conversation.session.step, Step::Name);
    assert_eq!(conversation.session.transcript[0].message, GREETING);
    assert_eq!(repository.len(), 1);
    assert!(repository.stored(&conversation.id).is_some());
}

#[test]
fn unknown_key_gets_a_fresh_session() {
    let (service, repository) = build_service(Arc::new(MemoryReports::default()));
    let stale = SessionId::generate();

    let conversation = service.open(Some(&stale)).expect("session opened");

    assert_ne!(conversation.id, stale);
    assert!(repository.stored(&stale).is_none());
}

#[test]
fn respond_saves_each_turn() {
    let (service, repository) = build_service(Arc::new(MemoryReports::default()));
    let id = service.open(None).expect("opened").id;

    let conversation = service.respond(Some(&id), "Priya").expect("name turn");
    assert_eq!(conversation.id, id);

    let stored = repository.stored(&id).expect("session stored");
    assert_eq!(stored.step, Step::Field);
    assert_eq!(stored.name, "Priya");
    assert_eq!(stored, conversation.session);
}

#[test]
fn failed_turn_leaves_stored_session_untouched() {
    let (service, repository) = build_service(Arc::new(UnwritableReports));
    let id = service.open(None).expect("opened").id;
    for input in ["Alex", "Law & Legal Services", "Excellent"] {
        service.respond(Some(&id), input).expect("intro turn");
    }
    for question in QUESTIONS.iter().take(QUESTION_COUNT - 1) {
        service
            .respond(Some(&id), question.options[0])
            .expect("answer accepted");
    }

    let err = service
        .respond(Some(&id), QUESTIONS[QUESTION_COUNT - 1].options[0])
        .expect_err("report cannot be stored");
    assert!(matches!(err, GuidanceError::Report(_)));

    let stored = repository.stored(&id).expect("session kept");
    assert_eq!(stored.step, Step::Quiz);
    assert_eq!(stored.question_index, QUESTION_COUNT - 1);
    assert!(stored.outcome.is_none());
}

#[test]
fn restart_keeps_the_key_and_resets_state() {
    let (service, repository) = build_service(Arc::new(MemoryReports::default()));
    let id = service.open(None).expect("opened").id;
    service.respond(Some(&id), "Alex").expect("name turn");

    let conversation = service.restart(Some(&id)).expect("restarted");

    assert_eq!(conversation.id, id);
    assert_eq!(conversation.session.step, Step::Name);
    assert_eq!(repository.stored(&id).expect("stored").transcript.len(), 1);
}

#[test]
fn idle_sessions_expire() {
    let repository = Arc::new(MemoryRepository::default());
    let service = GuidanceService::new(
        repository.clone(),
        Arc::new(RecordingAdvisor::replying(ADVICE)),
        Arc::new(MemoryReports::default()),
        Duration::ZERO,
    );
    let first = service.open(None).expect("opened").id;
    std::thread::sleep(Duration::from_millis(5));

    let second = service.open(Some(&first)).expect("reopened").id;

    assert_ne!(first, second);
    assert!(repository.stored(&first).is_none());
    assert_eq!(repository.len(), 1);
}

#[test]
fn unknown_report_is_reported_as_such() {
    let (service, _) = build_service(Arc::new(MemoryReports::default()));

    let err = service.report("missing.pdf").expect_err("no such report");

    assert!(matches!(err, GuidanceError::UnknownReport(name) if name == "missing.pdf"));
}

#[test]
fn storage_outage_surfaces_as_repository_error() {
    let service = GuidanceService::new(
        Arc::new(UnavailableRepository),
        Arc::new(RecordingAdvisor::offline()),
        Arc::new(MemoryReports::default()),
        Duration::from_secs(60),
    );

    let err = service.open(None).expect_err("store offline");

    assert!(matches!(
        err,
        GuidanceError::Repository(RepositoryError::Unavailable(_))
    ));
}
