//! Conversational career quiz: collects a name, career field, and English level, asks 25
//! scenario questions, then scores skills, matches fields, and renders a PDF report.

pub mod advisor;
pub mod catalog;
pub mod dialogue;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use advisor::{
    advice_or_fallback, gateway_from_config, AdvisorError, AdvisorGateway, OfflineAdvisor,
    OllamaAdvisor, FALLBACK_ADVICE,
};
pub use catalog::{CareerField, EnglishLevel, Question, Skill, CAREER_FIELDS, QUESTIONS};
pub use dialogue::DialogueEngine;
pub use report::{FsReportStore, ReportArtifact, ReportDocument, ReportError, ReportStore};
pub use repository::{RepositoryError, SessionId, SessionRepository};
pub use router::{guidance_router, ChatMessage, SESSION_COOKIE};
pub use scoring::{FieldMatch, Personality, QuizResult, ScoringEngine, SkillLevels, Stream};
pub use service::{Conversation, GuidanceError, GuidanceService};
pub use session::{ChatView, QuizOutcome, Session, SkillScores, Speaker, Step, TranscriptEntry};
