use serde::{Deserialize, Serialize};

use super::catalog::{EnglishLevel, Question, Skill, QUESTIONS, QUESTION_COUNT};
use super::report::ReportArtifact;
use super::scoring::QuizResult;

pub const GREETING: &str = "Hi! What's your name?";
pub const FIELD_NOT_SELECTED: &str = "Not selected";

/// Position of a conversation in the linear quiz flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Name,
    Field,
    English,
    Quiz,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub message: String,
}

/// Raw points collected per skill, indexed by [`Skill::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScores([u32; 5]);

impl SkillScores {
    pub const fn new(points: [u32; 5]) -> Self {
        Self(points)
    }

    pub fn award(&mut self, skill: Skill, points: u32) {
        self.0[skill.index()] += points;
    }

    pub const fn points(&self, skill: Skill) -> u32 {
        self.0[skill.index()]
    }

    pub const fn as_array(&self) -> [u32; 5] {
        self.0
    }
}

/// Everything produced once the last question is answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub result: QuizResult,
    pub advice: String,
    pub report: ReportArtifact,
}

/// Per-conversation state bag. Owned by the transport layer and mutated only by the
/// dialogue engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub step: Step,
    pub name: String,
    pub field: String,
    pub english: EnglishLevel,
    pub question_index: usize,
    pub scores: SkillScores,
    pub transcript: Vec<TranscriptEntry>,
    pub quick_replies: Vec<String>,
    pub show_footer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<QuizOutcome>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: Step::Name,
            name: String::new(),
            field: FIELD_NOT_SELECTED.to_string(),
            english: EnglishLevel::default(),
            question_index: 0,
            scores: SkillScores::default(),
            transcript: vec![TranscriptEntry {
                speaker: Speaker::Bot,
                message: GREETING.to_string(),
            }],
            quick_replies: Vec::new(),
            show_footer: false,
            outcome: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The question awaiting an answer, if the quiz is in progress.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.step {
            Step::Quiz => QUESTIONS.get(self.question_index),
            _ => None,
        }
    }

    pub(crate) fn record_user(&mut self, message: &str) {
        self.transcript.push(TranscriptEntry {
            speaker: Speaker::User,
            message: message.to_string(),
        });
    }

    /// Appends a bot message and replaces the offered quick replies.
    pub(crate) fn offer(&mut self, message: impl Into<String>, replies: Vec<String>) {
        self.transcript.push(TranscriptEntry {
            speaker: Speaker::Bot,
            message: message.into(),
        });
        self.quick_replies = replies;
    }

    pub fn view(&self) -> ChatView {
        ChatView {
            step: self.step,
            transcript: self.transcript.clone(),
            quick_replies: self.quick_replies.clone(),
            show_footer: self.show_footer,
            progress: QuizProgress {
                answered: self.question_index,
                total: QUESTION_COUNT,
            },
            report_url: self
                .outcome
                .as_ref()
                .map(|outcome| outcome.report.url.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
}

/// What the chat UI needs to render a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatView {
    pub step: Step,
    pub transcript: Vec<TranscriptEntry>,
    pub quick_replies: Vec<String>,
    pub show_footer: bool,
    pub progress: QuizProgress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}
