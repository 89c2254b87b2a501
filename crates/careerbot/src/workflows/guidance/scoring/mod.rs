mod classification;
mod levels;

pub use classification::{
    advisory_prompt, classify_personality, recommend_stream, Personality, Stream,
};
pub use levels::{fit_percentage, level_for_points, rank_fields, SkillLevels};

use super::catalog::{CareerField, CAREER_FIELDS};
use super::session::Session;
use serde::{Deserialize, Serialize};

/// Number of field matches surfaced to the user.
pub const TOP_MATCHES: usize = 3;

/// Stateless scorer applied once per completed quiz.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    fields: &'static [CareerField],
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(&CAREER_FIELDS)
    }
}

impl ScoringEngine {
    pub const fn new(fields: &'static [CareerField]) -> Self {
        Self { fields }
    }

    pub fn evaluate(&self, session: &Session) -> QuizResult {
        let levels = SkillLevels::from_scores(&session.scores, session.english);
        self.classify(levels, &session.field)
    }

    pub fn classify(&self, levels: SkillLevels, field: &str) -> QuizResult {
        QuizResult {
            levels,
            matches: rank_fields(&levels, self.fields),
            personality: classify_personality(&levels),
            stream: recommend_stream(&levels, field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: String,
    pub percentage: u8,
}

/// Derived once at quiz completion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub levels: SkillLevels,
    pub matches: Vec<FieldMatch>,
    pub personality: Personality,
    pub stream: Stream,
}

impl QuizResult {
    pub fn top_matches(&self) -> &[FieldMatch] {
        let end = self.matches.len().min(TOP_MATCHES);
        &self.matches[..end]
    }

    pub fn advisory_prompt(&self) -> String {
        advisory_prompt(&self.levels, self.stream, self.personality)
    }
}
