//! Report formatting and artifact storage. Layout only; every value shown is computed by
//! the scoring engine beforehand.

mod pdf;
mod store;

pub use pdf::render_pdf;
pub use store::{FsReportStore, ReportStore};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::scoring::QuizResult;

pub const REPORT_TITLE: &str = "Career Guidance Report";
pub const CLOSING_LINE: &str =
    "Wishing you a bright future! Reach out anytime for career guidance.";
pub const ADVICE_WRAP_COLUMNS: usize = 88;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("unable to prepare report directory {path}: {source}")]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to write report {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to read report {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("report {0} not found")]
    NotFound(String),
    #[error("invalid report name {0}")]
    InvalidName(String),
    #[error("pdf rendering failed: {0}")]
    Render(String),
}

/// Reference to a stored report, consumable by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub file_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: &'static str,
    pub bullets: Vec<String>,
}

/// Text content of the single-page report, in drawing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<ReportSection>,
    pub closing: String,
}

impl ReportDocument {
    pub fn from_result(name: &str, result: &QuizResult, advice: &str) -> Self {
        let skills = result
            .levels
            .iter()
            .map(|(skill, level)| format!("{}: {level}/5", skill.label()))
            .collect();

        let matches = result
            .top_matches()
            .iter()
            .map(|fit| format!("{} \u{2013} {}%", fit.field, fit.percentage))
            .collect();

        Self {
            title: REPORT_TITLE.to_string(),
            subtitle: format!("for {name}"),
            sections: vec![
                ReportSection {
                    heading: "Skill Ratings",
                    bullets: skills,
                },
                ReportSection {
                    heading: "Top Career Matches",
                    bullets: matches,
                },
                ReportSection {
                    heading: "Recommended Stream",
                    bullets: vec![result.stream.label().to_string()],
                },
                ReportSection {
                    heading: "Personality Type",
                    bullets: vec![result.personality.label().to_string()],
                },
                ReportSection {
                    heading: "Counsellor Advice",
                    bullets: wrap_text(advice, ADVICE_WRAP_COLUMNS),
                },
            ],
            closing: CLOSING_LINE.to_string(),
        }
    }
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(width) {
            let piece: String = chunk.iter().collect();
            let needed = if current_len == 0 {
                chunk.len()
            } else {
                current_len + 1 + chunk.len()
            };

            if needed > width && current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += chunk.len();
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
