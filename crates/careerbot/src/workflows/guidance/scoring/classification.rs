use serde::{Deserialize, Serialize};

use super::super::catalog::COMMERCE_FIELDS;
use super::levels::SkillLevels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    #[serde(rename = "The Achiever")]
    Achiever,
    #[serde(rename = "The Thinker")]
    Thinker,
    #[serde(rename = "The Communicator")]
    Communicator,
    #[serde(rename = "The Visionary")]
    Visionary,
    #[serde(rename = "The Helper")]
    Helper,
    #[serde(rename = "The Doer")]
    Doer,
}

impl Personality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Achiever => "The Achiever",
            Self::Thinker => "The Thinker",
            Self::Communicator => "The Communicator",
            Self::Visionary => "The Visionary",
            Self::Helper => "The Helper",
            Self::Doer => "The Doer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stream {
    Science,
    Commerce,
    #[serde(rename = "Arts/Humanities")]
    ArtsHumanities,
}

impl Stream {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Science => "Science",
            Self::Commerce => "Commerce",
            Self::ArtsHumanities => "Arts/Humanities",
        }
    }
}

/// First matching rule wins; anything unmatched falls back to the achiever.
pub fn classify_personality(levels: &SkillLevels) -> Personality {
    let [analytical, communication, leadership, adaptability, creativity] = levels.as_array();

    if levels.as_array().iter().all(|&level| level >= 4) {
        return Personality::Achiever;
    }
    if analytical == 5 && (communication >= 4 || adaptability >= 4) {
        return Personality::Thinker;
    }
    if communication == 5 && leadership >= 4 {
        return Personality::Communicator;
    }
    if creativity == 5 && (leadership >= 4 || adaptability >= 4) {
        return Personality::Visionary;
    }
    if adaptability == 5 && (leadership >= 4 || communication >= 4) {
        return Personality::Helper;
    }
    if creativity >= 4
        && adaptability >= 4
        && [analytical, communication, leadership]
            .iter()
            .all(|&level| level < 4)
    {
        return Personality::Doer;
    }

    Personality::Achiever
}

pub fn recommend_stream(levels: &SkillLevels, field: &str) -> Stream {
    let [analytical, communication, _, _, creativity] = levels.as_array();

    if analytical >= 4 {
        Stream::Science
    } else if COMMERCE_FIELDS.contains(&field) {
        Stream::Commerce
    } else if communication >= 4 || creativity >= 4 {
        Stream::ArtsHumanities
    } else {
        Stream::Commerce
    }
}

/// Short instruction handed to the advisory text generator.
pub fn advisory_prompt(levels: &SkillLevels, stream: Stream, personality: Personality) -> String {
    format!(
        "Summarise in 2 friendly sentences. Skills {levels}. Stream {}. Personality {}.",
        stream.label(),
        personality.label()
    )
}
