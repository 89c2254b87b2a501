use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::catalog::{CareerField, EnglishLevel, Skill};
use super::super::session::SkillScores;
use super::FieldMatch;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// Converts a skill's raw points (0-20) into a level.
///
/// The lowest band is 2: a finished quiz always collects at least 5 points per skill, so a
/// level-1 band would never be reached by real answers.
pub const fn level_for_points(points: u32) -> u8 {
    if points >= 17 {
        5
    } else if points >= 13 {
        4
    } else if points >= 9 {
        3
    } else {
        2
    }
}

/// Per-skill levels (1-5), indexed by [`Skill::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevels([u8; 5]);

impl SkillLevels {
    pub const fn new(levels: [u8; 5]) -> Self {
        Self(levels)
    }

    /// Levels from raw points, with communication shifted by English fluency and clamped.
    pub fn from_scores(scores: &SkillScores, english: EnglishLevel) -> Self {
        let mut levels = scores.as_array().map(level_for_points);
        let communication = Skill::Communication.index();
        let shifted = levels[communication] as i8 + english.communication_modifier();
        levels[communication] = shifted.clamp(MIN_LEVEL as i8, MAX_LEVEL as i8) as u8;
        Self(levels)
    }

    pub const fn get(&self, skill: Skill) -> u8 {
        self.0[skill.index()]
    }

    pub const fn as_array(&self) -> [u8; 5] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Skill, u8)> + '_ {
        Skill::ALL.into_iter().map(|skill| (skill, self.get(skill)))
    }
}

impl fmt::Display for SkillLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, c, l, ad, cr] = self.0;
        write!(f, "[{a}, {c}, {l}, {ad}, {cr}]")
    }
}

/// Share of a field's requirements the user meets, as a truncated 0-100 percentage.
///
/// Each skill contributes `min(1, level / required)`; exceeding a requirement earns no bonus.
pub fn fit_percentage(levels: &SkillLevels, field: &CareerField) -> u8 {
    let total: f64 = Skill::ALL
        .iter()
        .map(|&skill| {
            let required = f64::from(field.requirement(skill).max(MIN_LEVEL));
            (f64::from(levels.get(skill)) / required).min(1.0)
        })
        .sum();

    (total / Skill::ALL.len() as f64 * 100.0) as u8
}

/// Every field ordered by fit, highest first. Equal percentages keep table order.
pub fn rank_fields(levels: &SkillLevels, fields: &[CareerField]) -> Vec<FieldMatch> {
    let mut matches: Vec<FieldMatch> = fields
        .iter()
        .map(|field| FieldMatch {
            field: field.name.to_string(),
            percentage: fit_percentage(levels, field),
        })
        .collect();

    matches.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    matches
}
