use std::fmt;

use serde::{Deserialize, Serialize};

/// Seniority bucket of a candidate. Ordered from least to most senior.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Intern,
    Fresher,
    #[default]
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::Intern,
        ExperienceLevel::Fresher,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Intern => "intern",
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    /// Maps a free-form level label (as produced by the evaluator) onto the enum.
    /// Unrecognized labels fall back to `Junior`.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "intern" | "internship" | "intern-level" => ExperienceLevel::Intern,
            "fresher" | "graduate" | "entry-level" | "entry" => ExperienceLevel::Fresher,
            "junior" | "jr" | "junior-level" => ExperienceLevel::Junior,
            "mid" | "middle" | "mid-level" => ExperienceLevel::Mid,
            "senior" | "sr" | "senior-level" | "lead" => ExperienceLevel::Senior,
            _ => ExperienceLevel::Junior,
        }
    }

    /// Clamps the level so it never exceeds `ceiling`.
    pub fn capped_at(self, ceiling: ExperienceLevel) -> Self {
        self.min(ceiling)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
