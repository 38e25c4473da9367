//! Level-keyed weight and bonus-cap tables.
//!
//! The defaults are compiled in; a JSON profile with the same shape can replace
//! them at startup (see `Config::load_scoring_profile`).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ExperienceLevel;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read scoring profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scoring profile is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid weight for '{key}' at level {level}: {value}")]
    InvalidWeight {
        level: ExperienceLevel,
        key: &'static str,
        value: f64,
    },

    #[error("All core weights are zero at level {0}")]
    ZeroWeights(ExperienceLevel),

    #[error("Bonus cap at level {level} must be within [0, 1], got {value}")]
    InvalidBonusCap { level: ExperienceLevel, value: f64 },
}

/// Weight of each core criterion. A weight of 0 removes the key from the average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreWeights {
    pub format: f64,
    pub experience: f64,
    pub skills: f64,
    pub soft_skills: f64,
    pub education: f64,
    pub field_match: f64,
}

impl CoreWeights {
    /// `(key, weight)` pairs in `CORE_KEYS` order.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("format", self.format),
            ("experience", self.experience),
            ("skills", self.skills),
            ("soft_skills", self.soft_skills),
            ("education", self.education),
            ("field_match", self.field_match),
        ]
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w.max(0.0)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelProfile {
    pub weights: CoreWeights,
    /// Maximum share of the final score taken by the bonus average.
    pub bonus_cap: f64,
}

/// Weights and bonus caps for every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringProfile {
    pub intern: LevelProfile,
    pub fresher: LevelProfile,
    pub junior: LevelProfile,
    pub mid: LevelProfile,
    pub senior: LevelProfile,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            intern: LevelProfile {
                weights: CoreWeights {
                    format: 15.0,
                    experience: 15.0,
                    skills: 25.0,
                    soft_skills: 15.0,
                    education: 25.0,
                    field_match: 5.0,
                },
                bonus_cap: 0.25,
            },
            fresher: LevelProfile {
                weights: CoreWeights {
                    format: 10.0,
                    experience: 25.0,
                    skills: 25.0,
                    soft_skills: 15.0,
                    education: 20.0,
                    field_match: 5.0,
                },
                bonus_cap: 0.20,
            },
            junior: LevelProfile {
                weights: CoreWeights {
                    format: 5.0,
                    experience: 45.0,
                    skills: 30.0,
                    soft_skills: 15.0,
                    education: 2.0,
                    field_match: 3.0,
                },
                bonus_cap: 0.15,
            },
            mid: LevelProfile {
                weights: CoreWeights {
                    format: 5.0,
                    experience: 50.0,
                    skills: 30.0,
                    soft_skills: 12.0,
                    education: 0.0,
                    field_match: 3.0,
                },
                bonus_cap: 0.10,
            },
            senior: LevelProfile {
                weights: CoreWeights {
                    format: 5.0,
                    experience: 55.0,
                    skills: 25.0,
                    soft_skills: 12.0,
                    education: 0.0,
                    field_match: 3.0,
                },
                bonus_cap: 0.05,
            },
        }
    }
}

impl ScoringProfile {
    pub fn for_level(&self, level: ExperienceLevel) -> &LevelProfile {
        match level {
            ExperienceLevel::Intern => &self.intern,
            ExperienceLevel::Fresher => &self.fresher,
            ExperienceLevel::Junior => &self.junior,
            ExperienceLevel::Mid => &self.mid,
            ExperienceLevel::Senior => &self.senior,
        }
    }

    /// Loads and validates a profile from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let bytes = std::fs::read(path)?;
        let profile: ScoringProfile = serde_json::from_slice(&bytes)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Weights must be finite and non-negative with a positive sum; caps within [0, 1].
    pub fn validate(&self) -> Result<(), ProfileError> {
        for level in ExperienceLevel::ALL {
            let profile = self.for_level(level);
            for (key, value) in profile.weights.entries() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ProfileError::InvalidWeight { level, key, value });
                }
            }
            if profile.weights.total() <= 0.0 {
                return Err(ProfileError::ZeroWeights(level));
            }
            let cap = profile.bonus_cap;
            if !(0.0..=1.0).contains(&cap) {
                return Err(ProfileError::InvalidBonusCap { level, value: cap });
            }
        }
        Ok(())
    }
}
