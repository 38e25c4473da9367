pub mod analysis;
pub mod level;
pub mod scores;

pub use analysis::{ContactInfo, CvAnalysis};
pub use level::ExperienceLevel;
pub use scores::{CriterionScore, ScoreLookup, ScoreSheet, BONUS_KEYS, CORE_KEYS};
