//! Scoring engine: turns evaluator sub-scores into the authoritative overall score.

pub mod credibility;
pub mod engine;
pub mod tables;

pub use credibility::{classify_issue, credibility_penalty, IssueSeverity};
pub use engine::{
    calculate_overall_score, resolve_overall_score, score_breakdown, ScoreBreakdown,
    NEUTRAL_BONUS_SCORE,
};
pub use tables::{CoreWeights, LevelProfile, ProfileError, ScoringProfile};
