//! CV analysis: contact extraction, weighted experience parsing and a
//! deterministic level-aware overall score on top of an injected evaluator.

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod experience;
pub mod identity;
pub mod models;
pub mod scoring;

pub use analyzer::{assemble_analysis, resolve_level, CvAnalyzer, LocalSignals};
pub use errors::AnalysisError;
pub use evaluator::{parse_evaluator_reply, Evaluator, EvaluatorError, ReplayEvaluator};
pub use experience::{classify_level, parse_experience, WeightedExperience};
pub use models::{ContactInfo, CvAnalysis, ExperienceLevel, ScoreSheet};
pub use scoring::{calculate_overall_score, credibility_penalty, ScoringProfile};
