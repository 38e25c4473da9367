//! CV analysis orchestration.
//!
//! Local signals (contact fields, weighted experience) are computed while the
//! injected evaluator runs. Scoring waits for both, because the weight table is
//! keyed by the resolved level.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::errors::AnalysisError;
use crate::evaluator::{parse_evaluator_reply, Evaluator, EvaluatorPayload};
use crate::experience::{classify_level, parse_experience, parse_experience_at, WeightedExperience};
use crate::identity::extract_identity;
use crate::models::{ContactInfo, CvAnalysis, ExperienceLevel};
use crate::scoring::{resolve_overall_score, ScoringProfile};

/// Trimmed CV text shorter than this is rejected before the evaluator runs.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 50;

/// Everything derived from the CV text without the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSignals {
    pub contact: ContactInfo,
    pub experience: WeightedExperience,
}

impl LocalSignals {
    pub fn extract(cv_text: &str) -> Self {
        Self {
            contact: extract_identity(cv_text),
            experience: parse_experience(cv_text),
        }
    }

    pub fn extract_at(cv_text: &str, today: NaiveDate) -> Self {
        Self {
            contact: extract_identity(cv_text),
            experience: parse_experience_at(cv_text, today),
        }
    }
}

/// Picks the output level.
///
/// The text-derived level wins whenever at least one date range was retained.
/// Without any range the evaluator's label (normalized) is the only signal.
pub fn resolve_level(exp: &WeightedExperience, evaluator_level: Option<&str>) -> ExperienceLevel {
    let parsed = classify_level(exp);
    if exp.retained_spans() > 0 {
        if let Some(raw) = evaluator_level {
            let proposed = ExperienceLevel::normalize(raw);
            if proposed != parsed {
                info!("Evaluator proposed level '{raw}', using parsed level {parsed}");
            }
        }
        return parsed;
    }

    match evaluator_level {
        Some(raw) => ExperienceLevel::normalize(raw),
        None => parsed,
    }
}

/// Combines local signals with the evaluator payload into the final record.
pub fn assemble_analysis(
    signals: LocalSignals,
    payload: EvaluatorPayload,
    profile: &ScoringProfile,
) -> CvAnalysis {
    let level = resolve_level(&signals.experience, payload.level.as_deref());
    let overall_score = resolve_overall_score(level, &payload, profile);

    if let Some(proposed) = payload.proposed_overall_score {
        if proposed != overall_score as i64 {
            info!("Overriding evaluator overall_score {proposed} with {overall_score}");
        }
    }

    CvAnalysis {
        overall_score,
        level,
        field: payload.field,
        info: ContactInfo {
            location: payload.location,
            ..signals.contact
        },
        core_scores: payload.core_scores,
        bonus_scores: payload.bonus_scores,
        credibility_issues: payload.credibility_issues,
        strengths: payload.strengths,
        weaknesses: payload.weaknesses,
        suggestions: payload.suggestions,
        experience: signals.experience,
    }
}

/// Runs one CV through local extraction, the evaluator and the scoring engine.
pub struct CvAnalyzer {
    evaluator: Arc<dyn Evaluator>,
    profile: ScoringProfile,
    min_text_chars: usize,
}

impl CvAnalyzer {
    pub fn new(evaluator: Arc<dyn Evaluator>, profile: ScoringProfile) -> Self {
        Self {
            evaluator,
            profile,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
        }
    }

    pub fn with_min_text_chars(mut self, min_text_chars: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self
    }

    pub async fn analyze(&self, cv_text: &str) -> Result<CvAnalysis, AnalysisError> {
        let found = cv_text.trim().chars().count();
        if found < self.min_text_chars {
            warn!("Rejecting CV text with {found} characters");
            return Err(AnalysisError::TextTooShort {
                found,
                required: self.min_text_chars,
            });
        }

        let (reply, signals) = tokio::join!(self.evaluator.evaluate(cv_text), async {
            LocalSignals::extract(cv_text)
        });

        let payload = parse_evaluator_reply(&reply?)?;
        Ok(assemble_analysis(signals, payload, &self.profile))
    }
}
