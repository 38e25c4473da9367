//! Overall score: combines level-weighted core criteria, a capped bonus
//! average and the credibility penalty into one integer in [0, 100].
//!
//! Algorithm:
//! 1. core  = Σ clamp(score)·w / Σ w over core keys with w > 0 (absent ⇒ 0)
//! 2. bonus = mean clamp(score) over all bonus keys (absent ⇒ 35)
//! 3. raw   = core·(1 − cap) + bonus·cap, with `cap` from the level profile
//! 4. final = clamp(round(raw + penalty), 0, 100), penalty ∈ [−10, 0]
//!
//! No I/O, clock or randomness: identical inputs give identical scores.

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::evaluator::EvaluatorPayload;
use crate::models::{ExperienceLevel, ScoreLookup, ScoreSheet, BONUS_KEYS};
use crate::scoring::credibility::credibility_penalty;
use crate::scoring::tables::ScoringProfile;

/// Substituted for bonus criteria the evaluator did not score.
pub const NEUTRAL_BONUS_SCORE: i64 = 35;

/// Intermediate values of one score computation, kept for auditing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub level: ExperienceLevel,
    pub core_score: f64,
    pub bonus_average: f64,
    pub bonus_cap: f64,
    pub raw: f64,
    pub credibility_penalty: i32,
    pub overall: u8,
    pub missing_core: Vec<&'static str>,
    pub missing_bonus: Vec<&'static str>,
}

/// Final score only. See `score_breakdown` for the intermediate values.
pub fn calculate_overall_score(
    level: ExperienceLevel,
    core_scores: &ScoreSheet,
    bonus_scores: &ScoreSheet,
    credibility_issues: &[String],
    profile: &ScoringProfile,
) -> u8 {
    score_breakdown(level, core_scores, bonus_scores, credibility_issues, profile).overall
}

pub fn score_breakdown(
    level: ExperienceLevel,
    core_scores: &ScoreSheet,
    bonus_scores: &ScoreSheet,
    credibility_issues: &[String],
    profile: &ScoringProfile,
) -> ScoreBreakdown {
    let level_profile = profile.for_level(level);

    // ── Core ────────────────────────────────────────────────────────────────
    let mut missing_core = Vec::new();
    let mut weighted_sum = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for (key, weight) in level_profile.weights.entries() {
        if weight <= 0.0 {
            continue;
        }
        let score = match core_scores.lookup(key) {
            ScoreLookup::Scored(s) => s,
            ScoreLookup::Malformed => {
                warn!("Invalid score value for core criterion '{key}', using 0");
                0
            }
            ScoreLookup::Absent => {
                missing_core.push(key);
                0
            }
        };
        weighted_sum += clamp_score(score) * weight;
        total_weight += weight;
    }

    let core_score = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        error!("Total core weight is 0 for level {level}, core score set to 0");
        0.0
    };

    // ── Bonus ───────────────────────────────────────────────────────────────
    let mut missing_bonus = Vec::new();
    let bonus_sum: f64 = BONUS_KEYS
        .iter()
        .map(|&key| {
            let score = match bonus_scores.lookup(key) {
                ScoreLookup::Scored(s) => s,
                ScoreLookup::Malformed => {
                    warn!("Invalid score value for bonus criterion '{key}', using neutral score");
                    NEUTRAL_BONUS_SCORE
                }
                ScoreLookup::Absent => {
                    missing_bonus.push(key);
                    NEUTRAL_BONUS_SCORE
                }
            };
            clamp_score(score)
        })
        .sum();
    let bonus_average = bonus_sum / BONUS_KEYS.len() as f64;

    // ── Combine ─────────────────────────────────────────────────────────────
    let bonus_cap = level_profile.bonus_cap.clamp(0.0, 1.0);
    let raw = core_score * (1.0 - bonus_cap) + bonus_average * bonus_cap;
    let penalty = credibility_penalty(credibility_issues);
    let overall = (raw + penalty as f64).round().clamp(0.0, 100.0) as u8;

    if !missing_core.is_empty() {
        warn!("Missing core criteria: {missing_core:?}");
    }
    if !missing_bonus.is_empty() {
        debug!("Missing bonus criteria (using neutral score): {missing_bonus:?}");
    }
    info!(
        "Calculated overall_score: {overall} for level: {level} (core: {core_score:.2}, bonus: {bonus_average:.2}, cap: {bonus_cap:.2}, penalty: {penalty})"
    );

    ScoreBreakdown {
        level,
        core_score,
        bonus_average,
        bonus_cap,
        raw,
        credibility_penalty: penalty,
        overall,
        missing_core,
        missing_bonus,
    }
}

/// Authoritative score for an evaluator payload.
///
/// When either score mapping was not a well-formed object the engine cannot
/// run; the evaluator's own proposal is kept (clamped) or 0 is used.
pub fn resolve_overall_score(
    level: ExperienceLevel,
    payload: &EvaluatorPayload,
    profile: &ScoringProfile,
) -> u8 {
    match (&payload.core_scores, &payload.bonus_scores) {
        (Some(core), Some(bonus)) => {
            calculate_overall_score(level, core, bonus, &payload.credibility_issues, profile)
        }
        (core, bonus) => {
            error!(
                "Malformed score mappings (core valid: {}, bonus valid: {}); keeping proposed overall score",
                core.is_some(),
                bonus.is_some()
            );
            payload
                .proposed_overall_score
                .map(|s| s.clamp(0, 100) as u8)
                .unwrap_or(0)
        }
    }
}

fn clamp_score(score: i64) -> f64 {
    score.clamp(0, 100) as f64
}
