use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Criteria that make up the weighted core average.
pub const CORE_KEYS: [&str; 6] = [
    "format",
    "experience",
    "skills",
    "soft_skills",
    "education",
    "field_match",
];

/// Criteria that only ever add to the score, capped per level.
pub const BONUS_KEYS: [&str; 6] = [
    "portfolio",
    "certificates",
    "awards",
    "scholarships",
    "side_projects",
    "community",
];

/// One evaluator sub-score. `score` is `None` when the evaluator sent a value
/// that is not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: Option<i64>,
    #[serde(default)]
    pub reason: String,
}

/// Result of looking a criterion up in a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLookup {
    Scored(i64),
    Malformed,
    Absent,
}

/// A key → `{score, reason}` mapping for one criterion family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSheet {
    entries: BTreeMap<String, CriterionScore>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by callers that already hold typed scores.
    pub fn with(mut self, key: &str, score: i64, reason: &str) -> Self {
        self.entries.insert(
            key.to_string(),
            CriterionScore {
                score: Some(score),
                reason: reason.to_string(),
            },
        );
        self
    }

    /// Sanitizes a raw JSON mapping. Returns `None` when `value` is not an object.
    ///
    /// Entries whose value is not an object are dropped (treated as absent);
    /// entries with a missing or non-numeric `score` are kept as malformed.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let entries = object
            .iter()
            .filter_map(|(key, entry)| {
                let entry = entry.as_object()?;
                let score = entry.get("score").and_then(numeric_score);
                let reason = entry
                    .get("reason")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Some((key.clone(), CriterionScore { score, reason }))
            })
            .collect();
        Some(Self { entries })
    }

    pub fn lookup(&self, key: &str) -> ScoreLookup {
        match self.entries.get(key) {
            Some(CriterionScore { score: Some(s), .. }) => ScoreLookup::Scored(*s),
            Some(CriterionScore { score: None, .. }) => ScoreLookup::Malformed,
            None => ScoreLookup::Absent,
        }
    }

    pub fn get(&self, key: &str) -> Option<&CriterionScore> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accepts integers, finite floats (truncated) and numeric strings.
fn numeric_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64),
        _ => None,
    }
}
