use serde_json::Value;

use crate::models::ScoreSheet;

/// Sanitized evaluator output. Every field has a safe default so that a
/// partially broken reply still flows through the scoring pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluatorPayload {
    /// Raw level label; normalized later via `ExperienceLevel::normalize`.
    pub level: Option<String>,
    pub field: String,
    pub location: String,
    /// The evaluator's own overall score. Superseded by the engine when possible.
    pub proposed_overall_score: Option<i64>,
    /// `None` when the mapping was missing or not an object.
    pub core_scores: Option<ScoreSheet>,
    pub bonus_scores: Option<ScoreSheet>,
    pub credibility_issues: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl EvaluatorPayload {
    pub fn from_value(value: &Value) -> Self {
        Self {
            level: value
                .get("level")
                .and_then(Value::as_str)
                .map(str::to_string)
                .filter(|s| !s.trim().is_empty()),
            field: string_field(value, "field"),
            location: value
                .get("info")
                .map(|info| string_field(info, "location"))
                .unwrap_or_default(),
            proposed_overall_score: value.get("overall_score").and_then(|v| {
                v.as_i64()
                    .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64))
            }),
            core_scores: value.get("core_scores").and_then(ScoreSheet::from_value),
            bonus_scores: value.get("bonus_scores").and_then(ScoreSheet::from_value),
            credibility_issues: string_list(value, "credibility_issues"),
            strengths: string_list(value, "strengths"),
            weaknesses: string_list(value, "weaknesses"),
            suggestions: string_list(value, "suggestions"),
        }
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Keeps the string items of a list field; anything that is not a list is empty.
fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreLookup;
    use serde_json::json;

    #[test]
    fn test_full_payload() {
        let payload = EvaluatorPayload::from_value(&json!({
            "overall_score": 77,
            "level": "Middle",
            "field": "Phát triển phần mềm",
            "info": {"name": "ignored", "location": "Hà Nội"},
            "core_scores": {"skills": {"score": 70, "reason": "Rust, Go"}},
            "bonus_scores": {"awards": {"score": 60, "reason": "ICPC"}},
            "credibility_issues": ["Mốc thời gian tương lai: 2030"],
            "strengths": ["Clear layout"],
            "weaknesses": [],
            "suggestions": ["Add metrics"]
        }));

        assert_eq!(payload.level.as_deref(), Some("Middle"));
        assert_eq!(payload.field, "Phát triển phần mềm");
        assert_eq!(payload.location, "Hà Nội");
        assert_eq!(payload.proposed_overall_score, Some(77));
        assert_eq!(
            payload.core_scores.as_ref().unwrap().lookup("skills"),
            ScoreLookup::Scored(70)
        );
        assert_eq!(payload.credibility_issues.len(), 1);
        assert_eq!(payload.suggestions, vec!["Add metrics"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let payload = EvaluatorPayload::from_value(&json!({}));
        assert_eq!(payload, EvaluatorPayload::default());
    }

    #[test]
    fn test_credibility_issues_not_a_list() {
        let payload = EvaluatorPayload::from_value(&json!({
            "credibility_issues": "future dates everywhere"
        }));
        assert!(payload.credibility_issues.is_empty());
    }

    #[test]
    fn test_non_string_issue_items_dropped() {
        let payload = EvaluatorPayload::from_value(&json!({
            "credibility_issues": ["real issue", 42, null, {"x": 1}]
        }));
        assert_eq!(payload.credibility_issues, vec!["real issue"]);
    }

    #[test]
    fn test_malformed_mappings_are_none() {
        let payload = EvaluatorPayload::from_value(&json!({
            "core_scores": [80, 70],
            "bonus_scores": "none"
        }));
        assert!(payload.core_scores.is_none());
        assert!(payload.bonus_scores.is_none());
    }

    #[test]
    fn test_blank_level_is_none() {
        let payload = EvaluatorPayload::from_value(&json!({"level": "  "}));
        assert!(payload.level.is_none());
    }
}
