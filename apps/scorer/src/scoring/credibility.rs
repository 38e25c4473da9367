use once_cell::sync::Lazy;
use regex::Regex;

/// Floor of the summed credibility penalty.
pub const MAX_TOTAL_PENALTY: i32 = -10;

const FUTURE_DATE_KEYWORDS: &[&str] = &[
    "tương lai",
    "sắp tới",
    "chưa diễn ra",
    "chưa tới",
    "future",
    "upcoming",
    "not yet started",
];

/// Marks a future-date issue as repeated across the CV. Whole words only.
static INTENSIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:nhiều|lặp lại|multiple|several|many|repeated)\b")
        .expect("intensifier keyword regex")
});

const INCONSISTENCY_KEYWORDS: &[&str] = &[
    "không nhất quán",
    "mâu thuẫn",
    "không khớp",
    "inconsistent",
    "inconsistency",
    "contradict",
    "conflicting",
    "mismatch",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    RepeatedFutureDate,
    FutureDate,
    Inconsistency,
    Other,
}

impl IssueSeverity {
    pub fn penalty(&self) -> i32 {
        match self {
            IssueSeverity::RepeatedFutureDate => -7,
            IssueSeverity::FutureDate => -3,
            IssueSeverity::Inconsistency => -5,
            IssueSeverity::Other => -2,
        }
    }
}

/// Classifies one issue string by case-insensitive keyword match.
pub fn classify_issue(issue: &str) -> IssueSeverity {
    let lower = issue.to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|kw| lower.contains(kw));

    if has_any(FUTURE_DATE_KEYWORDS) {
        if INTENSIFIER_RE.is_match(issue) {
            IssueSeverity::RepeatedFutureDate
        } else {
            IssueSeverity::FutureDate
        }
    } else if has_any(INCONSISTENCY_KEYWORDS) {
        IssueSeverity::Inconsistency
    } else {
        IssueSeverity::Other
    }
}

/// Summed penalty over all issues, never below `MAX_TOTAL_PENALTY`.
pub fn credibility_penalty(issues: &[String]) -> i32 {
    issues
        .iter()
        .map(|issue| classify_issue(issue).penalty())
        .sum::<i32>()
        .max(MAX_TOTAL_PENALTY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_future_date_single() {
        assert_eq!(
            classify_issue("Mốc thời gian tương lai: 2030"),
            IssueSeverity::FutureDate
        );
        assert_eq!(classify_issue("Upcoming role listed as held"), IssueSeverity::FutureDate);
    }

    #[test]
    fn test_future_date_repeated() {
        assert_eq!(
            classify_issue("Nhiều mốc thời gian tương lai (2027, 2029)"),
            IssueSeverity::RepeatedFutureDate
        );
        assert_eq!(
            classify_issue("Multiple FUTURE dates in experience"),
            IssueSeverity::RepeatedFutureDate
        );
    }

    #[test]
    fn test_intensifier_inside_word_is_ignored() {
        assert_eq!(
            classify_issue("Future start date at the Germany office"),
            IssueSeverity::FutureDate
        );
        assert_eq!(
            classify_issue("Upcoming role at Manyata Tech Park"),
            IssueSeverity::FutureDate
        );
        assert_eq!(
            classify_issue("Too many future dates"),
            IssueSeverity::RepeatedFutureDate
        );
    }

    #[test]
    fn test_inconsistency() {
        assert_eq!(
            classify_issue("Thông tin học vấn không nhất quán"),
            IssueSeverity::Inconsistency
        );
        assert_eq!(
            classify_issue("Contradictory job titles"),
            IssueSeverity::Inconsistency
        );
    }

    #[test]
    fn test_generic_issue() {
        assert_eq!(classify_issue("Missing company names"), IssueSeverity::Other);
        assert_eq!(classify_issue(""), IssueSeverity::Other);
    }

    #[test]
    fn test_empty_list_has_no_penalty() {
        assert_eq!(credibility_penalty(&[]), 0);
    }

    #[test]
    fn test_penalties_sum() {
        let list = issues(&["future date 2031", "inconsistent GPA"]);
        assert_eq!(credibility_penalty(&list), -8);
    }

    #[test]
    fn test_penalty_floor() {
        let list = issues(&["inconsistent", "inconsistent", "inconsistent", "odd"]);
        assert_eq!(credibility_penalty(&list), MAX_TOTAL_PENALTY);

        let many: Vec<String> = (0..50).map(|i| format!("issue {i}")).collect();
        assert_eq!(credibility_penalty(&many), MAX_TOTAL_PENALTY);
    }

    #[test]
    fn test_adding_issue_never_reduces_penalty() {
        let mut list = Vec::new();
        let mut previous = credibility_penalty(&list);
        for issue in ["odd", "future", "mâu thuẫn", "many future dates", "x", "y"] {
            list.push(issue.to_string());
            let current = credibility_penalty(&list);
            assert!(current <= previous);
            previous = current;
        }
    }
}
