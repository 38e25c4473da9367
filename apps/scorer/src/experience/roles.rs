use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters inspected on each side of a span's start token.
pub const CONTEXT_WINDOW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleClassification {
    Fulltime,
    Internship,
    Unknown,
}

impl RoleClassification {
    /// Contribution of one year in this role to the weighted total.
    pub fn weight(&self) -> f64 {
        match self {
            RoleClassification::Fulltime => 1.0,
            RoleClassification::Internship => 0.3,
            RoleClassification::Unknown => 0.5,
        }
    }
}

static INTERNSHIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:intern|interns|internship|trainee|apprentice|apprenticeship|co-op|thực tập|thực tập sinh|học việc)\b",
    )
    .expect("internship keyword regex")
});

static FULLTIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:developer|engineer|programmer|architect|analyst|consultant|designer|specialist|manager|director|administrator|accountant|tester|scientist|team lead|tech lead|full-time|fulltime|full time|lập trình viên|kỹ sư|nhân viên|chuyên viên|trưởng nhóm|trưởng phòng|giám đốc|kế toán|toàn thời gian|chính thức)\b",
    )
    .expect("fulltime keyword regex")
});

/// Classifies the role around the first occurrence of `start_token` in `section`.
///
/// Internship keywords win only when no full-time keyword is in the window.
pub fn classify_role(section: &str, start_token: &str) -> RoleClassification {
    let Some(pos) = section.find(start_token) else {
        return RoleClassification::Unknown;
    };
    classify_window(context_window(section, pos))
}

fn classify_window(window: &str) -> RoleClassification {
    let has_intern = INTERNSHIP_RE.is_match(window);
    let has_fulltime = FULLTIME_RE.is_match(window);
    match (has_intern, has_fulltime) {
        (_, true) => RoleClassification::Fulltime,
        (true, false) => RoleClassification::Internship,
        (false, false) => RoleClassification::Unknown,
    }
}

/// Slice of up to `CONTEXT_WINDOW_CHARS` characters before and after byte offset `pos`.
fn context_window(text: &str, pos: usize) -> &str {
    let start = text[..pos]
        .char_indices()
        .rev()
        .nth(CONTEXT_WINDOW_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = text[pos..]
        .char_indices()
        .nth(CONTEXT_WINDOW_CHARS)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len());
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fulltime_title() {
        let section = "01/2020 - 12/2022 Backend Developer at Acme";
        assert_eq!(classify_role(section, "01/2020"), RoleClassification::Fulltime);
    }

    #[test]
    fn test_internship_title() {
        let section = "06/2021 - 09/2021 Thực tập sinh tại FPT Software";
        assert_eq!(classify_role(section, "06/2021"), RoleClassification::Internship);
    }

    #[test]
    fn test_fulltime_keyword_overrides_internship() {
        let section = "2020 - 2021 Software Engineer Intern";
        assert_eq!(classify_role(section, "2020"), RoleClassification::Fulltime);
    }

    #[test]
    fn test_no_keywords_is_unknown() {
        let section = "2019 - 2020 Worked at a bakery";
        assert_eq!(classify_role(section, "2019"), RoleClassification::Unknown);
    }

    #[test]
    fn test_intern_does_not_match_international() {
        let section = "2019 - 2020 International volunteer program";
        assert_eq!(classify_role(section, "2019"), RoleClassification::Unknown);
    }

    #[test]
    fn test_missing_token_is_unknown() {
        assert_eq!(classify_role("Developer", "2019"), RoleClassification::Unknown);
    }

    #[test]
    fn test_window_excludes_distant_keywords() {
        let filler = "x".repeat(CONTEXT_WINDOW_CHARS + 10);
        let section = format!("Developer {filler} 2019 - 2020 trainee");
        assert_eq!(classify_role(&section, "2019"), RoleClassification::Internship);
    }

    #[test]
    fn test_window_counts_characters_not_bytes() {
        // Multi-byte filler must not panic on slicing.
        let filler = "ệ".repeat(CONTEXT_WINDOW_CHARS * 2);
        let section = format!("{filler} 2019 - 2020 {filler}");
        assert_eq!(classify_role(&section, "2019"), RoleClassification::Unknown);
    }

    #[test]
    fn test_weights() {
        assert_eq!(RoleClassification::Fulltime.weight(), 1.0);
        assert_eq!(RoleClassification::Internship.weight(), 0.3);
        assert_eq!(RoleClassification::Unknown.weight(), 0.5);
    }
}
