//! Identity extraction: best-effort name / phone / email lookup over raw CV text.
//!
//! Every function returns an empty string when nothing plausible is found.
//! Location is intentionally absent: it comes from the evaluator payload.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ContactInfo;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email regex")
});

/// Anything that cannot be part of a phone number.
static PHONE_NOISE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9+\s\-()]").expect("phone noise regex"));

/// Candidate patterns in priority order: Vietnamese mobile, `+` international, bare digit run.
static PHONE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?:\(?\+84\)?|0)[ \-]?[3-9](?:[ \-]?[0-9]){8}").expect("vn mobile regex"),
        Regex::new(r"\+[0-9](?:[ \-]?[0-9]){9,14}").expect("intl phone regex"),
        Regex::new(r"[0-9]{10,11}").expect("digit run regex"),
    ]
});

static LONG_DIGIT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{10,}").expect("digit run regex"));

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Latin}\s]+$").expect("name regex"));

const NAME_SCAN_LINES: usize = 10;

/// Header and section words that never form a candidate's name.
const NAME_STOPLIST: &[&str] = &[
    "cv",
    "resume",
    "curriculum vitae",
    "phone",
    "email",
    "address",
    "địa chỉ",
    "điện thoại",
    "thư điện tử",
    "kinh nghiệm",
    "kỹ năng",
];

/// First email address in the text.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone number whose digit count is within 10..=15.
pub fn extract_phone(text: &str) -> String {
    let cleaned = PHONE_NOISE_RE.replace_all(text, "");

    for pattern in PHONE_PATTERNS.iter() {
        for candidate in pattern.find_iter(&cleaned) {
            let phone: String = candidate
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            if (10..=15).contains(&digits) {
                return phone;
            }
        }
    }

    String::new()
}

/// First line among the leading lines that looks like a personal name.
pub fn extract_name(text: &str) -> String {
    for line in text.lines().take(NAME_SCAN_LINES) {
        let line = line.trim();
        let len = line.chars().count();
        if line.is_empty() || !(3..=50).contains(&len) {
            continue;
        }
        if line.contains('@') || LONG_DIGIT_RUN_RE.is_match(line) {
            continue;
        }
        let lower = line.to_lowercase();
        if NAME_STOPLIST.iter().any(|kw| lower.contains(kw)) {
            continue;
        }
        if NAME_RE.is_match(line) {
            return line.to_string();
        }
    }
    String::new()
}

/// Runs all three extractors. `location` is left empty for the caller to fill.
pub fn extract_identity(text: &str) -> ContactInfo {
    ContactInfo {
        name: extract_name(text),
        phone: extract_phone(text),
        email: extract_email(text),
        location: String::new(),
    }
}
