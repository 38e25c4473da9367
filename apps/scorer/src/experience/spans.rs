use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `MM/YYYY | YYYY`, a dash of any width, then `MM/YYYY | YYYY | present`.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2}/\d{4}|\d{4})\s*[-–—]\s*(\d{1,2}/\d{4}|\d{4}|hiện tại|present|now|nay)\b",
    )
    .expect("date range regex")
});

const PRESENT_SYNONYMS: &[&str] = &["hiện tại", "present", "now", "nay"];

/// Spans of this length or longer are treated as parse noise.
const MAX_SPAN_YEARS: f64 = 50.0;

/// One retained date range.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceSpan {
    pub start_year: i32,
    pub start_month: u32,
    pub end_year: i32,
    pub end_month: u32,
    /// Start token exactly as written, used to find the role context.
    pub start_token: String,
}

impl ExperienceSpan {
    pub fn span_years(&self) -> f64 {
        (self.end_year - self.start_year) as f64
            + (self.end_month as f64 - self.start_month as f64) / 12.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

/// Extracts every plausible date range from `section`.
///
/// Ranges that fail to parse, start more than a year after `today`, or have a
/// length outside `(0, 50)` years are dropped without error.
pub fn find_date_ranges(section: &str, today: NaiveDate) -> Vec<ExperienceSpan> {
    DATE_RANGE_RE
        .captures_iter(section)
        .filter_map(|caps| {
            let start_token = caps.get(1)?.as_str();
            let end_token = caps.get(2)?.as_str();
            let span = parse_span(start_token, end_token, today);
            if span.is_none() {
                debug!("Discarded date range '{start_token}' - '{end_token}'");
            }
            span
        })
        .collect()
}

fn parse_span(start_token: &str, end_token: &str, today: NaiveDate) -> Option<ExperienceSpan> {
    let (start_year, start_month) = parse_token(start_token, Side::Start)?;
    let (end_year, end_month) = if is_present(end_token) {
        (today.year(), today.month())
    } else {
        parse_token(end_token, Side::End)?
    };

    if start_year > today.year() + 1 {
        return None;
    }

    let span = ExperienceSpan {
        start_year,
        start_month,
        end_year,
        end_month,
        start_token: start_token.to_string(),
    };
    let years = span.span_years();
    (years > 0.0 && years < MAX_SPAN_YEARS).then_some(span)
}

/// Parses `MM/YYYY` or `YYYY`. A bare year defaults to January for a start
/// token and December for an end token.
fn parse_token(token: &str, side: Side) -> Option<(i32, u32)> {
    match token.split_once('/') {
        Some((month, year)) => {
            let month: u32 = month.trim().parse().ok()?;
            let year: i32 = year.trim().parse().ok()?;
            (1..=12).contains(&month).then_some((year, month))
        }
        None => {
            let year: i32 = token.trim().parse().ok()?;
            let month = match side {
                Side::Start => 1,
                Side::End => 12,
            };
            Some((year, month))
        }
    }
}

fn is_present(token: &str) -> bool {
    let lower = token.to_lowercase();
    PRESENT_SYNONYMS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_month_year_range() {
        let spans = find_date_ranges("03/2020 - 09/2022 Developer", today());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start_year, 2020);
        assert_eq!(spans[0].start_month, 3);
        assert_eq!(spans[0].end_month, 9);
        assert!((spans[0].span_years() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_bare_years_default_months() {
        let spans = find_date_ranges("2019 – 2021", today());
        assert_eq!(spans[0].start_month, 1);
        assert_eq!(spans[0].end_month, 12);
        // 2 years + 11 months
        assert!((spans[0].span_years() - (2.0 + 11.0 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn test_present_synonyms_resolve_to_today() {
        for end in ["present", "Hiện tại", "NOW", "nay"] {
            let text = format!("01/2024 — {end}");
            let spans = find_date_ranges(&text, today());
            assert_eq!(spans.len(), 1, "end token {end}");
            assert_eq!(spans[0].end_year, 2025);
            assert_eq!(spans[0].end_month, 6);
        }
    }

    #[test]
    fn test_future_start_is_discarded() {
        // Start more than one year after 2025.
        assert!(find_date_ranges("2027 - 2029", today()).is_empty());
        // 2026 is within the one-year tolerance.
        assert_eq!(find_date_ranges("2026 - 2027", today()).len(), 1);
    }

    #[test]
    fn test_non_positive_span_is_discarded() {
        assert!(find_date_ranges("12/2022 - 01/2020", today()).is_empty());
        assert!(find_date_ranges("05/2022 - 05/2022", today()).is_empty());
    }

    #[test]
    fn test_span_of_fifty_years_is_discarded() {
        assert!(find_date_ranges("01/1970 - 01/2020", today()).is_empty());
        assert_eq!(find_date_ranges("02/1970 - 01/2020", today()).len(), 1);
    }

    #[test]
    fn test_invalid_month_discards_only_that_span() {
        let spans = find_date_ranges("13/2020 - 05/2021\n01/2022 - 01/2023", today());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start_year, 2022);
    }

    #[test]
    fn test_multiple_ranges_in_order() {
        let text = "2015 - 2017 Intern\n06/2018 - present Engineer";
        let spans = find_date_ranges(text, today());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start_token, "2015");
        assert_eq!(spans[1].start_token, "06/2018");
    }

    #[test]
    fn test_no_ranges() {
        assert!(find_date_ranges("Graduated in 2020, GPA 3.5", today()).is_empty());
    }
}
