//! Experience parsing: estimates weighted years of work from free CV text.
//!
//! Pipeline: locate the work-experience section, pull every date range out of
//! it, classify the role around each range, then sum span lengths weighted by
//! role type (full-time 1.0, internship 0.3, unknown 0.5).
//!
//! Overlapping ranges are summed as-is. Concurrent or restated roles count twice.

pub mod level;
pub mod roles;
pub mod section;
pub mod spans;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use level::classify_level;
pub use roles::{classify_role, RoleClassification};
pub use section::locate_section;
pub use spans::{find_date_ranges, ExperienceSpan};

/// Weighted experience estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedExperience {
    /// Weighted years, rounded to one decimal.
    pub years: f64,
    /// At least one internship span and no full-time span.
    pub is_only_internship: bool,
    pub fulltime_spans: usize,
    pub internship_spans: usize,
    pub unknown_spans: usize,
}

impl WeightedExperience {
    pub fn retained_spans(&self) -> usize {
        self.fulltime_spans + self.internship_spans + self.unknown_spans
    }
}

/// Parses experience using today's local date for "present" ranges.
pub fn parse_experience(text: &str) -> WeightedExperience {
    parse_experience_at(text, Local::now().date_naive())
}

/// Parses experience relative to `today`. Never fails; unparsable ranges are skipped.
pub fn parse_experience_at(text: &str, today: NaiveDate) -> WeightedExperience {
    let section = locate_section(text);
    let mut exp = WeightedExperience::default();
    let mut total = 0.0_f64;

    for span in find_date_ranges(section, today) {
        let role = classify_role(section, &span.start_token);
        match role {
            RoleClassification::Fulltime => exp.fulltime_spans += 1,
            RoleClassification::Internship => exp.internship_spans += 1,
            RoleClassification::Unknown => exp.unknown_spans += 1,
        }
        total += span.span_years() * role.weight();
    }

    exp.years = (total * 10.0).round() / 10.0;
    exp.is_only_internship = exp.internship_spans > 0 && exp.fulltime_spans == 0;

    debug!(
        "Parsed experience: {:.1} weighted years from {} spans (fulltime={}, internship={}, unknown={})",
        exp.years,
        exp.retained_spans(),
        exp.fulltime_spans,
        exp.internship_spans,
        exp.unknown_spans
    );

    exp
}
