use crate::experience::WeightedExperience;
use crate::models::ExperienceLevel;

/// Buckets weighted years into a seniority level.
///
/// Internship-only histories never rise above `Fresher`.
pub fn classify_level(exp: &WeightedExperience) -> ExperienceLevel {
    let level = match exp.years {
        y if y < 0.5 => ExperienceLevel::Intern,
        y if y <= 1.5 => ExperienceLevel::Fresher,
        y if y <= 3.0 => ExperienceLevel::Junior,
        y if y <= 5.0 => ExperienceLevel::Mid,
        _ => ExperienceLevel::Senior,
    };

    if exp.is_only_internship {
        level.capped_at(ExperienceLevel::Fresher)
    } else {
        level
    }
}
