use serde::{Deserialize, Serialize};

use crate::experience::WeightedExperience;
use crate::models::level::ExperienceLevel;
use crate::models::scores::ScoreSheet;

/// Contact fields. Each is empty when nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Never derived from the text; copied from the evaluator payload.
    pub location: String,
}

/// Assembled result of one CV analysis, ready for the response layer.
#[derive(Debug, Clone, Serialize)]
pub struct CvAnalysis {
    pub overall_score: u8,
    pub level: ExperienceLevel,
    pub field: String,
    pub info: ContactInfo,
    pub core_scores: Option<ScoreSheet>,
    pub bonus_scores: Option<ScoreSheet>,
    pub credibility_issues: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub experience: WeightedExperience,
}
