use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analyzer::DEFAULT_MIN_TEXT_CHARS;
use crate::scoring::ScoringProfile;

/// Configuration loaded from environment variables (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Trimmed CV text shorter than this is rejected before the evaluator runs.
    pub min_cv_text_chars: usize,
    /// Optional JSON file replacing the built-in weight and bonus-cap tables.
    pub scoring_profile_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rust_log: "info".to_string(),
            min_cv_text_chars: DEFAULT_MIN_TEXT_CHARS,
            scoring_profile_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            min_cv_text_chars: match optional_env("MIN_CV_TEXT_CHARS") {
                Some(raw) => raw
                    .parse::<usize>()
                    .context("MIN_CV_TEXT_CHARS must be a non-negative integer")?,
                None => DEFAULT_MIN_TEXT_CHARS,
            },
            scoring_profile_path: optional_env("SCORING_PROFILE_PATH").map(PathBuf::from),
        })
    }

    /// Built-in tables unless `SCORING_PROFILE_PATH` points to a valid profile.
    pub fn load_scoring_profile(&self) -> Result<ScoringProfile> {
        match &self.scoring_profile_path {
            Some(path) => ScoringProfile::from_json_file(path).with_context(|| {
                format!("Failed to load scoring profile from '{}'", path.display())
            }),
            None => Ok(ScoringProfile::default()),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
