//! Evaluator boundary: the only place the crate touches the language-model side.
//!
//! The model call itself lives outside this crate. Callers inject an
//! `Evaluator` that returns the raw reply text; everything after that
//! (fence stripping, JSON parsing, sanitizing) happens here.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod payload;

pub use payload::EvaluatorPayload;

#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("Failed to read evaluator reply from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Evaluator backend error: {0}")]
    Backend(String),

    #[error("Evaluator returned empty content")]
    EmptyReply,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Evaluator reply is not a JSON object")]
    NotAnObject,
}

/// Produces the raw evaluator reply for one CV.
///
/// Carried by `CvAnalyzer` as `Arc<dyn Evaluator>`.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, cv_text: &str) -> Result<String, EvaluatorError>;
}

/// Replays a previously captured reply from disk, ignoring the CV text.
#[derive(Debug, Clone)]
pub struct ReplayEvaluator {
    path: PathBuf,
}

impl ReplayEvaluator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Evaluator for ReplayEvaluator {
    async fn evaluate(&self, _cv_text: &str) -> Result<String, EvaluatorError> {
        debug!("Replaying evaluator reply from {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| EvaluatorError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }
}

/// Parses a raw model reply into a sanitized payload.
///
/// Accepts bare JSON, JSON wrapped in Markdown code fences, or JSON embedded in
/// surrounding prose (the outermost `{…}` is used).
pub fn parse_evaluator_reply(reply: &str) -> Result<EvaluatorPayload, EvaluatorError> {
    let text = strip_json_fences(reply);
    if text.is_empty() {
        return Err(EvaluatorError::EmptyReply);
    }

    let value: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => match outermost_object(text) {
            Some(inner) => {
                warn!("Evaluator reply had text around the JSON object, extracting it");
                serde_json::from_str(inner)?
            }
            None => return Err(EvaluatorError::Parse(e)),
        },
    };

    if !value.is_object() {
        return Err(EvaluatorError::NotAnObject);
    }
    Ok(EvaluatorPayload::from_value(&value))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
