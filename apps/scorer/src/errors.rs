use thiserror::Error;

use crate::evaluator::EvaluatorError;

/// Errors surfaced by `CvAnalyzer`. The deterministic core never fails; these
/// come from input validation and the injected evaluator.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("CV text is too short or empty: {found} characters, at least {required} required")]
    TextTooShort { found: usize, required: usize },

    #[error("Evaluator error: {0}")]
    Evaluator(#[from] EvaluatorError),
}

impl AnalysisError {
    /// Stable machine-readable code for the response layer.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::TextTooShort { .. } => "TEXT_TOO_SHORT",
            AnalysisError::Evaluator(EvaluatorError::Io { .. })
            | AnalysisError::Evaluator(EvaluatorError::Backend(_)) => "EVALUATOR_UNAVAILABLE",
            AnalysisError::Evaluator(_) => "EVALUATOR_INVALID_REPLY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let short = AnalysisError::TextTooShort {
            found: 3,
            required: 50,
        };
        assert_eq!(short.code(), "TEXT_TOO_SHORT");
        assert!(short.to_string().contains("at least 50"));

        let backend: AnalysisError = EvaluatorError::Backend("timeout".into()).into();
        assert_eq!(backend.code(), "EVALUATOR_UNAVAILABLE");

        let empty: AnalysisError = EvaluatorError::EmptyReply.into();
        assert_eq!(empty.code(), "EVALUATOR_INVALID_REPLY");
    }
}
