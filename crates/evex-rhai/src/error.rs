use std::sync::Arc;

use rhai::{EvalAltResult, ParseError};
use serde::{Deserialize, Serialize};

/// Internal failure taxonomy for this provider.
///
/// Never crosses the crate boundary: every variant is rendered to text and
/// collapsed into the contract's single failure shape before returning.
#[derive(Debug, Clone, thiserror::Error)]
pub(crate) enum ProviderError {
    /// The call exceeded the configured wall-clock timeout.
    #[error("evaluation exceeded {ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        ms: u64,
    },
    /// The input failed to parse.
    #[error("{0}")]
    Parse(ParseError),
    /// The input failed while running.
    #[error("{0}")]
    Runtime(Arc<EvalAltResult>),
}

/// Structured description of a failed call, serializable for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureDetail {
    /// Short failure category: `"parse"`, `"runtime"`, or `"timeout"`.
    pub kind: String,
    /// Human-readable message.
    pub message: String,
    /// One-based line in the input, when known.
    pub line: Option<usize>,
}

impl FailureDetail {
    /// Render the detail as the contract's single failure text.
    pub fn render(&self) -> String {
        match self.line {
            Some(line) => format!("{} error at line {line}: {}", self.kind, self.message),
            None => format!("{} error: {}", self.kind, self.message),
        }
    }
}

pub(crate) fn describe(err: &ProviderError) -> FailureDetail {
    match err {
        ProviderError::Timeout { ms } => FailureDetail {
            kind: "timeout".to_string(),
            message: format!("evaluation exceeded {ms}ms"),
            line: None,
        },
        ProviderError::Parse(err) => FailureDetail {
            kind: "parse".to_string(),
            message: err.0.to_string(),
            line: err.position().line(),
        },
        ProviderError::Runtime(err) => FailureDetail {
            kind: "runtime".to_string(),
            message: err.to_string(),
            line: err.position().line(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_and_without_line() {
        let with_line = FailureDetail {
            kind: "parse".to_string(),
            message: "unexpected token".to_string(),
            line: Some(3),
        };
        assert_eq!(
            with_line.render(),
            "parse error at line 3: unexpected token"
        );

        let without_line = FailureDetail {
            kind: "timeout".to_string(),
            message: "evaluation exceeded 50ms".to_string(),
            line: None,
        };
        assert_eq!(
            without_line.render(),
            "timeout error: evaluation exceeded 50ms"
        );
    }

    #[test]
    fn test_detail_round_trips_as_json() {
        let detail = FailureDetail {
            kind: "runtime".to_string(),
            message: "division by zero".to_string(),
            line: Some(1),
        };
        let json = serde_json::to_string(&detail).unwrap();
        let parsed: FailureDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind, "runtime");
        assert_eq!(parsed.line, Some(1));
    }
}
