use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use evex::{EvalError, Evaluator, Result};
use rhai::{Dynamic, EvalAltResult, ParseError, Scope};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ProviderConfig,
    engine::build_engine,
    error::{ProviderError, describe},
};

/// Rhai-backed provider for the evaluator contract.
///
/// Interpreter state persists across calls: `execute("let x = 1;")` followed
/// by `evaluate("x")` yields `"1"`. The persistent scope sits behind a mutex,
/// so a shared provider serializes concurrent callers rather than exposing
/// them to interleaved state.
///
/// `evaluate` renders the expression's value to text — unit becomes the
/// empty string, a string value is returned verbatim, anything else is
/// rendered as JSON. `execute` runs statements for effect and returns the
/// captured `print` output, lines joined with `\n`.
pub struct RhaiEvaluator {
    config: ProviderConfig,
    state: Mutex<Scope<'static>>,
}

impl RhaiEvaluator {
    /// Create a provider with default limits.
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    /// Create a provider with explicit limits.
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            config,
            state: Mutex::new(Scope::new()),
        }
    }

    /// Run `input` against the persistent scope, collecting printed lines.
    ///
    /// A fresh engine is built per call so print and progress hooks never
    /// outlive the call that installed them.
    fn run(&self, input: &str) -> (std::result::Result<Dynamic, ProviderError>, Vec<String>) {
        let mut engine = build_engine(&self.config);

        let printed = Arc::new(Mutex::new(Vec::new()));
        let sink = printed.clone();
        engine.on_print(move |text| {
            if let Ok(mut lines) = sink.lock() {
                lines.push(text.to_string());
            }
        });

        let start = Instant::now();
        let timeout = self.config.timeout;
        let timeout_ms = timeout.as_millis() as u64;
        engine.on_progress(move |_| {
            if start.elapsed() > timeout {
                Some(Dynamic::from(ProviderError::Timeout { ms: timeout_ms }))
            } else {
                None
            }
        });

        let mut scope = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let outcome = engine
            .eval_with_scope::<Dynamic>(&mut scope, input)
            .map_err(classify);
        drop(scope);

        let lines = printed.lock().unwrap_or_else(|e| e.into_inner()).clone();
        (outcome, lines)
    }

    fn fail(&self, operation: &'static str, err: &ProviderError) -> EvalError {
        let detail = describe(err);
        debug!(
            operation,
            kind = %detail.kind,
            message = %detail.message,
            "script call failed"
        );
        EvalError::new(detail.render())
    }
}

impl Default for RhaiEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for RhaiEvaluator {
    fn evaluate(&self, expression: &str) -> Result<String> {
        let (outcome, _printed) = self.run(expression);
        match outcome {
            Ok(value) => Ok(render_value(value)),
            Err(err) => Err(self.fail("evaluate", &err)),
        }
    }

    fn execute(&self, statements: &str) -> Result<String> {
        let (outcome, printed) = self.run(statements);
        match outcome {
            Ok(_) => Ok(printed.join("\n")),
            Err(err) => Err(self.fail("execute", &err)),
        }
    }
}

/// Map an engine error onto the provider taxonomy.
///
/// Timeouts surface as a termination token carrying the original
/// `ProviderError`, so unwrap that before falling back to the parse/runtime
/// split.
fn classify(err: Box<EvalAltResult>) -> ProviderError {
    match err.as_ref() {
        EvalAltResult::ErrorTerminated(token, _) | EvalAltResult::ErrorRuntime(token, _) => {
            if let Some(internal) = token.clone().try_cast::<ProviderError>() {
                return internal;
            }
        }
        _ => {}
    }

    match *err {
        EvalAltResult::ErrorParsing(kind, position) => {
            ProviderError::Parse(ParseError(kind.into(), position))
        }
        other => ProviderError::Runtime(Arc::new(other)),
    }
}

/// Render a computed value to the contract's textual form.
fn render_value(value: Dynamic) -> String {
    if value.is_unit() {
        return String::new();
    }
    match rhai::serde::from_dynamic::<Value>(&value) {
        Ok(Value::String(text)) => text,
        Ok(json) => json.to_string(),
        // Values with no JSON form still need a textual rendering.
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_unit_is_empty() {
        assert_eq!(render_value(Dynamic::UNIT), "");
    }

    #[test]
    fn test_render_string_is_verbatim() {
        assert_eq!(
            render_value(Dynamic::from("plain text".to_string())),
            "plain text"
        );
    }

    #[test]
    fn test_render_compound_values_as_json() {
        assert_eq!(render_value(Dynamic::from(2_i64)), "2");
        assert_eq!(render_value(Dynamic::from(true)), "true");

        let array: rhai::Array = vec![Dynamic::from(1_i64), Dynamic::from(2_i64)];
        assert_eq!(render_value(Dynamic::from(array)), "[1,2]");
    }
}
