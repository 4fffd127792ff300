use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use tracing::warn;

use crate::{EvalError, Evaluator, error::Result};

/// Wraps a provider so that panics cannot escape the call boundary.
///
/// The contract requires every internal fault to surface as a failure
/// result. `Guarded` traps unwinds from the inner provider and converts the
/// panic payload into an [`EvalError`], so a single well-formed call always
/// returns exactly one result variant.
pub struct Guarded<E> {
    inner: E,
}

impl<E: Evaluator> Guarded<E> {
    /// Wrap a provider.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    /// Consume the wrapper and return the inner provider.
    pub fn into_inner(self) -> E {
        self.inner
    }

    fn contain(operation: &str, call: impl FnOnce() -> Result<String>) -> Result<String> {
        match panic::catch_unwind(AssertUnwindSafe(call)) {
            Ok(result) => result,
            Err(payload) => {
                let reason = panic_text(payload.as_ref());
                warn!(operation, reason, "provider panicked; reporting as failure");
                Err(EvalError::new(format!(
                    "provider panicked during {operation}: {reason}"
                )))
            }
        }
    }
}

impl<E: Evaluator> Evaluator for Guarded<E> {
    fn evaluate(&self, expression: &str) -> Result<String> {
        Self::contain("evaluate", || self.inner.evaluate(expression))
    }

    fn execute(&self, statements: &str) -> Result<String> {
        Self::contain("execute", || self.inner.execute(statements))
    }
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "opaque panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{PanickingEvaluator, TableEvaluator};

    #[test]
    fn test_panic_becomes_failure() {
        let provider = Guarded::new(PanickingEvaluator);

        let evaluated = provider.evaluate("anything");
        let executed = provider.execute("anything");

        let message = evaluated.unwrap_err().into_message();
        assert!(message.contains("panicked during evaluate"), "{message}");
        assert!(executed.is_err());
    }

    #[test]
    fn test_results_pass_through_unchanged() {
        let provider = Guarded::new(
            TableEvaluator::new()
                .with_value("ok", "fine")
                .with_failure("bad", "broken"),
        );

        assert_eq!(provider.evaluate("ok").unwrap(), "fine");
        assert_eq!(provider.evaluate("bad").unwrap_err().message(), "broken");
    }
}
