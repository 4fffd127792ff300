use std::sync::Arc;

use crate::error::Result;

/// Capability implemented by a concrete expression/statement provider.
///
/// Both operations are synchronous and call-scoped: each invocation blocks
/// and returns exactly one result before the caller proceeds. The contract
/// is stateless at this level — a provider may keep mutable state across
/// calls, but it must supply its own serialization or isolation if callers
/// invoke it concurrently. Determinism and idempotence are not guaranteed
/// unless the provider documents them.
///
/// Every internal fault a provider can observe must be translated into an
/// `Err`; nothing may escape the call boundary uncontrolled. Providers that
/// cannot uphold this themselves can be wrapped in [`Guarded`].
///
/// [`Guarded`]: crate::Guarded
pub trait Evaluator: Send + Sync {
    /// Evaluate a single expression and return its value in textual form.
    ///
    /// The failure text describes why evaluation failed: a syntax error, an
    /// undefined reference, or a runtime fault inside the expression.
    fn evaluate(&self, expression: &str) -> Result<String>;

    /// Execute one or more statements for effect.
    ///
    /// The success payload is provider-defined — captured output, an echo of
    /// the statements, or the empty string. Only the success/failure
    /// discrimination is prescribed.
    fn execute(&self, statements: &str) -> Result<String>;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, expression: &str) -> Result<String> {
        (**self).evaluate(expression)
    }

    fn execute(&self, statements: &str) -> Result<String> {
        (**self).execute(statements)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, expression: &str) -> Result<String> {
        (**self).evaluate(expression)
    }

    fn execute(&self, statements: &str) -> Result<String> {
        (**self).execute(statements)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Arc<E> {
    fn evaluate(&self, expression: &str) -> Result<String> {
        (**self).evaluate(expression)
    }

    fn execute(&self, statements: &str) -> Result<String> {
        (**self).execute(statements)
    }
}
