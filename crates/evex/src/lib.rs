#![warn(missing_docs)]

//! # evex
//!
//! A minimal evaluate/execute capability contract: a provider implements the
//! [`Evaluator`] trait's two operations, and callers receive exactly one
//! discriminated result per call — success text or failure text, never an
//! uncontrolled fault across the boundary.
//!
//! ## Overview
//!
//! The contract deliberately defines only the shape and failure discipline
//! of the two operations:
//!
//! - [`Evaluator::evaluate`] takes an expression and returns its value in
//!   textual form.
//! - [`Evaluator::execute`] takes statements, runs them for effect, and
//!   returns provider-defined output text.
//!
//! What counts as a valid expression or statement, whether calls are
//! deterministic, and whether state persists between calls are all decided
//! by the concrete provider. The `evex-rhai` crate ships one such provider
//! backed by the Rhai engine.
//!
//! Providers that may panic can be wrapped in [`Guarded`], which traps
//! unwinds and converts them into ordinary [`EvalError`] failures.

/// Failure type and Result alias.
mod error;
/// The evaluator capability trait.
mod evaluator;
/// Panic containment around untrusted providers.
mod guard;

pub mod testutils;

pub use error::{EvalError, Result};
pub use evaluator::Evaluator;
pub use guard::Guarded;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testutils::TableEvaluator;

    #[test]
    fn test_trait_object_dispatch() {
        let provider: Box<dyn Evaluator> =
            Box::new(TableEvaluator::new().with_value("1+1", "2"));

        assert_eq!(provider.evaluate("1+1").unwrap(), "2");
        assert!(provider.execute("unknown").is_err());
    }

    #[test]
    fn test_shared_provider_dispatch() {
        let provider = Arc::new(TableEvaluator::new().with_value("x", "1"));

        let a = provider.clone();
        let b = provider;
        assert_eq!(a.evaluate("x").unwrap(), "1");
        assert_eq!(b.evaluate("x").unwrap(), "1");
    }
}
