//! Test utilities for `evex`.
//!
//! This module collects the small canned providers that are useful when
//! writing unit and integration tests against the contract. They are kept
//! behind the `testutils` module so that the public API surface of the crate
//! stays clean while still being available to *external* test crates via
//! `use evex::testutils::*`.
//!
//! None of these providers evaluate anything; they replay fixed outcomes so
//! that caller-side code can be exercised without a real engine.

use std::collections::HashMap;

use crate::{EvalError, Evaluator, error::Result};

/// Provider backed by a fixed table of canned responses.
///
/// Inputs with no recorded entry fail with a message naming the input, so a
/// test that reaches for an unplanned response fails loudly instead of
/// succeeding by accident.
#[derive(Debug, Default)]
pub struct TableEvaluator {
    entries: HashMap<String, Result<String>>,
}

impl TableEvaluator {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a success for the given input.
    pub fn with_value(mut self, input: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(input.into(), Ok(value.into()));
        self
    }

    /// Record a failure for the given input.
    pub fn with_failure(mut self, input: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries
            .insert(input.into(), Err(EvalError::new(message)));
        self
    }

    fn lookup(&self, input: &str) -> Result<String> {
        self.entries
            .get(input)
            .cloned()
            .unwrap_or_else(|| Err(EvalError::new(format!("no canned response for {input:?}"))))
    }
}

impl Evaluator for TableEvaluator {
    fn evaluate(&self, expression: &str) -> Result<String> {
        self.lookup(expression)
    }

    fn execute(&self, statements: &str) -> Result<String> {
        self.lookup(statements)
    }
}

/// Provider that fails every call with a fixed message.
#[derive(Debug)]
pub struct FailingEvaluator {
    message: String,
}

impl FailingEvaluator {
    /// Create a provider that always fails with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Evaluator for FailingEvaluator {
    fn evaluate(&self, _expression: &str) -> Result<String> {
        Err(EvalError::new(self.message.clone()))
    }

    fn execute(&self, _statements: &str) -> Result<String> {
        Err(EvalError::new(self.message.clone()))
    }
}

/// Provider that panics on every call, for exercising [`Guarded`].
///
/// [`Guarded`]: crate::Guarded
#[derive(Debug, Default)]
pub struct PanickingEvaluator;

impl Evaluator for PanickingEvaluator {
    fn evaluate(&self, _expression: &str) -> Result<String> {
        panic!("synthetic provider fault")
    }

    fn execute(&self, _statements: &str) -> Result<String> {
        panic!("synthetic provider fault")
    }
}
