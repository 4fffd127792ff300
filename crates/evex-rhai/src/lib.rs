#![warn(missing_docs)]

//! Rhai-backed provider for the `evex` evaluator contract.
//!
//! [`RhaiEvaluator`] implements both contract operations against a single
//! persistent interpreter scope: `execute` mutates state and returns captured
//! `print` output, `evaluate` returns the expression's value in textual form.
//! Engine limits and a wall-clock timeout keep runaway input from escaping
//! the call boundary; every engine failure is rendered into the contract's
//! plain-text failure shape.

mod config;
mod engine;
mod error;
mod provider;

pub use config::ProviderConfig;
pub use error::FailureDetail;
pub use provider::RhaiEvaluator;
