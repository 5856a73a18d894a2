//! Rule gates: per-rule verdicts with a sequential run.

pub mod evaluator;
pub mod runner;
pub mod types;

pub use evaluator::{evaluate, verdict};
pub use runner::RuleRunner;
pub use types::*;
