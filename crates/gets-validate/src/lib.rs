#![deny(unsafe_code)]

//! Rule engine for GETS invoice batches.
//!
//! Five fixed rules run against every row. Each rule reports its own
//! outcome; a rule that cannot evaluate a row records a fault issue and the
//! batch carries on.

mod context;
pub mod definitions;
mod engine;
mod fault;
pub mod rules;

pub use context::{Resolved, RowContext};
pub use definitions::{RuleDefinition, rule_definition, rule_definitions};
pub use engine::{RuleEngine, run_validation};
pub use fault::RuleFault;
pub use rules::RuleOutcome;

/// Absolute difference above which two amounts are considered unequal.
pub const AMOUNT_TOLERANCE: f64 = 0.01;
