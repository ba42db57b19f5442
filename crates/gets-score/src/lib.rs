#![deny(unsafe_code)]

//! Readiness scoring: four category scores, a weighted overall score and
//! the readiness band, plus the combined analysis of an upload.

mod analysis;
pub mod category;
pub mod data;
mod overall;
mod recommend;

pub use analysis::{Analysis, analyze};
pub use category::{coverage_score, posture_score, rule_weight, rules_score};
pub use data::{completeness, consistency, data_score, format_quality};
pub use overall::{CATEGORY_WEIGHTS, overall_score};
pub use recommend::recommendations;
