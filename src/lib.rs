//! Teen phone addiction dashboard: static dataset pages plus a rule-based
//! addiction scorer.
//!
//! The scoring core is [`scoring::compute_score`]; everything else renders
//! dashboard sections around it.

pub mod config;
pub mod error;
pub mod input;
pub mod pages;
pub mod report;
pub mod scoring;
pub mod types;

pub use error::{AppError, Result};
pub use scoring::{compute_score, explain, HeuristicScorer, Scorer};
pub use types::record::{AttributeRecord, Gender};
pub use types::scoring::{AddictionLevel, RiskLabel, ScoreResult};
