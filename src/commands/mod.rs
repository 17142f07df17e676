//! Command implementations

pub mod check;
pub mod score;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_equation};
pub use score::{ScoreReport, score_guess};
pub use simple::run_simple;
pub use stats::{GeneratorStats, run_generator_stats};
