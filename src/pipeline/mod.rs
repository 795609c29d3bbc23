//! Pipeline: filtering and run orchestration.

pub mod filter;
pub mod run;

pub use filter::{FilterOutcome, filter};
pub use run::{RunSummary, run};
