// src/models/mod.rs

//! Domain models for the price research application.

mod config;
mod listing;
mod selectors;
mod spec;

// Re-export all public types
pub use config::{Config, EmailConfig, FetcherConfig, PathsConfig, SiteConfig};
pub use listing::{AcceptedResult, RawListing, RunStats, Site};
pub use selectors::SiteSelectors;
pub use spec::SearchSpec;
