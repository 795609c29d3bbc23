// src/pipeline/run.rs

//! Run orchestration.
//!
//! Sequential by design: one spec at a time, one site at a time. Listing
//! source failures are logged and skipped; only a spec-load failure (handled
//! by the caller) or a report write failure aborts the run. The notifier is
//! invoked exactly once after a successful write, and its failure does not
//! fail the run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;

use crate::error::Result;
use crate::models::{AcceptedResult, Config, RunStats, SearchSpec};
use crate::notify::Notifier;
use crate::pipeline::filter::filter;
use crate::report::write_report;
use crate::services::ListingSource;

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub stats: RunStats,
    pub report_path: PathBuf,
}

/// Execute the full pipeline: fetch, filter, write, notify.
pub async fn run(
    config: &Config,
    specs: &[SearchSpec],
    sources: &[Box<dyn ListingSource>],
    notifier: Option<&dyn Notifier>,
) -> Result<RunSummary> {
    let started = Local::now();
    log::info!(
        "Run started: {} search specs across {} sites",
        specs.len(),
        sources.len()
    );

    let delay = Duration::from_millis(config.fetcher.request_delay_ms);
    let mut stats = RunStats::default();
    let mut results: Vec<AcceptedResult> = Vec::new();

    for spec in specs {
        for source in sources {
            stats.sources_queried += 1;
            match source.fetch(&spec.product_term).await {
                Ok(listings) => {
                    stats.listings_seen += listings.len();
                    let outcome = filter(spec, &listings);
                    if outcome.skipped_unparseable > 0 {
                        log::info!(
                            "{}: skipped {} listings with unparseable prices for '{}'",
                            source.site(),
                            outcome.skipped_unparseable,
                            spec.product_term
                        );
                    }
                    stats.skipped_unparseable += outcome.skipped_unparseable;
                    stats.accepted += outcome.accepted.len();
                    results.extend(outcome.accepted);
                }
                Err(error) => {
                    stats.source_failures += 1;
                    log::warn!(
                        "Fetch failed for '{}' on {}: {}",
                        spec.product_term,
                        source.site(),
                        error
                    );
                }
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    let report_path = write_report(Path::new(&config.paths.output_dir), &results)?;
    log::info!(
        "Report written to {} ({} rows)",
        report_path.display(),
        results.len()
    );

    if let Some(notifier) = notifier {
        if let Err(error) = notifier.send(&report_path).await {
            stats.send_failed = true;
            log::error!("Email dispatch failed: {}", error);
        }
    }

    let elapsed = Local::now().signed_duration_since(started);
    log::info!(
        "Run finished in {}s: {} accepted, {} unparseable skipped, {} source failures",
        elapsed.num_seconds(),
        stats.accepted,
        stats.skipped_unparseable,
        stats.source_failures
    );

    Ok(RunSummary { stats, report_path })
}
