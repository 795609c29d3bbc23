//! Listing data structures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An e-commerce site queried by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    GoogleShopping,
    MercadoLivre,
    Amazon,
}

impl Site {
    /// Stable identifier used in config tables, logs and the output file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::GoogleShopping => "google_shopping",
            Site::MercadoLivre => "mercado_livre",
            Site::Amazon => "amazon",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing as extracted from a results page.
///
/// The price is kept as the raw text scraped from the page ("R$ 1.234,56",
/// "Grátis", ...). Parsing happens in the filter so unparseable prices can
/// be dropped and counted there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    /// Listing title as displayed
    pub title: String,

    /// Raw price text as displayed
    pub price: String,

    /// Full URL to the offer
    pub source_url: String,

    /// Site the listing came from
    pub site: Site,
}

/// A listing that passed the price-range and exclusion-term filter.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedResult {
    /// The search term this listing matched
    pub product_term: String,

    /// Listing title
    pub title: String,

    /// Parsed price
    pub price: f64,

    /// Site the listing came from
    pub site: Site,

    /// Full URL to the offer
    pub source_url: String,
}

/// Per-run counters. The only mutable state shared across pipeline steps,
/// touched only by the single execution thread.
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    /// Number of (spec, site) fetches attempted
    pub sources_queried: usize,

    /// Fetches that failed (unavailable / layout changed / timeout)
    pub source_failures: usize,

    /// Raw listings seen across all fetches
    pub listings_seen: usize,

    /// Listings dropped because the price text did not parse
    pub skipped_unparseable: usize,

    /// Listings accepted by the filter
    pub accepted: usize,

    /// Whether email dispatch failed (run still counts as successful)
    pub send_failed: bool,
}
