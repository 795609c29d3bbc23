// src/config.rs

//! Configuration and search-spec loading.
//!
//! The application config is TOML and falls back to defaults when missing.
//! The search specs are the run's actual input; any problem there is fatal
//! and aborts the run before a single site is queried.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::SearchSpec;

/// One row of the input file, before validation.
#[derive(Debug, Deserialize)]
struct SpecRow {
    product_term: String,
    min_price: f64,
    max_price: f64,
    #[serde(default)]
    exclusion_terms: String,
}

/// Load the search specifications from a CSV file.
///
/// Expected headers: `product_term,min_price,max_price,exclusion_terms`.
/// Exclusion terms are `;`- or `,`-delimited within the cell. Every error
/// here is a fatal configuration error carrying the offending row number.
pub fn load_specs(path: impl AsRef<Path>) -> Result<Vec<SearchSpec>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::config(format!("cannot open {}: {}", path.display(), e)))?;

    let mut specs = Vec::new();
    for (index, row) in reader.deserialize::<SpecRow>().enumerate() {
        // Header is line 1, first record line 2.
        let line = index + 2;
        let row = row.map_err(|e| AppError::config(format!("line {line}: {e}")))?;
        let spec = SearchSpec::from_row(
            &row.product_term,
            row.min_price,
            row.max_price,
            &row.exclusion_terms,
        )
        .map_err(|e| AppError::config(format!("line {line}: {e}")))?;
        specs.push(spec);
    }

    if specs.is_empty() {
        return Err(AppError::config(format!(
            "no search specs in {}",
            path.display()
        )));
    }
    Ok(specs)
}
