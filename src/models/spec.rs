//! Search specification data structure.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// One product search: what to look for, the acceptable price range, and
/// terms that disqualify a listing. Created once per input row and immutable
/// for the duration of the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSpec {
    /// Term typed into each site's search
    pub product_term: String,

    /// Lower price bound, inclusive
    pub min_price: f64,

    /// Upper price bound, inclusive
    pub max_price: f64,

    /// Terms that reject a listing when found in its title
    /// (case-insensitive substring match)
    pub exclusion_terms: Vec<String>,
}

impl SearchSpec {
    /// Build a spec from raw row fields, splitting the exclusion column on
    /// `;` or `,`.
    pub fn from_row(
        product_term: &str,
        min_price: f64,
        max_price: f64,
        exclusion_terms: &str,
    ) -> Result<Self> {
        let spec = Self {
            product_term: product_term.trim().to_string(),
            min_price,
            max_price,
            exclusion_terms: split_terms(exclusion_terms),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Validate required fields and price-range sanity.
    pub fn validate(&self) -> Result<()> {
        if self.product_term.is_empty() {
            return Err(AppError::config("product_term is empty"));
        }
        // NaN bounds would compare false against every price and let
        // everything through the filter.
        if !self.min_price.is_finite() || !self.max_price.is_finite() {
            return Err(AppError::config(format!(
                "price bounds must be finite numbers for '{}'",
                self.product_term
            )));
        }
        if self.min_price > self.max_price {
            return Err(AppError::config(format!(
                "min_price {} exceeds max_price {} for '{}'",
                self.min_price, self.max_price, self.product_term
            )));
        }
        Ok(())
    }
}

/// Split a delimited exclusion-terms cell into individual terms.
///
/// Accepts both `;` and `,` as delimiters since input files use either.
fn split_terms(raw: &str) -> Vec<String> {
    raw.replace(';', ",")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
