// src/pipeline/filter.rs

//! Filter engine: reduces raw listings to accepted results.
//!
//! A listing is accepted iff its price text parses to a numeric value inside
//! the spec's inclusive price range and its title contains none of the
//! exclusion terms (case-insensitive substring match). Listings whose price
//! does not parse are dropped and counted. Pure function: no hidden state,
//! output order preserves input order.

use crate::models::{AcceptedResult, RawListing, SearchSpec};
use crate::utils::price::parse_price;

/// Result of filtering one spec's listings.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Listings that passed the filter, in input order
    pub accepted: Vec<AcceptedResult>,

    /// Listings dropped because the price text did not parse
    pub skipped_unparseable: usize,
}

/// Apply a spec's price-range and exclusion rules to a batch of listings.
pub fn filter(spec: &SearchSpec, listings: &[RawListing]) -> FilterOutcome {
    let exclusions: Vec<String> = spec
        .exclusion_terms
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    let mut outcome = FilterOutcome::default();
    for listing in listings {
        let Some(price) = parse_price(&listing.price) else {
            outcome.skipped_unparseable += 1;
            continue;
        };
        if !(spec.min_price <= price && price <= spec.max_price) {
            continue;
        }
        let title_lower = listing.title.to_lowercase();
        if exclusions.iter().any(|term| title_lower.contains(term)) {
            continue;
        }
        outcome.accepted.push(AcceptedResult {
            product_term: spec.product_term.clone(),
            title: listing.title.clone(),
            price,
            site: listing.site,
            source_url: listing.source_url.clone(),
        });
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Site;

    fn spec(min: f64, max: f64, exclusions: &str) -> SearchSpec {
        SearchSpec::from_row("mouse", min, max, exclusions).unwrap()
    }

    fn listing(title: &str, price: &str) -> RawListing {
        RawListing {
            title: title.to_string(),
            price: price.to_string(),
            source_url: format!("https://example.com/{}", title.replace(' ', "-")),
            site: Site::GoogleShopping,
        }
    }

    #[test]
    fn scenario_a_price_range_and_exclusion() {
        let spec = spec(20.0, 50.0, "gamer");
        let listings = vec![
            listing("Wireless Mouse", "35"),
            listing("Gamer Mouse RGB", "40"),
            listing("Mouse", "60"),
        ];

        let outcome = filter(&spec, &listings);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].title, "Wireless Mouse");
        assert_eq!(outcome.accepted[0].price, 35.0);
        assert_eq!(outcome.accepted[0].product_term, "mouse");
        assert_eq!(outcome.skipped_unparseable, 0);
    }

    #[test]
    fn bounds_are_inclusive() {
        let spec = spec(20.0, 50.0, "");
        let listings = vec![listing("A", "20"), listing("B", "50"), listing("C", "19,99")];

        let outcome = filter(&spec, &listings);
        let titles: Vec<&str> = outcome.accepted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn exclusion_match_is_case_insensitive() {
        let spec = spec(0.0, 100.0, "GAMER");
        let listings = vec![listing("Mouse gamer barato", "30"), listing("Mouse", "30")];

        let outcome = filter(&spec, &listings);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].title, "Mouse");
    }

    #[test]
    fn unparseable_price_is_skipped_and_counted() {
        let spec = spec(0.0, 100.0, "");
        let listings = vec![
            listing("Sem preço", "Grátis"),
            listing("Com preço", "R$ 42,00"),
            listing("Indisponível", ""),
        ];

        let outcome = filter(&spec, &listings);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.skipped_unparseable, 2);
    }

    #[test]
    fn filter_is_idempotent() {
        let spec = spec(10.0, 2000.0, "usado");
        let listings = vec![
            listing("Mouse novo", "R$ 1.234,56"),
            listing("Mouse usado", "R$ 50,00"),
            listing("Mouse quebrado", "consulte"),
        ];

        let first = filter(&spec, &listings);
        let second = filter(&spec, &listings);
        assert_eq!(first, second);
    }

    #[test]
    fn accepted_order_preserves_input_order() {
        let spec = spec(0.0, 100.0, "");
        let listings = vec![listing("Z", "10"), listing("A", "20"), listing("M", "30")];

        let outcome = filter(&spec, &listings);
        let titles: Vec<&str> = outcome.accepted.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Z", "A", "M"]);
    }

    #[test]
    fn nan_bounds_accept_nothing() {
        // Bypasses from_row validation on purpose: even if a NaN bound
        // reaches the filter, no listing may slip into the accepted set.
        let spec = SearchSpec {
            product_term: "mouse".to_string(),
            min_price: f64::NAN,
            max_price: f64::NAN,
            exclusion_terms: vec![],
        };
        let listings = vec![listing("Mouse", "35"), listing("Caro", "999999")];

        let outcome = filter(&spec, &listings);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.skipped_unparseable, 0);
    }

    #[test]
    fn brazilian_formatted_prices_filter_correctly() {
        let spec = spec(1000.0, 1500.0, "");
        let listings = vec![listing("Caro", "R$ 1.899,00"), listing("Certo", "R$ 1.234,56")];

        let outcome = filter(&spec, &listings);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].price, 1234.56);
    }
}
