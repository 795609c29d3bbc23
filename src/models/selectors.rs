// src/models/selectors.rs

//! CSS selectors for scraping a site's search results page.

use serde::{Deserialize, Serialize};

use crate::models::Site;

/// CSS selectors for scraping a search results page.
///
/// Selector strings are plain config data so they can be patched in
/// `config.toml` when a site changes its markup, without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSelectors {
    /// Selector proving the results page rendered at all; when absent the
    /// source reports a layout change
    pub container_selector: String,

    /// Selector for each result card/row inside the container
    pub row_selector: String,

    /// Selector for the title element within a row
    pub title_selector: String,

    /// Selector for the price element within a row
    pub price_selector: String,

    /// Optional selector for the link element (defaults to any anchor)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_selector: Option<String>,

    /// HTML attribute name for extracting links (usually "href")
    #[serde(default = "default_attr_name")]
    pub link_attr: String,
}

fn default_attr_name() -> String {
    "href".to_string()
}

impl SiteSelectors {
    /// Default selectors for a site, matching its markup at the time of
    /// writing. Sites churn; override in config when they do.
    pub fn defaults_for(site: Site) -> Self {
        match site {
            Site::GoogleShopping => Self {
                container_selector: "#search".to_string(),
                row_selector: ".i0X6df".to_string(),
                title_selector: ".EI11Pd".to_string(),
                price_selector: ".a8Pemb".to_string(),
                link_selector: Some("a".to_string()),
                link_attr: default_attr_name(),
            },
            Site::MercadoLivre => Self {
                container_selector: ".ui-search-results".to_string(),
                row_selector: ".poly-card__content".to_string(),
                title_selector: "h2".to_string(),
                price_selector: ".andes-money-amount__fraction".to_string(),
                link_selector: Some("a".to_string()),
                link_attr: default_attr_name(),
            },
            Site::Amazon => Self {
                container_selector: ".s-main-slot".to_string(),
                row_selector: ".s-asin".to_string(),
                title_selector: "h2".to_string(),
                price_selector: ".a-price .a-offscreen".to_string(),
                link_selector: Some("a.a-link-normal".to_string()),
                link_attr: default_attr_name(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_exist_for_every_site() {
        for site in [Site::GoogleShopping, Site::MercadoLivre, Site::Amazon] {
            let selectors = SiteSelectors::defaults_for(site);
            assert!(!selectors.container_selector.is_empty());
            assert!(!selectors.row_selector.is_empty());
            assert_eq!(selectors.link_attr, "href");
        }
    }

    #[test]
    fn link_attr_defaults_when_omitted_in_config() {
        let selectors: SiteSelectors = toml::from_str(
            r##"
            container_selector = "#search"
            row_selector = ".card"
            title_selector = "h2"
            price_selector = ".price"
            "##,
        )
        .unwrap();
        assert_eq!(selectors.link_attr, "href");
        assert!(selectors.link_selector.is_none());
    }
}
