// src/services/google_shopping.rs

//! Google Shopping listing source.
//!
//! Searches via the shopping tab (`tbm=shop`). Result cards use generated
//! class names (`.i0X6df` row, `.EI11Pd` title, `.a8Pemb` price) that churn
//! whenever Google rebuilds the page; override them in `config.toml` when
//! extraction starts reporting layout changes.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{RawListing, Site, SiteConfig, SiteSelectors};
use crate::services::{ListingSource, fetch_listings};

/// Listing source for Google Shopping.
pub struct GoogleShoppingSource {
    client: Client,
    search_url: String,
    selectors: SiteSelectors,
}

impl GoogleShoppingSource {
    pub fn new(client: Client, config: &SiteConfig) -> Self {
        Self {
            client,
            search_url: config.search_url.clone(),
            selectors: config.selectors_for(Site::GoogleShopping),
        }
    }
}

#[async_trait]
impl ListingSource for GoogleShoppingSource {
    fn site(&self) -> Site {
        Site::GoogleShopping
    }

    async fn fetch(&self, term: &str) -> Result<Vec<RawListing>> {
        fetch_listings(
            &self.client,
            self.site(),
            &self.search_url,
            &self.selectors,
            term,
        )
        .await
    }
}
