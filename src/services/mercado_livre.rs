// src/services/mercado_livre.rs

//! Mercado Livre listing source.
//!
//! Searches via the public listing URL (`lista.mercadolivre.com.br/{query}`).
//! Result cards carry the title in an `h2` and the integer part of the price
//! in `.andes-money-amount__fraction`.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{RawListing, Site, SiteConfig, SiteSelectors};
use crate::services::{ListingSource, fetch_listings};

/// Listing source for Mercado Livre.
pub struct MercadoLivreSource {
    client: Client,
    search_url: String,
    selectors: SiteSelectors,
}

impl MercadoLivreSource {
    pub fn new(client: Client, config: &SiteConfig) -> Self {
        Self {
            client,
            search_url: config.search_url.clone(),
            selectors: config.selectors_for(Site::MercadoLivre),
        }
    }
}

#[async_trait]
impl ListingSource for MercadoLivreSource {
    fn site(&self) -> Site {
        Site::MercadoLivre
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
