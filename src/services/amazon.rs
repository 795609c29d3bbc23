// src/services/amazon.rs

//! Amazon listing source.
//!
//! Searches via `/s?k={query}`. Result cards are `.s-asin` blocks; the
//! visually hidden `.a-offscreen` span inside `.a-price` carries the full
//! formatted price, which is steadier than the split whole/fraction spans.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{RawListing, Site, SiteConfig, SiteSelectors};
use crate::services::{ListingSource, fetch_listings};

/// Listing source for Amazon.
pub struct AmazonSource {
    client: Client,
    search_url: String,
    selectors: SiteSelectors,
}

impl AmazonSource {
    pub fn new(client: Client, config: &SiteConfig) -> Self {
        Self {
            client,
            search_url: config.search_url.clone(),
            selectors: config.selectors_for(Site::Amazon),
        }
    }
}

#[async_trait]
impl ListingSource for AmazonSource {
    fn site(&self) -> Site {
        Site::Amazon
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

#[cfg(test)]
mod tests {
    use scraper::Html;
    use url::Url;

    use super::*;
    use crate::services::extract_listings;

    const RESULTS_PAGE: &str = r#"
        <html><body>
          <div class="s-main-slot s-result-list">
            <div class="s-asin" data-asin="B07B9KV8BL">
              <h2><span>Mouse Logitech M170 sem fio</span></h2>
              <span class="a-price">
                <span class="a-offscreen">R$ 84,99</span>
                <span class="a-price-whole">84</span>
              </span>
              <a class="a-link-normal" href="/dp/B07B9KV8BL">oferta</a>
            </div>
            <div class="s-asin" data-asin="B0SPONSOR">
              <h2><span>Mouse Gamer Recarregável</span></h2>
              <span class="a-price">
                <span class="a-offscreen">R$ 199,90</span>
              </span>
              <a class="a-link-normal" href="/dp/B0SPONSOR">oferta</a>
            </div>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_offscreen_price_and_product_link() {
        let document = Html::parse_document(RESULTS_PAGE);
        let selectors = SiteSelectors::defaults_for(Site::Amazon);
        let base = Url::parse("https://www.amazon.com.br/s?k=mouse").unwrap();

        let listings = extract_listings(&document, Site::Amazon, &selectors, &base).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Mouse Logitech M170 sem fio");
        assert_eq!(listings[0].price, "R$ 84,99");
        assert_eq!(
            listings[0].source_url,
            "https://www.amazon.com.br/dp/B07B9KV8BL"
        );
        assert_eq!(listings[1].site, Site::Amazon);
    }
}
