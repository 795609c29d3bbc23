//! Listing sources: one implementation per e-commerce site.
//!
//! Every source implements the single `ListingSource` capability: given a
//! search term, return the raw listings the site currently shows. New sites
//! are added by implementing this trait, not by branching in the pipeline.

mod amazon;
mod google_shopping;
mod mercado_livre;

pub use amazon::AmazonSource;
pub use google_shopping::GoogleShoppingSource;
pub use mercado_livre::MercadoLivreSource;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result, SourceKind};
use crate::models::{Config, RawListing, Site, SiteSelectors};
use crate::utils::{encode_query, resolve_url};

/// A site that can be searched for product listings.
///
/// `fetch` re-navigates on every call and may suspend for as long as the
/// page takes to answer; the HTTP client's timeout bounds the wait.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Which site this source queries.
    fn site(&self) -> Site;

    /// Fetch the raw listings the site returns for a search term.
    async fn fetch(&self, term: &str) -> Result<Vec<RawListing>>;
}

/// Build one source per enabled site, in the configured query order.
pub fn build_sources(config: &Config, client: &Client) -> Vec<Box<dyn ListingSource>> {
    config
        .enabled_sites()
        .into_iter()
        .map(|(site, site_config)| match site {
            Site::GoogleShopping => {
                Box::new(GoogleShoppingSource::new(client.clone(), site_config))
                    as Box<dyn ListingSource>
            }
            Site::MercadoLivre => Box::new(MercadoLivreSource::new(client.clone(), site_config)),
            Site::Amazon => Box::new(AmazonSource::new(client.clone(), site_config)),
        })
        .collect()
}

/// Fill a search URL template with the encoded term.
pub(crate) fn search_url(template: &str, term: &str) -> String {
    template.replace("{query}", &encode_query(term))
}

/// Fetch a search results page, classifying transport failures.
pub(crate) async fn fetch_document(client: &Client, site: Site, url: &str) -> Result<Html> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_fetch_error(site, e))?;
    let text = response
        .text()
        .await
        .map_err(|e| classify_fetch_error(site, e))?;
    Ok(Html::parse_document(&text))
}

/// Fetch a term's results page and extract its listings. Shared body of
/// every `ListingSource::fetch` implementation.
pub(crate) async fn fetch_listings(
    client: &Client,
    site: Site,
    template: &str,
    selectors: &SiteSelectors,
    term: &str,
) -> Result<Vec<RawListing>> {
    let url = search_url(template, term);
    let base = Url::parse(&url)?;
    let document = fetch_document(client, site, &url).await?;
    extract_listings(&document, site, selectors, &base)
}

fn classify_fetch_error(site: Site, error: reqwest::Error) -> AppError {
    let kind = if error.is_timeout() {
        SourceKind::Timeout
    } else {
        SourceKind::Unavailable
    };
    AppError::source(site, kind, error)
}

/// Extract raw listings from a parsed results page.
///
/// A missing results container means the page no longer looks like a results
/// page at all and is reported as a layout change. Rows missing a title or
/// price element are skipped; price text is carried raw for the filter to
/// parse.
pub(crate) fn extract_listings(
    document: &Html,
    site: Site,
    selectors: &SiteSelectors,
    base_url: &Url,
) -> Result<Vec<RawListing>> {
    let container_sel = parse_selector(&selectors.container_selector)?;
    if document.select(&container_sel).next().is_none() {
        return Err(AppError::source(
            site,
            SourceKind::LayoutChanged,
            format!("container '{}' not found", selectors.container_selector),
        ));
    }

    let row_sel = parse_selector(&selectors.row_selector)?;
    let title_sel = parse_selector(&selectors.title_selector)?;
    let price_sel = parse_selector(&selectors.price_selector)?;
    let link_sel = selectors
        .link_selector
        .as_ref()
        .map(|s| parse_selector(s))
        .transpose()?;

    let mut listings = Vec::new();
    for row in document.select(&row_sel) {
        let Some(title_elem) = row.select(&title_sel).next() else {
            continue;
        };
        let Some(price_elem) = row.select(&price_sel).next() else {
            continue;
        };

        let title = normalize_whitespace(&title_elem.text().collect::<String>());
        if title.is_empty() {
            continue;
        }
        let price = normalize_whitespace(&price_elem.text().collect::<String>());

        // Link element falls back to the title element's own anchor.
        let link_elem = link_sel
            .as_ref()
            .and_then(|sel| row.select(sel).next())
            .unwrap_or(title_elem);
        let raw_link = link_elem
            .value()
            .attr(&selectors.link_attr)
            .unwrap_or_default();
        let source_url = if raw_link.is_empty() {
            base_url.to_string()
        } else {
            resolve_url(base_url, raw_link)
        };

        listings.push(RawListing {
            title,
            price,
            source_url,
            site,
        });
    }

    Ok(listings)
}

pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
