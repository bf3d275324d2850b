//! Category crawler: drives listing pagination for one category link.

use catex_core::ProductStub;

use crate::alias::derive_alias;
use crate::client::GateClient;
use crate::error::ScrapeError;
use crate::types::json_string;

/// Result of crawling one category link: captured metadata, the product
/// stubs from every page that arrived, and the error that stopped
/// pagination early, if any.
///
/// This is the pre-enrichment lifecycle phase of a category record. A crawl
/// that failed on page 1 still yields a value — empty metadata, no stubs —
/// because the final tree keeps a slot for every supplied link.
#[derive(Debug, Default)]
pub struct CategoryCrawl {
    pub category_id: String,
    pub category_name: String,
    pub stubs: Vec<ProductStub>,
    pub error: Option<String>,
}

impl CategoryCrawl {
    /// Returns `true` once category metadata has been captured. Metadata is
    /// locked in from the first page that carries it and never overwritten.
    fn has_metadata(&self) -> bool {
        !self.category_id.is_empty()
    }
}

/// Crawls every listing page of one category link, starting at page 1 and
/// advancing one page at a time while `current_page <= last_page`.
///
/// `last_page` is re-read from every page's metadata; the last observed
/// value wins. Any failure — transport, non-2xx, or a payload missing the
/// product array or pagination metadata — stops pagination for this link
/// immediately (no retries, no skipping ahead) and is recorded on the
/// returned value; pages collected before the failure are kept.
pub async fn crawl_category(client: &GateClient, link: &str) -> CategoryCrawl {
    let mut crawl = CategoryCrawl::default();
    let mut current_page: u32 = 1;
    let mut last_page: u32 = 1;

    loop {
        let response = match client.fetch_listing(link, current_page).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(link, page = current_page, error = %e, "listing fetch failed; stopping category");
                crawl.error = Some(format!(
                    "Error fetching data for link: {link}, page: {current_page}"
                ));
                break;
            }
        };

        let Some((products, meta, category)) = response.data.and_then(|data| {
            let category = data.category;
            data.products
                .and_then(|p| p.data.zip(p.meta).map(|(products, meta)| (products, meta, category)))
        }) else {
            let e = ScrapeError::MalformedListing {
                link: link.to_owned(),
                page: current_page,
            };
            tracing::warn!(link, page = current_page, error = %e, "stopping category");
            crawl.error = Some(format!(
                "Invalid response format for category link: {link}, page: {current_page}"
            ));
            break;
        };

        last_page = meta.last_page;

        if !crawl.has_metadata() {
            let (id, name) = category
                .map(|c| (json_string(&c.template_id), c.name))
                .unwrap_or_default();
            crawl.category_id = id.unwrap_or_else(|| "Unknown".to_owned());
            crawl.category_name = name.unwrap_or_else(|| "Unknown".to_owned());
        }

        crawl.stubs.extend(products.into_iter().map(|product| {
            let id = json_string(&product.code).unwrap_or_default();
            let alias = derive_alias(&product.link);
            ProductStub { id, alias }
        }));

        tracing::debug!(
            link,
            page = current_page,
            last_page,
            stubs = crawl.stubs.len(),
            "listing page collected"
        );

        current_page += 1;
        if current_page > last_page {
            break;
        }
    }

    crawl
}
