//! Full-run orchestration: link intake → crawl → enrich → aggregate.

use catex_core::{CategoryRecord, ProductRecord};

use crate::aggregate::aggregate;
use crate::client::GateClient;
use crate::crawl::{crawl_category, CategoryCrawl};
use crate::enrich::enrich_product;
use crate::error::ScrapeError;
use crate::links::normalize_links;
use crate::progress::{ProgressSink, ProgressTracker};

/// Outcome of one full run.
///
/// A run never fails outright: whatever happened, there is a (possibly
/// partial, possibly empty) tree, an ordered list of diagnostic messages,
/// the two counts, and a terminal summary line with progress at 100.
#[derive(Debug)]
pub struct RunReport {
    /// The final tree, one entry per deduplicated category link in input
    /// order.
    pub categories: Vec<CategoryRecord>,
    /// Human-readable failure descriptions, in the order they occurred.
    /// Diagnostic only — none of them aborted the run.
    pub errors: Vec<String>,
    /// Number of category links processed.
    pub category_count: usize,
    /// Total products discovered by crawling (attempted, not succeeded).
    pub product_count: usize,
    /// Terminal status line.
    pub summary: String,
}

/// Executes one full scrape run over `links`.
///
/// Links are validated and deduplicated first (order of first occurrence
/// kept). Everything downstream is strictly sequential: categories one at a
/// time, pages within a category one at a time, products one at a time,
/// each product's optional image search inline. Progress snapshots go to
/// `sink` at every milestone and land on exactly 100 at the end.
pub async fn run_scrape(
    client: &GateClient,
    site_base_url: &str,
    links: &[String],
    enable_image_search: bool,
    sink: &mut dyn ProgressSink,
) -> RunReport {
    let links = normalize_links(links);
    let mut tracker = ProgressTracker::new(links.len());
    let mut errors: Vec<String> = Vec::new();

    tracker.set_step("Получаем категории");
    sink.update(tracker.snapshot());

    let mut crawled: Vec<CategoryCrawl> = Vec::with_capacity(links.len());
    for link in &links {
        let crawl = crawl_category(client, link).await;
        if let Some(error) = &crawl.error {
            errors.push(error.clone());
        }
        tracker.category_done();
        if !crawl.category_name.is_empty() {
            tracker.set_step(format!(
                "Получаем список товаров в категории \"{}\"",
                crawl.category_name
            ));
        }
        sink.update(tracker.snapshot());
        crawled.push(crawl);
    }

    let total_products: usize = crawled.iter().map(|c| c.stubs.len()).sum();
    tracker.set_total_products(total_products);

    let mut outcomes: Vec<Vec<Option<ProductRecord>>> = Vec::with_capacity(crawled.len());
    for crawl in &crawled {
        let within_category = crawl.stubs.len();
        let mut category_outcomes: Vec<Option<ProductRecord>> = Vec::with_capacity(within_category);

        for (i, stub) in crawl.stubs.iter().enumerate() {
            tracker.set_step(format!(
                "Загружаем товары в категории \"{}\": {} из {}",
                crawl.category_name,
                i + 1,
                within_category
            ));
            sink.update(tracker.snapshot());

            let outcome = match enrich_product(
                client,
                site_base_url,
                stub,
                &crawl.category_name,
                enable_image_search,
            )
            .await
            {
                Ok(record) => Some(record),
                Err(e) => {
                    errors.push(enrich_error_message(&stub.alias, &e));
                    tracing::warn!(alias = %stub.alias, error = %e, "product enrichment failed; skipping");
                    None
                }
            };

            category_outcomes.push(outcome);
            tracker.product_done();
            sink.update(tracker.snapshot());
        }

        outcomes.push(category_outcomes);
    }

    let categories = aggregate(crawled, outcomes);

    tracker.complete(links.len(), total_products);
    let snapshot = tracker.snapshot();
    let summary = snapshot.step.clone();
    sink.update(snapshot);

    if !errors.is_empty() {
        tracing::info!(count = errors.len(), "run finished with recorded errors");
    }

    RunReport {
        categories,
        errors,
        category_count: links.len(),
        product_count: total_products,
        summary,
    }
}

/// Maps an enrichment failure to its run-error line. A missing data payload
/// and a failed fetch read differently in the diagnostics.
fn enrich_error_message(alias: &str, error: &ScrapeError) -> String {
    match error {
        ScrapeError::MissingDetailPayload { .. } => {
            format!("Invalid product data for alias: {alias}")
        }
        _ => format!("Error fetching product data for alias: {alias}"),
    }
}
