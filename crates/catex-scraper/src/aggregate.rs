//! Assembles crawl output and enrichment outcomes into the final tree.

use catex_core::{CategoryRecord, ProductRecord};

use crate::crawl::CategoryCrawl;

/// Builds the final category tree from the crawled categories and the
/// per-stub enrichment outcomes.
///
/// `outcomes` is parallel to `crawled`: one outcome list per category, one
/// entry per stub, in crawl order. `None` marks a product whose enrichment
/// failed — it is simply absent from the output, no placeholder. Category
/// order follows the crawl (the order of first non-duplicate appearance in
/// the user's input), and every crawled category appears in the tree even
/// when all of its products failed or it never had any.
#[must_use]
pub fn aggregate(
    crawled: Vec<CategoryCrawl>,
    outcomes: Vec<Vec<Option<ProductRecord>>>,
) -> Vec<CategoryRecord> {
    debug_assert_eq!(crawled.len(), outcomes.len());

    crawled
        .into_iter()
        .zip(outcomes)
        .map(|(crawl, category_outcomes)| CategoryRecord {
            category_id: crawl.category_id,
            category_name: crawl.category_name,
            products: category_outcomes.into_iter().flatten().collect(),
        })
        .collect()
}
