//! Domain types for the scraped catalog tree.
//!
//! A run produces a `Vec<CategoryRecord>` — categories in the order their
//! links were supplied, each holding fully enriched [`ProductRecord`]s in
//! crawl order. The same tree is what the editing operations in
//! [`crate::edit`] rework and what the export stage serializes, so the serde
//! names here match the JSON shape the rest of the toolchain expects
//! (camelCase, as emitted by the gate backend).

use serde::{Deserialize, Serialize};

/// Minimal pre-enrichment representation of a product: catalog code plus the
/// slug ("alias") that addresses its detail endpoint.
///
/// Produced by the category crawler, consumed by the enricher. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStub {
    pub id: String,
    pub alias: String,
}

/// One category of the final tree.
///
/// `category_id` and `category_name` are captured from the first listing
/// page that carried category metadata and never overwritten afterwards.
/// A category whose listing fetch failed before any metadata arrived keeps
/// empty strings here (and, typically, an empty product list).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub category_id: String,
    pub category_name: String,
    pub products: Vec<ProductRecord>,
}

impl CategoryRecord {
    /// Returns the number of enriched products in this category.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// A fully enriched product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Catalog code of the product, as returned by the listing endpoint.
    pub id: String,
    /// Slug addressing the product's detail endpoint.
    pub alias: String,
    /// Name of the owning category, duplicated onto every product because
    /// the editing grid and the export rows are product-flat.
    pub category_name: String,
    /// Absolute product page URL on the source site.
    pub url: String,
    pub name: String,
    /// Either the site-native gallery or, when image search is enabled and
    /// returned at least one URL, the search results — a full replacement,
    /// never a merge.
    pub images: Vec<String>,
    /// Effective price: sale price when present, list price otherwise.
    pub price: f64,
    /// `floor(price / 48)` — the site's 48-month installment figure.
    pub monthly_payment: i64,
    /// Attribute groups passed through from the detail endpoint unmodified.
    pub attributes: Vec<AttributeGroup>,
    #[serde(default)]
    pub description: String,
}

/// One attribute group from the detail endpoint.
///
/// Pass-through data: the pipeline never interprets it beyond carrying it to
/// the export stage, so item values stay loosely typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroup {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub group_items: Vec<AttributeItem>,
}

/// One attribute inside an [`AttributeGroup`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeItem {
    #[serde(default)]
    pub name: String,
    /// Observed as either a plain string or an array of strings; kept as raw
    /// JSON rather than guessing.
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_description: Option<String>,
}
