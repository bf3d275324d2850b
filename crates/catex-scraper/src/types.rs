//! Wire types for the gate backend's three endpoints.
//!
//! ## Observed shape from the live gate
//!
//! ### Listing (`POST /api/catalog/product-list`)
//! The interesting payload sits two levels down: `data.products.data` is the
//! product array and `data.products.meta.lastPage` the page count. Any of
//! `data`, `data.products`, or `data.products.meta` may be absent on broken
//! responses — every level is an `Option` here so the crawler can classify
//! such a page as malformed instead of failing deserialization outright.
//!
//! ### Category metadata
//! `data.category.templateId` has been observed both as a string and as a
//! bare number, and `product.code` likewise. Both are modeled as raw
//! [`serde_json::Value`] and stringified via [`json_string`].
//!
//! ### Detail (`POST /api/catalog/product-data`)
//! `data` is absent entirely when the alias is unknown upstream — that is
//! the product-fatal case, not a deserialization error. Gallery entries mix
//! types (`"image"`, `"video"`); only `"image"` entries carry usable URLs,
//! and any of the three size variants may be missing per entry.
//!
//! ### Prices
//! `prices.price` is always a number; `prices.salePrice` is `null` (not
//! omitted) when no sale is active, but `default` covers both spellings.

use serde::Deserialize;

use catex_core::AttributeGroup;

/// Top-level listing response envelope.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub products: Option<ListingProducts>,
    #[serde(default)]
    pub category: Option<ListingCategory>,
}

#[derive(Debug, Deserialize)]
pub struct ListingProducts {
    /// One page worth of raw product entries. Absent on broken responses;
    /// the crawler treats a page without it as malformed, same as missing
    /// pagination metadata.
    #[serde(default)]
    pub data: Option<Vec<ListingProduct>>,
    #[serde(default)]
    pub meta: Option<ListingMeta>,
}

/// A raw product entry from a listing page. Only the catalog code and the
/// detail-page link matter; everything else on the wire is ignored.
#[derive(Debug, Deserialize)]
pub struct ListingProduct {
    /// Catalog code; observed as string or number.
    #[serde(default)]
    pub code: serde_json::Value,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMeta {
    /// Last page of the listing. Later pages may report a different value;
    /// the crawler always trusts the most recent one.
    pub last_page: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingCategory {
    #[serde(default)]
    pub template_id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
}

/// Top-level detail response envelope. `data: None` means the product is
/// gone upstream.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub data: Option<ProductDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    /// Site-relative product page link (e.g. `"/catalog/abc-123.html"`).
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gallery: Vec<GalleryEntry>,
    #[serde(default)]
    pub prices: Prices,
    #[serde(default)]
    pub attributes: Vec<AttributeGroup>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    /// Entry type discriminator; only `"image"` entries are used.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub full_size: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub miniature: Option<String>,
}

impl GalleryEntry {
    /// Best available URL for this entry: full size, then preview, then
    /// thumbnail. `None` when the entry carries no URL at all.
    #[must_use]
    pub fn best_url(&self) -> Option<&str> {
        self.full_size
            .as_deref()
            .or(self.preview.as_deref())
            .or(self.miniature.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prices {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
}

impl Prices {
    /// Sale price when present, list price otherwise.
    #[must_use]
    pub fn effective(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }
}

/// Stringifies a JSON scalar the way the original data uses it as an id:
/// strings pass through, numbers render without quotes, everything else
/// (including `null`) yields `None`.
#[must_use]
pub fn json_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
