//! Product enricher: turns a stub into a full product record.

use catex_core::{ProductRecord, ProductStub};

use crate::client::GateClient;
use crate::error::ScrapeError;
use crate::images::resolve_images;

/// Months in the installment plan the source site advertises.
const INSTALLMENT_MONTHS: f64 = 48.0;

/// Fetches full detail for `stub` and assembles a [`ProductRecord`].
///
/// The native gallery keeps `"image"` entries only, each reduced to its best
/// URL variant (full size, then preview, then thumbnail). When
/// `enable_image_search` is set and the image search yields at least one
/// URL, the search results replace the gallery entirely; on an empty or
/// failed search the native gallery stays (that fallback is silent — image
/// search failures are not run errors).
///
/// # Errors
///
/// - [`ScrapeError::MissingDetailPayload`] — the detail response carried no
///   data; the caller drops this product from the output.
/// - Any transport/status/deserialization error from the detail fetch.
pub async fn enrich_product(
    client: &GateClient,
    site_base_url: &str,
    stub: &ProductStub,
    category_name: &str,
    enable_image_search: bool,
) -> Result<ProductRecord, ScrapeError> {
    let response = client.fetch_detail(&stub.alias).await?;
    let Some(detail) = response.data else {
        return Err(ScrapeError::MissingDetailPayload {
            alias: stub.alias.clone(),
        });
    };

    let gallery: Vec<String> = detail
        .gallery
        .iter()
        .filter(|entry| entry.kind == "image")
        .filter_map(|entry| entry.best_url().map(str::to_owned))
        .collect();

    let images = if enable_image_search {
        let found = resolve_images(client, &detail.name, gallery.len()).await;
        if found.is_empty() {
            gallery
        } else {
            found
        }
    } else {
        gallery
    };

    let price = detail.prices.effective();
    #[allow(clippy::cast_possible_truncation)] // prices are far below 2^52
    let monthly_payment = (price / INSTALLMENT_MONTHS).floor() as i64;

    Ok(ProductRecord {
        id: stub.id.clone(),
        alias: stub.alias.clone(),
        category_name: category_name.to_owned(),
        url: format!("{site_base_url}{}", detail.link),
        name: detail.name,
        images,
        price,
        monthly_payment,
        attributes: detail.attributes,
        description: detail.description.unwrap_or_default(),
    })
}
