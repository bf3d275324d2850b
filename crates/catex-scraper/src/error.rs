use thiserror::Error;

/// Errors produced by the gate client and the pipeline stages built on it.
///
/// None of these ever escape a run: the crawler converts them into a
/// category-level stop, the enricher into a per-product skip, and the image
/// resolver into an empty result. They exist as a typed taxonomy so those
/// call sites can tell transport failures from malformed payloads.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Listing page arrived without a product array or pagination metadata.
    /// Category-fatal: pagination for that link stops, collected pages stay.
    #[error("listing response for {link} page {page} is missing products or pagination metadata")]
    MalformedListing { link: String, page: u32 },

    /// Detail response arrived without a data payload. Product-fatal: the
    /// product is dropped from the output.
    #[error("detail response for alias \"{alias}\" has no data payload")]
    MissingDetailPayload { alias: String },

    #[error("invalid gate URL \"{url}\": {reason}")]
    InvalidGateUrl { url: String, reason: String },
}
