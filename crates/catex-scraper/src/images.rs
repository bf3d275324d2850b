//! Image resolver: pulls original-image URLs out of an image-search result
//! page.
//!
//! The search page embeds its application state as HTML-escaped JSON in a
//! `data-state` attribute on the one element whose `id` starts with
//! `ImagesApp`. Inside that state, `initialState.serpList.items.entities` is
//! an object map whose values with an `origUrl` field are the results, in
//! document order.
//!
//! This is the most format-coupled code in the pipeline, so its public
//! contract is deliberately narrow: query in, URL list out, never an error
//! out. Any failure — transport, missing marker element, missing state
//! attribute, unparseable state, missing entity map — degrades to an empty
//! list and a log line, which the enricher treats as "keep the native
//! gallery".

use regex::Regex;
use thiserror::Error;

use crate::client::GateClient;

/// `id` prefix of the element carrying the serialized search state.
const STATE_MARKER_PREFIX: &str = "ImagesApp";

#[derive(Debug, Error)]
pub(crate) enum StateParseError {
    #[error("no element with an id starting with \"{STATE_MARKER_PREFIX}\"")]
    MarkerNotFound,

    #[error("marker element has no data-state attribute")]
    StateAttributeMissing,

    #[error("data-state is not valid JSON: {0}")]
    StateJson(#[from] serde_json::Error),

    #[error("state has no initialState.serpList.items.entities map")]
    EntitiesMissing,
}

/// Resolves up to `count` image URLs for `query` via the gate's image-search
/// passthrough.
///
/// `count == 0` returns an empty list without issuing a request. Failures of
/// any kind also return an empty list; they are logged but never surfaced as
/// run errors.
pub async fn resolve_images(client: &GateClient, query: &str, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let markup = match client.fetch_image_search_page(query).await {
        Ok(markup) => markup,
        Err(e) => {
            tracing::warn!(query, error = %e, "image search fetch failed; keeping native gallery");
            return Vec::new();
        }
    };

    match extract_image_urls(&markup, count) {
        Ok(urls) => urls,
        Err(e) => {
            tracing::debug!(query, error = %e, "image search page did not yield results");
            Vec::new()
        }
    }
}

/// Pure extraction half of [`resolve_images`]: given the result-page markup,
/// returns the first `count` original-image URLs from the embedded state.
pub(crate) fn extract_image_urls(markup: &str, count: usize) -> Result<Vec<String>, StateParseError> {
    let tag_re = Regex::new(&format!(
        r#"(?is)<div\b[^>]*\bid="{STATE_MARKER_PREFIX}[^"]*"[^>]*>"#
    ))
    .expect("valid regex");
    let tag = tag_re
        .find(markup)
        .ok_or(StateParseError::MarkerNotFound)?
        .as_str();

    let state_re = Regex::new(r#"(?is)\bdata-state="([^"]*)""#).expect("valid regex");
    let raw_state = state_re
        .captures(tag)
        .and_then(|c| c.get(1))
        .ok_or(StateParseError::StateAttributeMissing)?
        .as_str();

    let state: serde_json::Value = serde_json::from_str(&unescape_attribute(raw_state))?;

    let entities = state
        .get("initialState")
        .and_then(|v| v.get("serpList"))
        .and_then(|v| v.get("items"))
        .and_then(|v| v.get("entities"))
        .and_then(serde_json::Value::as_object)
        .ok_or(StateParseError::EntitiesMissing)?;

    Ok(entities
        .values()
        .filter_map(|entity| entity.get("origUrl").and_then(serde_json::Value::as_str))
        .take(count)
        .map(str::to_owned)
        .collect())
}

/// Decodes the HTML entities that appear in attribute-embedded JSON.
fn unescape_attribute(raw: &str) -> String {
    raw.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
