//! HTTP client for the gate backend that proxies the source catalog.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::error::ScrapeError;
use crate::types::{DetailResponse, ListingResponse};

/// Client for the three gate endpoints: category listing pages, full product
/// detail, and the image-search passthrough.
///
/// Owns one configured `reqwest::Client` (timeouts, user agent) for the
/// whole run. Non-2xx statuses and malformed JSON become typed
/// [`ScrapeError`]s; classifying and absorbing them is the callers' job —
/// this layer never skips or degrades on its own.
pub struct GateClient {
    client: Client,
    gate_base_url: String,
}

impl GateClient {
    /// Creates a `GateClient` for the gate at `gate_base_url`.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::InvalidGateUrl`] if `gate_base_url` does not parse
    ///   as an absolute URL.
    /// - [`ScrapeError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(gate_base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let gate_base_url = gate_base_url.trim_end_matches('/').to_owned();
        reqwest::Url::parse(&gate_base_url).map_err(|e| ScrapeError::InvalidGateUrl {
            url: gate_base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            gate_base_url,
        })
    }

    /// Creates a `GateClient` from loaded application config.
    ///
    /// # Errors
    ///
    /// Same as [`GateClient::new`].
    pub fn from_config(config: &catex_core::AppConfig) -> Result<Self, ScrapeError> {
        Self::new(
            &config.gate_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches one listing page for a category link.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] — non-2xx from the gate.
    /// - [`ScrapeError::Http`] — network or TLS failure.
    /// - [`ScrapeError::Deserialize`] — body is not valid JSON.
    pub async fn fetch_listing(&self, link: &str, page: u32) -> Result<ListingResponse, ScrapeError> {
        let url = self.listing_url();
        let body = serde_json::json!({ "url": link, "page": page });
        let text = self.post_for_text(&url, &body).await?;
        serde_json::from_str(&text).map_err(|e| ScrapeError::Deserialize {
            context: format!("listing page {page} for {link}"),
            source: e,
        })
    }

    /// Fetches full detail for one product alias.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`GateClient::fetch_listing`]. An absent `data`
    /// payload is NOT an error at this layer — the enricher checks for it.
    pub async fn fetch_detail(&self, alias: &str) -> Result<DetailResponse, ScrapeError> {
        let url = self.detail_url();
        let body = serde_json::json!({ "alias": alias });
        let text = self.post_for_text(&url, &body).await?;
        serde_json::from_str(&text).map_err(|e| ScrapeError::Deserialize {
            context: format!("detail for alias \"{alias}\""),
            source: e,
        })
    }

    /// Fetches one image-search result page as raw markup.
    ///
    /// The gate rate-limits this endpoint upstream (about two seconds per
    /// call); no pacing happens here.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] — non-2xx from the gate.
    /// - [`ScrapeError::Http`] — network or TLS failure.
    pub async fn fetch_image_search_page(&self, query: &str) -> Result<String, ScrapeError> {
        let url = self.image_search_url(query);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/html")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }

    /// POSTs `body` as JSON and returns the response body on 2xx.
    async fn post_for_text(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<String, ScrapeError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }

    fn listing_url(&self) -> String {
        format!("{}/api/catalog/product-list", self.gate_base_url)
    }

    fn detail_url(&self) -> String {
        format!("{}/api/catalog/product-data", self.gate_base_url)
    }

    fn image_search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!(
            "{}/api/catalog/product-images?text={encoded}",
            self.gate_base_url
        )
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
