//! Snapinsta adapter — form-encoded POST returning JSON with an HTML fragment.
//!
//! The service answers `POST /api/ajaxSearch` with a JSON envelope whose
//! `data` field holds a rendered HTML fragment; the download links are
//! `a.abutton` anchors inside it. The first anchor with an `.mp4` href is
//! the highest-quality video variant.

use crate::resolve::fault::{FaultKind, ProviderFault};
use crate::resolve::providers::{build_client, private_account_hint};
use crate::resolve::{ResolverConfig, VideoProvider};
use async_trait::async_trait;
use select::document::Document;
use select::predicate::{Class, Name, Predicate};
use url::Url;

/// Production endpoint.
pub const ENDPOINT: &str = "https://snapinsta.app/api/ajaxSearch";

pub struct Snapinsta {
    client: reqwest::Client,
    endpoint: String,
}

impl Snapinsta {
    pub fn new(resolver_config: &ResolverConfig) -> Self {
        Self {
            client: build_client(resolver_config),
            endpoint: resolver_config.snapinsta_endpoint.clone(),
        }
    }

    /// Pull the first `.mp4` anchor out of the HTML fragment.
    fn extract_download_link(fragment: &str) -> Option<String> {
        let document = Document::from(fragment);
        document
            .find(Name("a").and(Class("abutton")))
            .filter_map(|node| node.attr("href"))
            .find(|href| href.contains(".mp4"))
            .map(str::to_string)
    }
}

#[async_trait]
impl VideoProvider for Snapinsta {
    fn name(&self) -> &'static str {
        "snapinsta"
    }

    async fn resolve(&self, url: &Url) -> Result<String, ProviderFault> {
        let params = [("q", url.as_str()), ("t", "media"), ("lang", "en")];
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "*/*")
            .header("Origin", "https://snapinsta.app")
            .header("Referer", "https://snapinsta.app/")
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderFault::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderFault::from_status(status));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderFault::new(FaultKind::Malformed, format!("non-JSON response: {}", e)))?;

        let fragment = body
            .get("data")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ProviderFault::new(FaultKind::Malformed, "response has no `data` fragment"))?;

        match Self::extract_download_link(fragment) {
            Some(link) => Ok(link),
            None if private_account_hint(fragment) => Err(ProviderFault::new(
                FaultKind::PrivateAccount,
                "response reports login-gated content",
            )),
            None => Err(ProviderFault::new(FaultKind::NoVideo, "no .mp4 link in response fragment")),
        }
    }
}
