//! Saveinsta adapter — query-string GET returning raw HTML.
//!
//! The service answers `GET /core/ajax.php?url=<encoded>` with a rendered
//! HTML page; the download links sit inside `.download-items__btn`
//! containers. The first anchor with an `.mp4` href wins.

use crate::resolve::fault::{FaultKind, ProviderFault};
use crate::resolve::providers::{build_client, private_account_hint};
use crate::resolve::{ResolverConfig, VideoProvider};
use async_trait::async_trait;
use select::document::Document;
use select::predicate::{Class, Name, Predicate};
use url::Url;

/// Production endpoint.
pub const ENDPOINT: &str = "https://saveinsta.io/core/ajax.php";

pub struct Saveinsta {
    client: reqwest::Client,
    endpoint: String,
}

impl Saveinsta {
    pub fn new(resolver_config: &ResolverConfig) -> Self {
        Self {
            client: build_client(resolver_config),
            endpoint: resolver_config.saveinsta_endpoint.clone(),
        }
    }

    /// First `.mp4` anchor inside a download-items button container.
    fn extract_download_link(html: &str) -> Option<String> {
        let document = Document::from(html);
        document
            .find(Class("download-items__btn").descendant(Name("a")))
            .filter_map(|node| node.attr("href"))
            .find(|href| href.contains(".mp4"))
            .map(str::to_string)
    }
}

#[async_trait]
impl VideoProvider for Saveinsta {
    fn name(&self) -> &'static str {
        "saveinsta"
    }

    async fn resolve(&self, url: &Url) -> Result<String, ProviderFault> {
        let request_url = format!("{}?url={}", self.endpoint, urlencoding::encode(url.as_str()));
        let response = self
            .client
            .get(&request_url)
            .header("Accept", "application/json, text/javascript, */*; q=0.01")
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Referer", "https://saveinsta.io/")
            .send()
            .await
            .map_err(|e| ProviderFault::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderFault::from_status(status));
        }

        let body = response.text().await.map_err(|e| ProviderFault::from_reqwest(&e))?;

        match Self::extract_download_link(&body) {
            Some(link) => Ok(link),
            None if private_account_hint(&body) => Err(ProviderFault::new(
                FaultKind::PrivateAccount,
                "response reports login-gated content",
            )),
            None => Err(ProviderFault::new(FaultKind::NoVideo, "no .mp4 link in response page")),
        }
    }
}
