//! Downloadgram adapter — JSON POST returning a typed media list.
//!
//! The service answers `POST /wp-json/aio-dl/video-data/` with JSON
//! containing a `medias` array; each record carries a `videoAvailable`
//! flag. The first available video record wins.

use crate::resolve::fault::{FaultKind, ProviderFault};
use crate::resolve::providers::{build_client, private_account_hint};
use crate::resolve::{ResolverConfig, VideoProvider};
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Production endpoint.
pub const ENDPOINT: &str = "https://downloadgram.org/wp-json/aio-dl/video-data/";

pub struct Downloadgram {
    client: reqwest::Client,
    endpoint: String,
}

impl Downloadgram {
    pub fn new(resolver_config: &ResolverConfig) -> Self {
        Self {
            client: build_client(resolver_config),
            endpoint: resolver_config.downloadgram_endpoint.clone(),
        }
    }

    /// First media record flagged video-available, with a non-empty URL.
    fn extract_video_url(body: &Value) -> Option<String> {
        body.get("medias")?
            .as_array()?
            .iter()
            .find(|media| {
                media
                    .get("videoAvailable")
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            })
            .and_then(|media| media.get("url"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(String::from)
    }
}

#[async_trait]
impl VideoProvider for Downloadgram {
    fn name(&self) -> &'static str {
        "downloadgram"
    }

    async fn resolve(&self, url: &Url) -> Result<String, ProviderFault> {
        let payload = serde_json::json!({ "url": url.as_str() });
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Origin", "https://downloadgram.org")
            .header("Referer", "https://downloadgram.org/")
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProviderFault::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderFault::from_status(status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderFault::new(FaultKind::Malformed, format!("non-JSON response: {}", e)))?;

        if let Some(video_url) = Self::extract_video_url(&body) {
            return Ok(video_url);
        }

        // The service folds Instagram-side refusals into a `message` field.
        if let Some(message) = body.get("message").and_then(Value::as_str) {
            if private_account_hint(message) {
                return Err(ProviderFault::new(FaultKind::PrivateAccount, message.to_string()));
            }
        }

        if body.get("medias").and_then(Value::as_array).is_some() {
            Err(ProviderFault::new(FaultKind::NoVideo, "no video-available media record"))
        } else {
            Err(ProviderFault::new(FaultKind::Malformed, "response has no `medias` array"))
        }
    }
}
