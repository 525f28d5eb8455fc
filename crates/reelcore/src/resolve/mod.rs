//! Ordered-fallback resolution over external provider adapters.
//!
//! Provides the `VideoProvider` trait for implementing pluggable provider
//! backends and the `Resolver` that tries them in a fixed priority order.
//! New providers are added by implementing `VideoProvider` and inserting
//! them into the chain in `Resolver::new`.
//!
//! Built-in providers, in chain order:
//! - `Snapinsta` — form-encoded POST, JSON envelope with an HTML fragment
//! - `Downloadgram` — JSON POST, typed media list
//! - `Saveinsta` — query-string GET, raw HTML

pub mod fault;
pub mod providers;

pub use fault::{FaultKind, ProviderAttempt, ProviderFault, ResolveError};

use crate::core::config;
use crate::core::error::AppError;
use crate::core::validation;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Trait for provider adapter implementations.
///
/// Each provider knows how to call one external scraping service and
/// extract a direct video URL from its response shape. One outbound call
/// per invocation, no retries — retrying is the chain's job, by moving on
/// to the next provider.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Stable name of this provider (used in logs and the failure trail).
    fn name(&self) -> &'static str;

    /// Resolve an Instagram content URL to a direct video file URL.
    async fn resolve(&self, url: &Url) -> Result<String, ProviderFault>;
}

/// Endpoint and client settings for the provider chain.
///
/// `Default` points at the real services; tests substitute mock server
/// URIs and a short timeout without touching the network.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub snapinsta_endpoint: String,
    pub downloadgram_endpoint: String,
    pub saveinsta_endpoint: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub proxy: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            snapinsta_endpoint: providers::snapinsta::ENDPOINT.to_string(),
            downloadgram_endpoint: providers::downloadgram::ENDPOINT.to_string(),
            saveinsta_endpoint: providers::saveinsta::ENDPOINT.to_string(),
            request_timeout: config::network::request_timeout(),
            connect_timeout: config::network::connect_timeout(),
            proxy: None,
        }
    }
}

impl ResolverConfig {
    /// Layer environment overrides on the defaults.
    ///
    /// `SNAPINSTA_ENDPOINT` / `DOWNLOADGRAM_ENDPOINT` / `SAVEINSTA_ENDPOINT`
    /// replace the hardcoded service URLs; `OUTBOUND_PROXY` routes the
    /// provider calls through a proxy.
    pub fn from_env() -> Self {
        let mut resolved = Self::default();
        if let Ok(endpoint) = std::env::var("SNAPINSTA_ENDPOINT") {
            resolved.snapinsta_endpoint = endpoint;
        }
        if let Ok(endpoint) = std::env::var("DOWNLOADGRAM_ENDPOINT") {
            resolved.downloadgram_endpoint = endpoint;
        }
        if let Ok(endpoint) = std::env::var("SAVEINSTA_ENDPOINT") {
            resolved.saveinsta_endpoint = endpoint;
        }
        resolved.proxy = config::proxy_url();
        resolved
    }
}

/// A successful resolution, tagged with the provider that produced it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolvedVideo {
    pub video_url: String,
    pub provider: &'static str,
}

/// Fallback resolver: tries providers in fixed order, returns the first
/// success, aggregates the faults into one `ResolveError` if all fail.
///
/// Holds no per-request state — a single instance is shared across
/// concurrent requests behind an `Arc`.
pub struct Resolver {
    providers: Vec<Arc<dyn VideoProvider>>,
}

impl Resolver {
    /// Create the resolver with the built-in provider chain.
    pub fn new(resolver_config: &ResolverConfig) -> Self {
        Self::with_providers(vec![
            Arc::new(providers::Snapinsta::new(resolver_config)),
            Arc::new(providers::Downloadgram::new(resolver_config)),
            Arc::new(providers::Saveinsta::new(resolver_config)),
        ])
    }

    /// Create a resolver over an explicit provider list (tests).
    pub fn with_providers(providers: Vec<Arc<dyn VideoProvider>>) -> Self {
        Self { providers }
    }

    /// Try each provider in order, returning the first success.
    ///
    /// The URL is expected to have passed `validate_instagram_url` already.
    /// Later providers are never consulted once one succeeds; a failed
    /// provider is logged and never retried within the same call.
    pub async fn resolve(&self, url: &Url) -> Result<ResolvedVideo, ResolveError> {
        let mut attempts: Vec<ProviderAttempt> = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            match provider.resolve(url).await {
                Ok(video_url) => {
                    log::info!("Resolved via {}: {}", provider.name(), video_url);
                    return Ok(ResolvedVideo {
                        video_url,
                        provider: provider.name(),
                    });
                }
                Err(fault) => {
                    log::warn!(
                        "{} failed ({}), trying next method: {}",
                        provider.name(),
                        fault.kind.as_str(),
                        fault
                    );
                    attempts.push(ProviderAttempt {
                        provider: provider.name(),
                        fault,
                    });
                }
            }
        }

        log::error!("All providers exhausted for {}", url);
        for attempt in &attempts {
            log::error!("  {}: [{}] {}", attempt.provider, attempt.fault.kind.as_str(), attempt.fault);
        }
        Err(ResolveError::Exhausted { attempts })
    }

    /// Validate a raw string and resolve it. Convenience entry point for
    /// the CLI; the web handler validates separately to render distinct
    /// messages for the two rejection cases.
    pub async fn resolve_str(&self, raw_url: &str) -> Result<ResolvedVideo, AppError> {
        let url = validation::validate_instagram_url(raw_url)?;
        Ok(self.resolve(&url).await?)
    }
}
