//! Provider adapters, one per external scraping service.
//!
//! Each adapter speaks one service's request/response dialect: the
//! endpoint, the body encoding, the browser-mimicking header set, and the
//! shape the video link hides in. The services are unversioned external
//! contracts — parsing is best-effort and any surprise is reported as a
//! structured `ProviderFault` for the chain to fall through.

pub mod downloadgram;
pub mod saveinsta;
pub mod snapinsta;

pub use downloadgram::Downloadgram;
pub use saveinsta::Saveinsta;
pub use snapinsta::Snapinsta;

use crate::resolve::ResolverConfig;

/// Browser User-Agent sent on every provider call. The services reject
/// obviously non-browser clients.
pub(crate) const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the shared reqwest client shape: browser UA, request/connect
/// caps from the config, optional proxy.
pub(crate) fn build_client(resolver_config: &ResolverConfig) -> reqwest::Client {
    let mut client_builder = reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(resolver_config.request_timeout)
        .connect_timeout(resolver_config.connect_timeout);

    if let Some(ref proxy_url) = resolver_config.proxy {
        match reqwest::Proxy::all(proxy_url) {
            Ok(proxy) => {
                client_builder = client_builder.proxy(proxy);
            }
            Err(e) => {
                log::warn!("Failed to configure outbound proxy, going direct: {}", e);
            }
        }
    }

    client_builder
        .build()
        .expect("provider HTTP client build should succeed")
}

/// Instagram error strings that show up verbatim inside scraper response
/// bodies when the target is login-gated.
pub(crate) fn private_account_hint(text: &str) -> bool {
    ["private", "login_required", "checkpoint_required"]
        .iter()
        .any(|hint| text.contains(hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_account_hint() {
        assert!(private_account_hint("this post is private"));
        assert!(private_account_hint(r#"{"message":"login_required"}"#));
        assert!(private_account_hint("checkpoint_required"));
        assert!(!private_account_hint("<html>all good</html>"));
    }
}
