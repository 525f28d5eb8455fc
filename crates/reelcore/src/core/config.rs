use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the service
/// Port for the web server
/// Read once at startup from the PORT environment variable
/// Default: 3000
pub static WEB_PORT: Lazy<u16> = Lazy::new(|| {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
});

/// Directory served under /static
/// Read from STATIC_DIR environment variable
/// Default: public
pub static STATIC_DIR: Lazy<String> = Lazy::new(|| env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Outbound proxy for provider requests (http://, https:// or socks5://)
/// Read from OUTBOUND_PROXY environment variable
/// The sentinel values "none" and "disabled" turn the proxy off
pub static OUTBOUND_PROXY: Lazy<Option<String>> = Lazy::new(|| env::var("OUTBOUND_PROXY").ok());

/// Returns the outbound proxy URL if one is configured and not disabled.
pub fn proxy_url() -> Option<String> {
    OUTBOUND_PROXY.as_deref().and_then(normalize_proxy)
}

/// Empty strings and the "none"/"disabled" sentinels mean no proxy.
fn normalize_proxy(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "none" || trimmed == "disabled" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Network configuration for outbound provider calls
pub mod network {
    use super::Duration;

    /// Per-provider request cap (in seconds). A provider that has not
    /// answered within this window is treated as failed and the resolver
    /// moves on to the next one.
    pub const REQUEST_TIMEOUT_SECS: u64 = 15;

    /// TCP connect cap (in seconds)
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout duration
    pub fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }

    /// Connect timeout duration
    pub fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }
}
