//! Instagram URL validation
//!
//! Whitelist-based validation for user-submitted URLs:
//! - Only HTTP/HTTPS schemes
//! - Only instagram.com hosts (www. and m. subdomains included)
//! - Only content paths (post, reel, IGTV) with a well-formed shortcode
//!
//! Profile URLs, stories, and anything else on the instagram.com domain are
//! rejected — the providers can only resolve shortcode-addressed content.

use thiserror::Error;
use url::Url;

/// Path segments that address shortcode content.
const CONTENT_KINDS: &[&str] = &["p", "reel", "reels", "tv"];

/// Validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Empty or whitespace-only input
    #[error("Empty URL")]
    Empty,

    /// Invalid URL format or non-Instagram domain
    #[error("Invalid Instagram URL: {0}")]
    InvalidUrl(String),
}

/// Validates that a string is an Instagram post/reel/IGTV URL.
///
/// # Examples
/// ```
/// use reelcore::core::validation::validate_instagram_url;
///
/// // Valid URLs
/// assert!(validate_instagram_url("https://www.instagram.com/p/CxyzAb12345").is_ok());
/// assert!(validate_instagram_url("https://instagram.com/reel/CxyzAb12345/").is_ok());
/// assert!(validate_instagram_url("http://instagram.com/tv/CxyzAb12345").is_ok());
///
/// // Invalid URLs
/// assert!(validate_instagram_url("https://instagram.com/someuser").is_err());
/// assert!(validate_instagram_url("https://evil.com/p/CxyzAb12345").is_err());
/// assert!(validate_instagram_url("not a url").is_err());
/// ```
pub fn validate_instagram_url(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let parsed = Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl(trimmed.to_string()))?;

    // Only HTTP and HTTPS are allowed
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::InvalidUrl(format!(
            "{} (invalid scheme: {})",
            trimmed,
            parsed.scheme()
        )));
    }

    // Check host is an Instagram domain
    let host = parsed
        .host_str()
        .ok_or_else(|| ValidationError::InvalidUrl(format!("{} (no host)", trimmed)))?;

    let is_instagram = host == "instagram.com" || host == "www.instagram.com" || host == "m.instagram.com";
    if !is_instagram {
        return Err(ValidationError::InvalidUrl(format!(
            "{} (not an Instagram domain: {})",
            trimmed, host
        )));
    }

    // Path must address shortcode content
    if extract_shortcode(&parsed).is_none() {
        return Err(ValidationError::InvalidUrl(format!("{} (not a content URL)", trimmed)));
    }

    Ok(parsed)
}

/// Extract the shortcode from an Instagram content URL.
///
/// Supports:
/// - `/p/<code>/`, `/reel/<code>/`, `/reels/<code>/`, `/tv/<code>/`
/// - `/<username>/p/<code>/`, `/<username>/reel/<code>/` (with username prefix)
pub fn extract_shortcode(url: &Url) -> Option<String> {
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    // Format: /reel/<code>/ (2 segments)
    if segments.len() >= 2 && CONTENT_KINDS.contains(&segments[0]) && is_shortcode(segments[1]) {
        return Some(segments[1].to_string());
    }
    // Format: /<username>/reel/<code>/ (3 segments)
    if segments.len() >= 3 && CONTENT_KINDS.contains(&segments[1]) && is_shortcode(segments[2]) {
        return Some(segments[2].to_string());
    }
    None
}

/// Shortcodes are base64url-ish: letters, digits, `_`, `-`.
fn is_shortcode(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
