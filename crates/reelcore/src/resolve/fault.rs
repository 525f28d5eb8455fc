//! Structured fault taxonomy for provider failures.
//!
//! Every failure is classified at the point of detection (inside the
//! adapter that observed it) rather than reconstructed later from error
//! message text. The aggregate `ResolveError` keeps every per-provider
//! attempt so a failed resolution is still debuggable from the log.

use thiserror::Error;

/// Why a single provider attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The provider did not answer within the request cap
    Timeout,
    /// Connection-level failure (DNS, refused, reset)
    Network,
    /// The provider or Instagram refused the request (403/429)
    Blocked,
    /// The post does not exist or has been deleted (404)
    NotFound,
    /// The provider reported the account as private / login-gated
    PrivateAccount,
    /// The response parsed but contained no video link
    NoVideo,
    /// The response body was not in the expected shape
    Malformed,
    /// Catch-all for uncategorized failures
    Unknown,
}

impl FaultKind {
    /// Returns subcategory for log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::Timeout => "timeout",
            FaultKind::Network => "network",
            FaultKind::Blocked => "blocked",
            FaultKind::NotFound => "not_found",
            FaultKind::PrivateAccount => "private_account",
            FaultKind::NoVideo => "no_video",
            FaultKind::Malformed => "malformed",
            FaultKind::Unknown => "unknown",
        }
    }

    /// Classification priority when picking one kind out of several
    /// attempts for the user-facing message. Higher wins: a provider that
    /// positively identified a private account knows more than one that
    /// merely timed out.
    fn specificity(self) -> u8 {
        match self {
            FaultKind::PrivateAccount => 7,
            FaultKind::NotFound => 6,
            FaultKind::Blocked => 5,
            FaultKind::Timeout => 4,
            FaultKind::Network => 3,
            FaultKind::NoVideo => 2,
            FaultKind::Malformed => 1,
            FaultKind::Unknown => 0,
        }
    }
}

/// A single provider failure: the kind plus the underlying detail.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderFault {
    pub kind: FaultKind,
    pub message: String,
}

impl ProviderFault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classify a transport-level reqwest failure.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            FaultKind::Timeout
        } else if err.is_connect() {
            FaultKind::Network
        } else {
            FaultKind::Unknown
        };
        Self::new(kind, err.to_string())
    }

    /// Classify a non-2xx HTTP status from a provider.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let kind = match status.as_u16() {
            403 | 429 => FaultKind::Blocked,
            404 => FaultKind::NotFound,
            _ => FaultKind::Unknown,
        };
        Self::new(kind, format!("HTTP status {}", status))
    }
}

/// One entry in the resolver's failure trail.
#[derive(Debug, Clone)]
pub struct ProviderAttempt {
    pub provider: &'static str,
    pub fault: ProviderFault,
}

/// Aggregate failure after the whole provider chain has been tried.
///
/// Display is the single fixed user-facing summary; the individual
/// attempts stay attached for logging and classification.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("All download methods failed. Instagram may be blocking requests or the post is private/deleted.")]
    Exhausted { attempts: Vec<ProviderAttempt> },
}

impl ResolveError {
    /// The per-provider failure trail, in chain order.
    pub fn attempts(&self) -> &[ProviderAttempt] {
        match self {
            ResolveError::Exhausted { attempts } => attempts,
        }
    }

    /// The most specific fault kind observed across all attempts.
    pub fn dominant_kind(&self) -> FaultKind {
        self.attempts()
            .iter()
            .map(|a| a.fault.kind)
            .max_by_key(|k| k.specificity())
            .unwrap_or(FaultKind::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(provider: &'static str, kind: FaultKind) -> ProviderAttempt {
        ProviderAttempt {
            provider,
            fault: ProviderFault::new(kind, "detail"),
        }
    }

    #[test]
    fn test_fault_kind_as_str() {
        assert_eq!(FaultKind::Timeout.as_str(), "timeout");
        assert_eq!(FaultKind::PrivateAccount.as_str(), "private_account");
        assert_eq!(FaultKind::NoVideo.as_str(), "no_video");
    }

    #[test]
    fn test_from_status_mapping() {
        use reqwest::StatusCode;
        assert_eq!(ProviderFault::from_status(StatusCode::FORBIDDEN).kind, FaultKind::Blocked);
        assert_eq!(
            ProviderFault::from_status(StatusCode::TOO_MANY_REQUESTS).kind,
            FaultKind::Blocked
        );
        assert_eq!(ProviderFault::from_status(StatusCode::NOT_FOUND).kind, FaultKind::NotFound);
        assert_eq!(
            ProviderFault::from_status(StatusCode::INTERNAL_SERVER_ERROR).kind,
            FaultKind::Unknown
        );
    }

    #[test]
    fn test_dominant_kind_prefers_specific_faults() {
        let err = ResolveError::Exhausted {
            attempts: vec![
                attempt("snapinsta", FaultKind::Timeout),
                attempt("downloadgram", FaultKind::PrivateAccount),
                attempt("saveinsta", FaultKind::NoVideo),
            ],
        };
        assert_eq!(err.dominant_kind(), FaultKind::PrivateAccount);
    }

    #[test]
    fn test_dominant_kind_of_empty_trail_is_unknown() {
        let err = ResolveError::Exhausted { attempts: vec![] };
        assert_eq!(err.dominant_kind(), FaultKind::Unknown);
    }

    #[test]
    fn test_exhausted_display_is_fixed() {
        let err = ResolveError::Exhausted {
            attempts: vec![attempt("snapinsta", FaultKind::Timeout)],
        };
        assert_eq!(
            err.to_string(),
            "All download methods failed. Instagram may be blocking requests or the post is private/deleted."
        );
    }
}
