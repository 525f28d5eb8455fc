//! Reelcore — core library for the Reelgrab Instagram video resolver.
//!
//! Provides everything below the web surface: the provider adapters that
//! talk to the external scraping services, the ordered fallback resolver,
//! the structured fault taxonomy, and input validation.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, and URL validation
//! - `resolve`: the `VideoProvider` trait, the provider adapters, and the
//!   fallback `Resolver`

pub mod core;
pub mod resolve;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use crate::resolve::{ResolvedVideo, Resolver, ResolverConfig, ResolveError};
