//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Provider configuration logging at startup

use anyhow::Result;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

use crate::core::config;
use crate::resolve::ResolverConfig;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the provider chain configuration at application startup
///
/// The three endpoints are unversioned external contracts that change
/// without notice, so having them in the startup log makes "which endpoint
/// was live when this broke" answerable from the log file alone.
pub fn log_provider_configuration(resolver_config: &ResolverConfig) {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Provider chain configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("  1. snapinsta     {}", resolver_config.snapinsta_endpoint);
    log::info!("  2. downloadgram  {}", resolver_config.downloadgram_endpoint);
    log::info!("  3. saveinsta     {}", resolver_config.saveinsta_endpoint);
    log::info!(
        "  request cap {}s, connect cap {}s",
        resolver_config.request_timeout.as_secs(),
        resolver_config.connect_timeout.as_secs()
    );

    match config::proxy_url() {
        Some(proxy) => log::info!("  outbound proxy: {}", proxy),
        None => log::info!("  outbound proxy: disabled"),
    }
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
