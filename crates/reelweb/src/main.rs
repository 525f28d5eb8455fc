use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;

use reelcore::core::{config, init_logger, log_provider_configuration};
use reelcore::resolve::{Resolver, ResolverConfig};
use reelgrab::cli::{Cli, Commands};
use reelgrab::web;

/// Main entry point for the resolver service.
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, socket bind) or if
/// a one-shot `resolve` run fails.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any config
    // statics are read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Serve { port }) => run_server(port).await,
        Some(Commands::Resolve { url, json }) => run_resolve(&url, json).await,
        None => {
            // No command specified - default to serving
            run_server(None).await
        }
    }
}

/// Run the web server until the process is stopped.
async fn run_server(port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(*config::WEB_PORT);
    let resolver_config = ResolverConfig::from_env();
    log_provider_configuration(&resolver_config);

    let resolver = Arc::new(Resolver::new(&resolver_config));
    web::start_web_server(port, resolver).await
}

/// One-shot resolution for scripting: print the video URL (or a JSON
/// record with the winning provider) to stdout.
async fn run_resolve(url: &str, json: bool) -> Result<()> {
    let resolver = Resolver::new(&ResolverConfig::from_env());
    let resolved = resolver.resolve_str(url).await?;

    if json {
        println!("{}", serde_json::to_string(&resolved)?);
    } else {
        println!("{}", resolved.video_url);
    }
    Ok(())
}
