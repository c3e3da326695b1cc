//! CLI administration tool for click-router.
//!
//! Composes outbound `/r/{token}` links and previews the destination each one
//! resolves to, without needing a running service.
//!
//! # Usage
//!
//! ```bash
//! # Print the public link and resolved destination for campaign tokens
//! cargo run --bin admin -- link c2FtcGxl dGVzdA
//!
//! # Preview destinations for tokens as they will appear on the wire
//! cargo run --bin admin -- resolve abc123 "a%20b"
//!
//! # Load and validate environment configuration
//! cargo run --bin admin -- config check
//! ```
//!
//! # Environment Variables
//!
//! - `DESTINATION_BASE` (required): second-stage landing origin
//! - `PUBLIC_BASE` (`link` command): origin this service is served from
//!
//! # Features
//!
//! - **Link Composition**: tokens are encoded once for the wire, so printed
//!   links resolve exactly as the service will resolve them
//! - **Colored Output**: terminal-friendly formatting using `colored` crate

use click_router::config;
use click_router::routing::{Resolver, RoutingToken};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing click-router.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Compose public links for routing tokens
    Link {
        /// Tokens to compose links for
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Public origin serving this service (defaults to $PUBLIC_BASE)
        #[arg(long)]
        public_base: Option<String>,
    },

    /// Preview the destination a wire token resolves to
    Resolve {
        /// Tokens as they will appear in the request path
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate environment configuration
    Check,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Link {
            tokens,
            public_base,
        } => link(&tokens, public_base),
        Commands::Resolve { tokens } => resolve(&tokens),
        Commands::Config {
            action: ConfigAction::Check,
        } => config_check(),
    }
}

fn load_resolver() -> Result<Resolver> {
    let config = config::load_from_env()?;
    Ok(Resolver::new(&config.destination_base))
}

/// Prints the public `/r/` link and resolved destination for each token.
fn link(tokens: &[String], public_base: Option<String>) -> Result<()> {
    let resolver = load_resolver()?;

    let public_base = public_base
        .or_else(|| std::env::var("PUBLIC_BASE").ok())
        .context("PUBLIC_BASE must be set (or pass --public-base)")?;
    let public_base = public_base.trim_end_matches('/').to_string();

    for raw in tokens {
        let token = RoutingToken::new(raw.as_str()).context("token must not be empty")?;

        // Encode once for the wire; the service forwards the wire form verbatim.
        let wire = token.encoded();
        let destination = resolver.resolve(RoutingToken::new(wire.as_str()).as_ref());

        println!("{}", raw.bold());
        println!("  link:        {}/r/{}", public_base, wire);
        println!("  destination: {}", destination.as_str().green());
    }

    Ok(())
}

/// Prints the destination each wire token resolves to.
fn resolve(tokens: &[String]) -> Result<()> {
    let resolver = load_resolver()?;

    for raw in tokens {
        let token = RoutingToken::new(raw.as_str());
        let target = resolver.resolve(token.as_ref());

        let outcome = if token.is_some() {
            "routed".green()
        } else {
            "fallback".yellow()
        };

        println!("{}  {}  {}", raw.bold(), outcome, target.as_str());
    }

    Ok(())
}

/// Loads and validates configuration, printing a summary.
fn config_check() -> Result<()> {
    let config = config::load_from_env()?;

    println!("{}", "Configuration OK".green().bold());
    println!("  Destination base:     {}", config.destination_base);
    println!("  Listen address:       {}", config.listen_addr);
    println!("  Log level:            {}", config.log_level);
    println!("  Log format:           {}", config.log_format);
    println!("  Click queue capacity: {}", config.click_queue_capacity);

    Ok(())
}
