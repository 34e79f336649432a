//! CLI module for http-replay
//!
//! Provides the demo subcommand:
//! - `fetch`: request ipsum text through the caching pipeline

pub mod fetch;

use clap::{Parser, Subcommand};

/// http-replay - Transparent response cache for outbound HTTP clients
#[derive(Parser)]
#[command(name = "http-replay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch ipsum text, repeating the request to exercise the cache
    Fetch(fetch::FetchArgs),
}
