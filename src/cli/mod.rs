//! Command-line interface wiring for newslens.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod enrich;
pub mod explore;
pub mod ingest;
pub mod serve;
pub mod sources;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "News article enrichment and exploration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Ingest(args) => ingest::run(args, settings).await,
            Commands::Enrich(args) => enrich::run(args, settings).await,
            Commands::Sources => sources::run(settings).await,
            Commands::Explore(args) => explore::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Enrich raw article files and append them to the store.
    Ingest(ingest::Args),
    /// Enrich a single article body and print the record.
    Enrich(enrich::Args),
    /// List distinct sources present in the store.
    Sources,
    /// Filter stored articles and export exploration artefacts.
    Explore(explore::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}
