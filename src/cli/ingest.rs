//! CLI entry-point for bulk article ingestion.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    config::Settings,
    data::{articles::ArticleStore, ingest},
    nlp::{summarize::SummaryOptions, NlpPipelines},
};

/// Args for the `ingest` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Directory holding raw article JSON files; defaults to ARTICLES_DIR.
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Override the sentence-count threshold for the lead strategy.
    #[arg(long)]
    pub threshold: Option<usize>,
    /// Override the number of summary sentences.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let dir = args.dir.unwrap_or_else(|| settings.articles_dir.clone());
    let options = SummaryOptions {
        sentence_threshold: args.threshold.unwrap_or(settings.summary_threshold),
        max_sentences: args.limit.unwrap_or(settings.summary_limit),
    };
    let pipelines = NlpPipelines::load();
    let store = ArticleStore::open(&settings);
    let report = ingest::ingest_dir(&dir, &pipelines, options, &store).await?;
    info!(
        scanned = report.scanned,
        inserted = report.inserted,
        "ingest complete"
    );
    println!(
        "scanned {} files: {} loaded, {} skipped, {} inserted",
        report.scanned, report.loaded, report.skipped, report.inserted
    );
    Ok(())
}
