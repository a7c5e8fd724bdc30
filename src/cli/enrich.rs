//! CLI entry-point for enriching a single article body.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    nlp::{self, summarize::SummaryOptions, NlpPipelines},
};

/// Args for the `enrich` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Path to a text file holding the article body.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
    /// Article body passed inline.
    #[arg(long)]
    pub text: Option<String>,
    /// Override the sentence-count threshold for the lead strategy.
    #[arg(long)]
    pub threshold: Option<usize>,
    /// Override the number of summary sentences.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let body = match (args.file, args.text) {
        (Some(path), None) => {
            std::fs::read_to_string(&path).with_context(|| format!("read {path:?}"))?
        }
        (None, Some(text)) => text,
        _ => bail!("exactly one of --file or --text is required"),
    };
    let options = SummaryOptions {
        sentence_threshold: args.threshold.unwrap_or(settings.summary_threshold),
        max_sentences: args.limit.unwrap_or(settings.summary_limit),
    };
    let pipelines = NlpPipelines::load();
    let record = nlp::enrich_document(&pipelines, &body, options);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
