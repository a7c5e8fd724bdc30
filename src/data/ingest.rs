//! Bulk ingestion of raw article files into the store.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::{stream, StreamExt};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::data::articles::{Article, ArticleStore, RawArticle};
use crate::nlp::summarize::SummaryOptions;
use crate::nlp::{enrich_document, NlpPipelines};

const CONCURRENT_FILES: usize = 4;

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub scanned: usize,
    pub loaded: usize,
    pub skipped: usize,
    pub inserted: usize,
}

/// Walk `dir` for `*.json` article files, enrich each, and append the batch
/// to the store. A file that fails to read, decode, or date-parse is skipped
/// without aborting the run.
pub async fn ingest_dir(
    dir: &Path,
    pipelines: &NlpPipelines,
    options: SummaryOptions,
    store: &ArticleStore,
) -> Result<IngestReport> {
    let files = article_files(dir);
    let mut report = IngestReport {
        scanned: files.len(),
        ..Default::default()
    };
    info!(dir = %dir.display(), count = files.len(), "scanning article files");

    let results: Vec<(PathBuf, Result<Article>)> = stream::iter(files)
        .map(|path| async move {
            let outcome = load_and_enrich(&path, pipelines, options).await;
            (path, outcome)
        })
        .buffer_unordered(CONCURRENT_FILES)
        .collect()
        .await;

    let mut batch = Vec::new();
    for (path, outcome) in results {
        match outcome {
            Ok(article) => batch.push(article),
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping article file");
                report.skipped += 1;
            }
        }
    }
    report.loaded = batch.len();
    // Completion order varies with the pool; store order should not.
    batch.sort_by(|a, b| a.id.cmp(&b.id));
    report.inserted = store.append_batch(&batch)?;
    info!(
        scanned = report.scanned,
        loaded = report.loaded,
        skipped = report.skipped,
        inserted = report.inserted,
        "ingestion finished"
    );
    Ok(report)
}

fn article_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        })
        .collect();
    files.sort();
    files
}

async fn load_and_enrich(
    path: &Path,
    pipelines: &NlpPipelines,
    options: SummaryOptions,
) -> Result<Article> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {path:?}"))?;
    let raw: RawArticle =
        serde_json::from_str(&text).with_context(|| format!("decode {path:?}"))?;
    let enrichment = enrich_document(pipelines, &raw.body, options);
    Ok(Article::from_raw(raw, enrichment)?)
}
