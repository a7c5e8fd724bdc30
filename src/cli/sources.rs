//! CLI entry-point for listing stored article sources.

use anyhow::Result;
use indexmap::IndexMap;
use tracing::{info, instrument};

use crate::{config::Settings, data::articles::ArticleStore};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let store = ArticleStore::open(&settings);
    let articles = store.load_all()?;
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for article in &articles {
        *counts.entry(article.source.clone()).or_insert(0) += 1;
    }
    counts.sort_keys();
    info!(
        total = articles.len(),
        sources = counts.len(),
        "loaded stored articles"
    );
    for (source, count) in &counts {
        println!("{source}\t{count}");
    }
    Ok(())
}
