//! Article records and the JSONL-backed document store.

use std::{
    collections::{BTreeSet, HashSet},
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Settings;
use crate::nlp::ner::EntityLabel;
use crate::nlp::EnrichmentRecord;

pub const STORE_FILE: &str = "articles.jsonl";

/// Article fields as they arrive from upstream feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub id: String,
    pub title: String,
    pub body: String,
    pub publish_date: String,
    pub source: String,
}

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("malformed publish date {value:?} for article {id}")]
    MalformedDate { id: String, value: String },
}

/// Stored article: the raw fields, derived date parts, and the enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub body: String,
    pub publish_date: String,
    pub source: String,
    pub word_count: usize,
    pub publish_year: i32,
    pub publish_month: u32,
    #[serde(flatten)]
    pub enrichment: EnrichmentRecord,
}

impl Article {
    /// Combine a raw article with its enrichment output, deriving the word
    /// count and the date parts. Dates must start with `YYYY-MM-DD`.
    pub fn from_raw(raw: RawArticle, enrichment: EnrichmentRecord) -> Result<Self, ArticleError> {
        let parsed = NaiveDate::parse_from_str(date_part(&raw.publish_date), "%Y-%m-%d")
            .map_err(|_| ArticleError::MalformedDate {
                id: raw.id.clone(),
                value: raw.publish_date.clone(),
            })?;
        let word_count = raw.body.split_whitespace().count();
        Ok(Self {
            id: raw.id,
            title: raw.title,
            body: raw.body,
            publish_date: raw.publish_date,
            source: raw.source,
            word_count,
            publish_year: parsed.year(),
            publish_month: parsed.month(),
            enrichment,
        })
    }

    pub fn mentions_entity(&self, label: EntityLabel, entity: &str) -> bool {
        self.enrichment
            .entities
            .get(&label)
            .is_some_and(|set| set.iter().any(|surface| surface.eq_ignore_ascii_case(entity)))
    }
}

fn date_part(value: &str) -> &str {
    value.get(..10).unwrap_or(value)
}

/// Append-only JSONL store of enriched articles.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    path: PathBuf,
}

impl ArticleStore {
    /// Store file under the configured data directory.
    pub fn open(settings: &Settings) -> Self {
        Self {
            path: settings.join_data(STORE_FILE),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored articles. A missing file reads as an empty store and
    /// undecodable lines are skipped with a warning.
    pub fn load_all(&self) -> Result<Vec<Article>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).with_context(|| format!("open {:?}", self.path))?;
        let reader = BufReader::new(file);
        let mut articles = Vec::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("read {:?}", self.path))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Article>(&line) {
                Ok(article) => articles.push(article),
                Err(err) => warn!(line = number + 1, %err, "skipping undecodable store line"),
            }
        }
        Ok(articles)
    }

    /// Append articles whose ids are not yet stored, returning how many were
    /// written. Duplicates inside `articles` are also collapsed.
    pub fn append_batch(&self, articles: &[Article]) -> Result<usize> {
        let mut seen: HashSet<String> = self
            .load_all()?
            .into_iter()
            .map(|article| article.id)
            .collect();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {:?}", parent))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {:?}", self.path))?;
        let mut written = 0usize;
        for article in articles {
            if !seen.insert(article.id.clone()) {
                warn!(id = %article.id, "skipping already stored article");
                continue;
            }
            let line = serde_json::to_string(article)?;
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
            written += 1;
        }
        info!(path = %self.path.display(), count = written, "appended articles");
        Ok(written)
    }
}

pub fn by_id<'a>(articles: &'a [Article], id: &str) -> Option<&'a Article> {
    articles.iter().find(|article| article.id == id)
}

pub fn by_source<'a>(articles: &'a [Article], source: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| article.source.eq_ignore_ascii_case(source))
        .collect()
}

pub fn by_entity<'a>(
    articles: &'a [Article],
    label: EntityLabel,
    entity: &str,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| article.mentions_entity(label, entity))
        .collect()
}

pub fn by_publish_year(articles: &[Article], year: i32) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| article.publish_year == year)
        .collect()
}

pub fn by_publish_year_month(articles: &[Article], year: i32, month: u32) -> Vec<&Article> {
    articles
        .iter()
        .filter(|article| article.publish_year == year && article.publish_month == month)
        .collect()
}

/// Articles dated inside the inclusive `[from, to]` range. Bounds are ISO
/// `YYYY-MM-DD` strings, so plain lexicographic comparison is enough.
pub fn by_publish_range<'a>(articles: &'a [Article], from: &str, to: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| {
            let date = date_part(&article.publish_date);
            date >= from && date <= to
        })
        .collect()
}

pub fn distinct_sources(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .map(|article| article.source.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
