//! Shared DTOs for JSON responses.

use serde::Serialize;

use crate::data::articles::Article;

#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceCountDto {
    pub source: String,
    pub count: usize,
}

/// Compact article listing without the full body or entity sets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: String,
    pub title: String,
    pub source: String,
    pub publish_date: String,
    pub publish_year: i32,
    pub word_count: usize,
    pub entity_mentions: usize,
    pub summary: String,
}

impl From<&Article> for ArticleSummaryDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            source: article.source.clone(),
            publish_date: article.publish_date.clone(),
            publish_year: article.publish_year,
            word_count: article.word_count,
            entity_mentions: article.enrichment.entity_mentions,
            summary: article.enrichment.summary.clone(),
        }
    }
}
