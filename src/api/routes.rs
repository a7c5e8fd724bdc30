//! HTTP route handlers for Axum.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::{
    api::types::{ArticleSummaryDto, HealthDto, SourceCountDto},
    config::Settings,
    data::articles::{self, Article, ArticleStore},
    nlp::ner::EntityLabel,
    nlp::topics::{self, TopicsPayload, MIN_TOPIC_DOCS, TOP_TERMS_PER_TOPIC},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto { status: "ok" })
}

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    pub source: Option<String>,
    pub label: Option<String>,
    pub entity: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub async fn list_sources(state: State<AppState>) -> ApiResult<Vec<SourceCountDto>> {
    let articles = load_articles(&state.settings)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for article in &articles {
        *counts.entry(article.source.clone()).or_insert(0) += 1;
    }
    Ok(Json(
        counts
            .into_iter()
            .map(|(source, count)| SourceCountDto { source, count })
            .collect(),
    ))
}

pub async fn list_articles(
    state: State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> ApiResult<Vec<ArticleSummaryDto>> {
    let articles = load_articles(&state.settings)?;
    let selected = select(&query, &articles)?;
    Ok(Json(
        selected.into_iter().map(ArticleSummaryDto::from).collect(),
    ))
}

pub async fn get_article(Path(id): Path<String>, state: State<AppState>) -> ApiResult<Article> {
    let articles = load_articles(&state.settings)?;
    articles::by_id(&articles, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("article {id} not found")))
}

pub async fn topic_payload(
    state: State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> ApiResult<TopicsPayload> {
    let articles = load_articles(&state.settings)?;
    let selected = select(&query, &articles)?;
    if selected.len() <= MIN_TOPIC_DOCS {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "topic modeling not possible for this input: need more than {MIN_TOPIC_DOCS} matching articles"
            ),
        ));
    }
    let docs: Vec<&str> = selected
        .iter()
        .map(|article| article.enrichment.processed_body_words.as_str())
        .collect();
    let model = topics::fit_topics(&docs)
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;
    let ids: Vec<&str> = selected.iter().map(|article| article.id.as_str()).collect();
    Ok(Json(topics::visualization_payload(
        &model,
        &ids,
        TOP_TERMS_PER_TOPIC,
    )))
}

fn select<'a>(
    query: &ArticleQuery,
    articles: &'a [Article],
) -> Result<Vec<&'a Article>, (StatusCode, String)> {
    if let Some(source) = &query.source {
        return Ok(articles::by_source(articles, source));
    }
    if let (Some(label), Some(entity)) = (&query.label, &query.entity) {
        let label: EntityLabel = label
            .parse()
            .map_err(|err: String| (StatusCode::BAD_REQUEST, err))?;
        return Ok(articles::by_entity(articles, label, entity));
    }
    if let Some(year) = query.year {
        return Ok(match query.month {
            Some(month) => articles::by_publish_year_month(articles, year, month),
            None => articles::by_publish_year(articles, year),
        });
    }
    Ok(articles.iter().collect())
}

fn load_articles(settings: &Settings) -> Result<Vec<Article>, (StatusCode, String)> {
    let store = ArticleStore::open(settings);
    if !store.path().exists() {
        warn!("article store missing; run ingest first");
        return Ok(Vec::new());
    }
    store
        .load_all()
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
}
