//! CLI entry-point for filtering stored articles and exporting artefacts.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    config::Settings,
    data::articles::{self, Article, ArticleStore},
    nlp::ner::EntityLabel,
    nlp::topics::{self, MIN_TOPIC_DOCS, TOP_TERMS_PER_TOPIC},
};

/// Args for the `explore` command. `--id` short-circuits to a single record;
/// otherwise the first filter in source, entity, year, range order wins.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Single article id.
    #[arg(long)]
    pub id: Option<String>,
    /// Source name filter.
    #[arg(long)]
    pub source: Option<String>,
    /// Entity label to match (e.g. ORG); requires --entity.
    #[arg(long, requires = "entity")]
    pub label: Option<EntityLabel>,
    /// Entity surface form to match; requires --label.
    #[arg(long, requires = "label")]
    pub entity: Option<String>,
    /// Publication year filter.
    #[arg(long)]
    pub year: Option<i32>,
    /// Publication month filter; requires --year.
    #[arg(long, requires = "year")]
    pub month: Option<u32>,
    /// Inclusive range start (YYYY-MM-DD); requires --to.
    #[arg(long, requires = "to")]
    pub from: Option<String>,
    /// Inclusive range end (YYYY-MM-DD); requires --from.
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExploreRow<'a> {
    id: &'a str,
    title: &'a str,
    source: &'a str,
    publish_date: &'a str,
    publish_year: i32,
    word_count: usize,
    entity_mentions: usize,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let store = ArticleStore::open(&settings);
    let articles = store.load_all()?;

    if let Some(id) = &args.id {
        match articles::by_id(&articles, id) {
            Some(article) => println!("{}", serde_json::to_string_pretty(article)?),
            None => println!("no article with id {id}"),
        }
        return Ok(());
    }

    let selected = select(&args, &articles);
    info!(
        total = articles.len(),
        selected = selected.len(),
        "filtered stored articles"
    );

    if selected.is_empty() {
        println!("no articles matched the given filters");
        return Ok(());
    }

    let total_words: usize = selected.iter().map(|article| article.word_count).sum();
    let mean_words = total_words as f64 / selected.len() as f64;
    let earliest = selected
        .iter()
        .map(|article| article.publish_date.as_str())
        .min()
        .unwrap_or("");
    let latest = selected
        .iter()
        .map(|article| article.publish_date.as_str())
        .max()
        .unwrap_or("");
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for article in &selected {
        *per_year.entry(article.publish_year).or_insert(0) += 1;
    }
    println!(
        "{} articles from {earliest} to {latest}, mean {mean_words:.1} words",
        selected.len()
    );
    for (year, count) in &per_year {
        println!("{year}\t{count}");
    }

    let csv_path = settings.join_output("explore.csv");
    let mut writer = csv::Writer::from_path(&csv_path)?;
    for article in &selected {
        writer.serialize(ExploreRow {
            id: &article.id,
            title: &article.title,
            source: &article.source,
            publish_date: &article.publish_date,
            publish_year: article.publish_year,
            word_count: article.word_count,
            entity_mentions: article.enrichment.entity_mentions,
        })?;
    }
    writer.flush()?;
    info!(path = %csv_path.display(), rows = selected.len(), "wrote exploration csv");

    if selected.len() > MIN_TOPIC_DOCS {
        let docs: Vec<&str> = selected
            .iter()
            .map(|article| article.enrichment.processed_body_words.as_str())
            .collect();
        match topics::fit_topics(&docs) {
            Ok(model) => {
                let ids: Vec<&str> = selected.iter().map(|article| article.id.as_str()).collect();
                let payload = topics::visualization_payload(&model, &ids, TOP_TERMS_PER_TOPIC);
                let topics_path = settings.join_output("topics.json");
                std::fs::write(&topics_path, serde_json::to_string_pretty(&payload)?)?;
                info!(path = %topics_path.display(), "wrote topic payload");
            }
            Err(err) => warn!(%err, "skipping topic visualization"),
        }
    } else {
        info!(
            selected = selected.len(),
            "too few articles for topic modeling"
        );
    }
    Ok(())
}

fn select<'a>(args: &Args, articles: &'a [Article]) -> Vec<&'a Article> {
    if let Some(source) = &args.source {
        return articles::by_source(articles, source);
    }
    if let (Some(label), Some(entity)) = (args.label, &args.entity) {
        return articles::by_entity(articles, label, entity);
    }
    if let Some(year) = args.year {
        return match args.month {
            Some(month) => articles::by_publish_year_month(articles, year, month),
            None => articles::by_publish_year(articles, year),
        };
    }
    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        return articles::by_publish_range(articles, from, to);
    }
    articles.iter().collect()
}
