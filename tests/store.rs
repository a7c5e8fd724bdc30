use std::fs;

use newslens::config::Settings;
use newslens::data::articles::{
    by_entity, by_id, by_publish_range, by_publish_year, by_publish_year_month, by_source,
    distinct_sources, Article, ArticleError, ArticleStore, RawArticle, STORE_FILE,
};
use newslens::nlp::ner::EntityLabel;
use newslens::nlp::EnrichmentRecord;
use tempfile::tempdir;

fn sample(id: &str, source: &str, date: &str) -> Article {
    let raw = RawArticle {
        id: id.to_string(),
        title: format!("title {id}"),
        body: "alpha beta gamma".to_string(),
        publish_date: date.to_string(),
        source: source.to_string(),
    };
    Article::from_raw(raw, EnrichmentRecord::default()).unwrap()
}

#[test]
fn derived_fields_come_from_the_raw_article() {
    let article = sample("a1", "wire", "2024-03-07");
    assert_eq!(article.word_count, 3);
    assert_eq!(article.publish_year, 2024);
    assert_eq!(article.publish_month, 3);
}

#[test]
fn timestamps_past_the_date_part_are_accepted() {
    let article = sample("a1", "wire", "2024-03-07T08:30:00Z");
    assert_eq!(article.publish_year, 2024);
    assert_eq!(article.publish_month, 3);
}

#[test]
fn malformed_dates_are_rejected() {
    let raw = RawArticle {
        id: "a1".to_string(),
        title: "title".to_string(),
        body: "body".to_string(),
        publish_date: "07/03/2024".to_string(),
        source: "wire".to_string(),
    };
    let err = Article::from_raw(raw, EnrichmentRecord::default()).unwrap_err();
    assert!(matches!(err, ArticleError::MalformedDate { .. }));
    assert!(err.to_string().contains("malformed publish date"));
}

#[test]
fn missing_store_reads_as_empty() {
    let dir = tempdir().unwrap();
    let store = ArticleStore::from_path(dir.path().join(STORE_FILE));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn open_places_the_store_under_the_data_dir() {
    let dir = tempdir().unwrap();
    let settings = Settings {
        articles_dir: dir.path().join("articles"),
        data_dir: dir.path().join("data"),
        outputs_dir: dir.path().join("outputs"),
        summary_threshold: 10,
        summary_limit: 3,
    };
    let store = ArticleStore::open(&settings);
    assert_eq!(store.path(), dir.path().join("data").join(STORE_FILE));
}

#[test]
fn append_skips_already_stored_ids() {
    let dir = tempdir().unwrap();
    let store = ArticleStore::from_path(dir.path().join(STORE_FILE));

    let first = vec![sample("a1", "wire", "2024-01-01"), sample("a2", "wire", "2024-01-02")];
    assert_eq!(store.append_batch(&first).unwrap(), 2);

    let second = vec![sample("a2", "wire", "2024-01-02"), sample("a3", "desk", "2024-01-03")];
    assert_eq!(store.append_batch(&second).unwrap(), 1);

    let stored = store.load_all().unwrap();
    let ids: Vec<&str> = stored.iter().map(|article| article.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
}

#[test]
fn duplicates_within_one_batch_collapse() {
    let dir = tempdir().unwrap();
    let store = ArticleStore::from_path(dir.path().join(STORE_FILE));
    let batch = vec![sample("a1", "wire", "2024-01-01"), sample("a1", "wire", "2024-01-01")];
    assert_eq!(store.append_batch(&batch).unwrap(), 1);
}

#[test]
fn undecodable_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(STORE_FILE);
    let good = serde_json::to_string(&sample("a1", "wire", "2024-01-01")).unwrap();
    let also_good = serde_json::to_string(&sample("a2", "wire", "2024-01-02")).unwrap();
    fs::write(&path, format!("{good}\nnot json\n{also_good}\n")).unwrap();

    let stored = ArticleStore::from_path(&path).load_all().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, "a1");
    assert_eq!(stored[1].id, "a2");
}

#[test]
fn stored_articles_round_trip() {
    let dir = tempdir().unwrap();
    let store = ArticleStore::from_path(dir.path().join(STORE_FILE));
    let batch = vec![sample("a1", "wire", "2024-01-01"), sample("a2", "desk", "2024-02-01")];
    store.append_batch(&batch).unwrap();
    assert_eq!(store.load_all().unwrap(), batch);
}

#[test]
fn queries_filter_by_source_year_and_range() {
    let articles = vec![
        sample("a1", "wire", "2023-12-31"),
        sample("a2", "desk", "2024-01-15"),
        sample("a3", "desk", "2024-02-01"),
    ];

    assert_eq!(by_source(&articles, "DESK").len(), 2);
    assert_eq!(by_publish_year(&articles, 2024).len(), 2);

    let january = by_publish_year_month(&articles, 2024, 1);
    assert_eq!(january.len(), 1);
    assert_eq!(january[0].id, "a2");

    let range = by_publish_range(&articles, "2023-12-31", "2024-01-15");
    assert_eq!(range.len(), 2);

    assert_eq!(distinct_sources(&articles), vec!["desk", "wire"]);
    assert!(by_id(&articles, "a3").is_some());
    assert!(by_id(&articles, "missing").is_none());
}

#[test]
fn entity_queries_match_case_insensitively() {
    let mut enrichment = EnrichmentRecord::default();
    enrichment
        .entities
        .get_mut(&EntityLabel::Org)
        .unwrap()
        .insert("Apple Inc.".to_string());
    enrichment.entity_mentions = 1;
    let raw = RawArticle {
        id: "a1".to_string(),
        title: "title".to_string(),
        body: "body".to_string(),
        publish_date: "2024-01-01".to_string(),
        source: "wire".to_string(),
    };
    let tagged = Article::from_raw(raw, enrichment).unwrap();
    let articles = vec![tagged, sample("a2", "wire", "2024-01-02")];

    assert_eq!(by_entity(&articles, EntityLabel::Org, "apple inc.").len(), 1);
    assert!(by_entity(&articles, EntityLabel::Gpe, "apple inc.").is_empty());
}
