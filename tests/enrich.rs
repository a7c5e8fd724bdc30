use newslens::nlp::ner::EntityLabel;
use newslens::nlp::summarize::SummaryOptions;
use newslens::nlp::{enrich_document, EnrichmentRecord, NlpPipelines};

#[test]
fn enrichment_combines_entities_summary_and_lemmas() {
    let pipelines = NlpPipelines::load();
    let body = "Apple Inc. announced a new product in Paris. The event drew global attention. \
                Apple Inc. is based in California.";
    let options = SummaryOptions {
        sentence_threshold: 10,
        max_sentences: 2,
    };

    let record = enrich_document(&pipelines, body, options);

    assert_eq!(record.entities.len(), 9);
    let orgs = &record.entities[&EntityLabel::Org];
    assert_eq!(orgs.len(), 1);
    assert!(orgs.contains("Apple Inc."));
    let places = &record.entities[&EntityLabel::Gpe];
    assert!(places.contains("Paris"));
    assert!(places.contains("California"));
    assert_eq!(record.entity_mentions, 4);

    assert_eq!(
        record.summary,
        "Apple inc. announced a new product in paris. The event drew global attention."
    );

    let lemmas: Vec<&str> = record.processed_body_words.split_whitespace().collect();
    assert!(lemmas.iter().any(|lemma| lemma.starts_with("appl")));
    assert!(lemmas.contains(&"product"));
    assert!(!lemmas.contains(&"the"));
}

#[test]
fn texts_without_entities_still_summarize() {
    let pipelines = NlpPipelines::load();
    let record = enrich_document(
        &pipelines,
        "nothing happened today. more nothing followed.",
        SummaryOptions::default(),
    );

    assert!(record.entities.values().all(|set| set.is_empty()));
    assert_eq!(record.entity_mentions, 0);
    assert_eq!(
        record.summary,
        "Nothing happened today. More nothing followed."
    );
}

#[test]
fn default_record_carries_every_category() {
    let record = EnrichmentRecord::default();
    assert_eq!(record.entities.len(), 9);
    assert!(record.entities.values().all(|set| set.is_empty()));
    assert_eq!(record.entity_mentions, 0);
    assert!(record.summary.is_empty());
}

#[test]
fn records_round_trip_through_json() {
    let pipelines = NlpPipelines::load();
    let record = enrich_document(
        &pipelines,
        "Apple Inc. opened a campus in Paris.",
        SummaryOptions::default(),
    );

    let encoded = serde_json::to_string(&record).unwrap();
    assert!(encoded.contains("\"ORG\""));
    assert!(encoded.contains("\"entityMentions\""));
    assert!(encoded.contains("\"processedBodyWords\""));

    let decoded: EnrichmentRecord = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, record);
}
