use newslens::nlp::topics::{
    fit_topics, visualization_payload, BowVectorizer, TopicFitError, NUM_TOPICS,
    TOP_TERMS_PER_TOPIC,
};

fn sample_corpus() -> Vec<&'static str> {
    vec![
        "markets rallied on strong earnings reports",
        "earnings season lifted markets broadly",
        "storm damage closed coastal roads",
        "roads flooded after the storm surge",
        "central banks discussed rate policy",
    ]
}

#[test]
fn empty_corpus_is_rejected() {
    assert_eq!(fit_topics(&[]).unwrap_err(), TopicFitError::EmptyCorpus);
    assert_eq!(
        BowVectorizer::fit_transform(&[]).unwrap_err(),
        TopicFitError::EmptyCorpus
    );
}

#[test]
fn identical_documents_leave_no_vocabulary() {
    let docs = ["alpha beta gamma", "alpha beta gamma"];
    assert_eq!(
        fit_topics(&docs).unwrap_err(),
        TopicFitError::EmptyVocabulary
    );
}

#[test]
fn ubiquitous_terms_are_pruned() {
    let docs = [
        "omega alpha anchor",
        "omega bravo beacon",
        "omega cedar circuit",
    ];
    let (vectorizer, _) = BowVectorizer::fit_transform(&docs).unwrap();
    let vocabulary = vectorizer.vocabulary();
    assert!(!vocabulary.iter().any(|term| term == "omega"));
    assert!(vocabulary.iter().any(|term| term == "alpha"));
    assert!(vocabulary.iter().any(|term| term == "circuit"));
}

#[test]
fn bigrams_join_adjacent_terms() {
    let docs = [
        "alpha beta gamma",
        "alpha beta delta",
        "epsilon zeta eta",
    ];
    let (vectorizer, counts) = BowVectorizer::fit_transform(&docs).unwrap();
    let vocabulary = vectorizer.vocabulary();
    assert!(vocabulary.iter().any(|term| term == "alpha beta"));
    assert!(vocabulary.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(counts.len(), docs.len());
}

#[test]
fn fitting_yields_normalized_topic_mixtures() {
    let docs = sample_corpus();
    let model = fit_topics(&docs).unwrap();
    assert_eq!(model.num_topics(), NUM_TOPICS);

    let doc_topic = model.doc_topic();
    assert_eq!(doc_topic.nrows(), docs.len());
    assert_eq!(doc_topic.ncols(), NUM_TOPICS);
    for row in doc_topic.outer_iter() {
        let sum: f64 = row.sum();
        assert!((sum - 1.0).abs() < 1e-6, "row sums to {sum}");
        assert!(row.iter().all(|weight| *weight >= 0.0));
    }
}

#[test]
fn fits_are_reproducible() {
    let docs = sample_corpus();
    let first = fit_topics(&docs).unwrap();
    let second = fit_topics(&docs).unwrap();
    assert_eq!(first.doc_topic(), second.doc_topic());
    assert_eq!(first.top_terms(0, 5), second.top_terms(0, 5));
}

#[test]
fn top_terms_come_sorted_by_weight() {
    let docs = sample_corpus();
    let model = fit_topics(&docs).unwrap();
    let terms = model.top_terms(0, TOP_TERMS_PER_TOPIC);
    assert!(!terms.is_empty());
    assert!(terms.windows(2).all(|pair| pair[0].1 >= pair[1].1));
}

#[test]
#[should_panic(expected = "one id per fitted document")]
fn payload_rejects_mismatched_ids() {
    let docs = sample_corpus();
    let model = fit_topics(&docs).unwrap();
    visualization_payload(&model, &["d1", "d2"], 3);
}

#[test]
fn visualization_payload_reports_every_doc() {
    let docs = sample_corpus();
    let ids: Vec<&str> = vec!["d1", "d2", "d3", "d4", "d5"];
    let model = fit_topics(&docs).unwrap();
    let payload = visualization_payload(&model, &ids, 3);

    assert_eq!(payload.num_topics, NUM_TOPICS);
    assert_eq!(payload.topics.len(), NUM_TOPICS);
    assert!(payload.topics.iter().all(|topic| topic.terms.len() <= 3));
    assert_eq!(payload.doc_topics.len(), docs.len());
    assert_eq!(payload.doc_topics[0].id, "d1");
    assert!(payload
        .doc_topics
        .iter()
        .all(|entry| entry.weights.len() == NUM_TOPICS));

    let encoded = serde_json::to_string(&payload).unwrap();
    assert!(encoded.contains("\"numTopics\""));
    assert!(encoded.contains("\"docTopics\""));
}
