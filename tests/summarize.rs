use std::collections::HashMap;

use newslens::nlp::normalize::TextAnalyzer;
use newslens::nlp::summarize::{
    capitalize, keyword_frequencies, lead_summary, rank_sentences, summarize, SummaryOptions,
    DEFAULT_SENTENCE_THRESHOLD, DEFAULT_SUMMARY_LIMIT,
};

#[test]
fn frequencies_normalize_against_the_most_common_keyword() {
    let keywords = ["alpha", "alpha", "alpha", "alpha", "beta", "beta", "gamma"];
    let frequencies = keyword_frequencies(&keywords);
    assert_eq!(frequencies["alpha"], 1.0);
    assert_eq!(frequencies["beta"], 0.5);
    assert_eq!(frequencies["gamma"], 0.25);
}

#[test]
fn empty_keyword_list_yields_empty_table() {
    assert!(keyword_frequencies(&[]).is_empty());
}

#[test]
fn sentence_strength_counts_every_occurrence() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("alpha beta. gamma. alpha alpha beta.");
    let frequencies: HashMap<String, f64> = [
        ("alpha".to_string(), 1.0),
        ("beta".to_string(), 0.5),
        ("gamma".to_string(), 0.25),
    ]
    .into_iter()
    .collect();

    let ranked = rank_sentences(&doc, &frequencies);
    let order: Vec<usize> = ranked.iter().map(|sentence| sentence.index).collect();
    assert_eq!(order, vec![2, 0, 1]);
    assert_eq!(ranked[0].strength, 2.5);
    assert_eq!(ranked[1].strength, 1.5);
    assert_eq!(ranked[2].strength, 0.25);
}

#[test]
fn equal_strengths_keep_document_order() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("alpha one. beta two. alpha three.");
    let frequencies: HashMap<String, f64> = [("alpha".to_string(), 1.0)].into_iter().collect();

    let ranked = rank_sentences(&doc, &frequencies);
    let order: Vec<usize> = ranked.iter().map(|sentence| sentence.index).collect();
    assert_eq!(order, vec![0, 2, 1]);
}

#[test]
fn short_documents_take_the_lead_sentences() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("alpha one. beta two. alpha three.");
    let options = SummaryOptions {
        sentence_threshold: 3,
        max_sentences: 2,
    };
    assert_eq!(summarize(&doc, options), "Alpha one. Beta two.");
}

#[test]
fn long_documents_rank_by_keyword_strength() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("alpha one. beta two. alpha three.");
    let options = SummaryOptions {
        sentence_threshold: 2,
        max_sentences: 2,
    };
    assert_eq!(summarize(&doc, options), "Alpha one. Alpha three.");
}

#[test]
fn ranking_without_keywords_produces_an_empty_summary() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("the of and. in on at.");
    let options = SummaryOptions {
        sentence_threshold: 1,
        max_sentences: 2,
    };
    assert_eq!(summarize(&doc, options), "");
}

#[test]
fn lead_summary_caps_at_available_sentences() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("alpha landed. beta followed.");
    assert_eq!(lead_summary(&doc, 5), "Alpha landed. Beta followed.");
}

#[test]
fn empty_documents_summarize_to_nothing() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("");
    assert_eq!(summarize(&doc, SummaryOptions::default()), "");
}

#[test]
fn capitalize_lowers_the_tail() {
    assert_eq!(capitalize("hello WORLD"), "Hello world");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize(""), "");
}

#[test]
fn default_options_match_the_documented_values() {
    let options = SummaryOptions::default();
    assert_eq!(options.sentence_threshold, DEFAULT_SENTENCE_THRESHOLD);
    assert_eq!(options.max_sentences, DEFAULT_SUMMARY_LIMIT);
}
