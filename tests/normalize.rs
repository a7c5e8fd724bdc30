use newslens::nlp::normalize::{split_sentences, tokenize, PosTag, TextAnalyzer};
use proptest::prelude::*;

#[test]
fn splits_plain_sentences() {
    let sentences = split_sentences("markets rallied today. oil fell sharply! will it last?");
    assert_eq!(
        sentences,
        vec![
            "markets rallied today.",
            "oil fell sharply!",
            "will it last?"
        ]
    );
}

#[test]
fn keeps_abbreviations_inside_one_sentence() {
    let sentences =
        split_sentences("apple inc. announced a new product in paris. the event drew attention.");
    assert_eq!(sentences.len(), 2);
    assert!(sentences[0].starts_with("apple inc. announced"));
}

#[test]
fn keeps_dotted_acronyms_attached() {
    let sentences = split_sentences("the u.s. economy grew last year. analysts were surprised.");
    assert_eq!(sentences.len(), 2);
}

#[test]
fn terminator_runs_collapse_into_one_break() {
    let sentences = split_sentences("it ended... markets closed.");
    assert_eq!(sentences, vec!["it ended...", "markets closed."]);
}

#[test]
fn text_without_terminator_is_one_sentence() {
    let sentences = split_sentences("no terminator here");
    assert_eq!(sentences, vec!["no terminator here"]);
}

#[test]
fn tokenize_peels_punctuation() {
    let tokens = tokenize("\"hello,\" she said.");
    assert_eq!(tokens, vec!["\"", "hello", ",", "\"", "she", "said", "."]);
}

#[test]
fn tokenize_keeps_dotted_acronym_period() {
    let tokens = tokenize("u.s. officials spoke.");
    assert_eq!(tokens[0], "u.s.");
}

#[test]
fn keyword_stream_filters_exclusions() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("The chancellor praised 42 turbine upgrades. See https://example.com now.");
    let keywords = doc.keyword_stream();
    assert!(keywords.contains(&"chancellor"));
    assert!(keywords.contains(&"turbine"));
    assert!(!keywords.contains(&"the"));
    assert!(!keywords.contains(&"42"));
    assert!(!keywords.iter().any(|word| word.contains("example.com")));
}

#[test]
fn lemma_of_prefers_irregular_table_over_stemmer() {
    let analyzer = TextAnalyzer::new();
    assert_eq!(analyzer.lemma_of("wrote"), "write");
    assert_eq!(analyzer.lemma_of("children"), "child");
    assert_eq!(analyzer.lemma_of("turbines"), "turbin");
    assert_eq!(analyzer.lemma_of("u.s."), "u.s.");
}

#[test]
fn lemma_stream_drops_stopwords() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("The chancellor inspected the turbines.");
    let lemmas = doc.lemma_stream();
    assert!(lemmas.split(' ').any(|lemma| lemma == "turbin"));
    assert!(!lemmas.split(' ').any(|lemma| lemma == "the"));
}

#[test]
fn one_pass_feeds_both_streams() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("Refinery output rose sharply. Exports doubled again.");
    assert_eq!(doc.sentence_count(), 2);
    assert!(!doc.keyword_stream().is_empty());
    assert!(!doc.lemma_stream().is_empty());
}

#[test]
fn processing_twice_gives_identical_streams() {
    let analyzer = TextAnalyzer::new();
    let text = "Refinery output rose sharply. Exports doubled again.";
    let first = analyzer.process(text);
    let second = analyzer.process(text);
    assert_eq!(first.keyword_stream(), second.keyword_stream());
    assert_eq!(first.lemma_stream(), second.lemma_stream());
}

#[test]
fn heuristic_tagger_covers_common_classes() {
    let analyzer = TextAnalyzer::new();
    let doc = analyzer.process("the careful ranker ran smoothly");
    let tags: Vec<PosTag> = doc.tokens().map(|token| token.pos).collect();
    assert_eq!(
        tags,
        vec![
            PosTag::Function,
            PosTag::Adjective,
            PosTag::Noun,
            PosTag::Verb,
            PosTag::Adverb
        ]
    );
}

proptest! {
    #[test]
    fn tokenize_preserves_non_whitespace(s in "[ -~]{0,160}") {
        let tokens = tokenize(&s);
        let rebuilt: String = tokens.concat();
        let expected: String = s.split_whitespace().collect();
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn process_never_yields_empty_sentences(s in "[ -~]{0,120}") {
        let analyzer = TextAnalyzer::new();
        let doc = analyzer.process(&s);
        for sentence in &doc.sentences {
            prop_assert!(!sentence.text.trim().is_empty());
        }
    }
}
