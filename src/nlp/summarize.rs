//! Extractive summarization over processed documents.
//!
//! Short documents keep their leading sentences; longer ones are ranked by
//! normalized keyword frequency and the strongest sentences win.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::nlp::normalize::ProcessedDoc;

/// Sentence count at or below which the lead strategy applies.
pub const DEFAULT_SENTENCE_THRESHOLD: usize = 10;
/// Number of sentences retained in a summary.
pub const DEFAULT_SUMMARY_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub sentence_threshold: usize,
    pub max_sentences: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            sentence_threshold: DEFAULT_SENTENCE_THRESHOLD,
            max_sentences: DEFAULT_SUMMARY_LIMIT,
        }
    }
}

/// Sentence with its position and accumulated keyword strength.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSentence {
    pub index: usize,
    pub text: String,
    pub strength: f64,
}

/// Produce a summary, switching strategy on the document's sentence count.
pub fn summarize(doc: &ProcessedDoc, options: SummaryOptions) -> String {
    if doc.sentence_count() <= options.sentence_threshold {
        lead_summary(doc, options.max_sentences)
    } else {
        ranked_summary(doc, options.max_sentences)
    }
}

/// First `limit` sentences in document order.
pub fn lead_summary(doc: &ProcessedDoc, limit: usize) -> String {
    doc.sentences
        .iter()
        .take(limit)
        .map(|sentence| capitalize(&sentence.text))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyword counts scaled so the most frequent keyword maps to 1.0.
pub fn keyword_frequencies(keywords: &[&str]) -> HashMap<String, f64> {
    let mut counts: HashMap<String, f64> = HashMap::new();
    for keyword in keywords {
        *counts.entry((*keyword).to_string()).or_insert(0.0) += 1.0;
    }
    let max = counts.values().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        for value in counts.values_mut() {
            *value /= max;
        }
    }
    counts
}

/// Score every sentence by summing the table value of each token occurrence,
/// strongest first. Equal strengths keep document order.
pub fn rank_sentences(
    doc: &ProcessedDoc,
    frequencies: &HashMap<String, f64>,
) -> Vec<RankedSentence> {
    let mut ranked: Vec<RankedSentence> = doc
        .sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let strength = sentence
                .tokens
                .iter()
                .filter_map(|token| frequencies.get(token.text.as_str()))
                .copied()
                .sum();
            RankedSentence {
                index,
                text: sentence.text.clone(),
                strength,
            }
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    ranked
}

/// Top `limit` sentences by keyword strength, in rank order.
pub fn ranked_summary(doc: &ProcessedDoc, limit: usize) -> String {
    let keywords = doc.keyword_stream();
    let frequencies = keyword_frequencies(&keywords);
    if frequencies.is_empty() {
        return String::new();
    }
    rank_sentences(doc, &frequencies)
        .into_iter()
        .take(limit)
        .map(|sentence| capitalize(&sentence.text))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
