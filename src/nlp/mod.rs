//! Text analysis: normalization, entity extraction, summarization, topics.

pub mod ner;
pub mod normalize;
pub mod summarize;
pub mod topics;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::nlp::ner::{
    empty_categories, load_recognizer, target_entities, EntityLabel, EntitySummary, Recognizer,
};
use crate::nlp::normalize::TextAnalyzer;
use crate::nlp::summarize::{summarize, SummaryOptions};

/// Shared handles to the loaded analysis components.
pub struct NlpPipelines {
    pub recognizer: Arc<dyn Recognizer>,
    pub analyzer: TextAnalyzer,
}

impl NlpPipelines {
    pub fn load() -> Self {
        Self {
            recognizer: load_recognizer(),
            analyzer: TextAnalyzer::new(),
        }
    }
}

impl Default for NlpPipelines {
    fn default() -> Self {
        Self::load()
    }
}

/// Analysis fields attached to an article alongside its raw metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentRecord {
    pub entities: BTreeMap<EntityLabel, BTreeSet<String>>,
    pub entity_mentions: usize,
    pub summary: String,
    pub processed_body_words: String,
}

impl Default for EnrichmentRecord {
    fn default() -> Self {
        Self {
            entities: empty_categories(),
            entity_mentions: 0,
            summary: String::new(),
            processed_body_words: String::new(),
        }
    }
}

/// Run entity extraction, summarization, and normalization over one body.
///
/// Entities are read off the original casing; the summary and the lemma
/// stream come from the lowercased token pipeline.
pub fn enrich_document(
    pipelines: &NlpPipelines,
    body: &str,
    options: SummaryOptions,
) -> EnrichmentRecord {
    let EntitySummary { entities, mentions } = target_entities(pipelines.recognizer.as_ref(), body);
    let doc = pipelines.analyzer.process(body);
    let summary = summarize(&doc, options);
    EnrichmentRecord {
        entities,
        entity_mentions: mentions,
        summary,
        processed_body_words: doc.lemma_stream(),
    }
}
