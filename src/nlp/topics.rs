//! Bag-of-words topic modeling via online variational Bayes LDA.

use std::collections::{BTreeMap, HashMap, HashSet};

use ndarray::{Array1, Array2};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Gamma};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Number of latent topics fitted per corpus.
pub const NUM_TOPICS: usize = 5;
/// Passes over the corpus during training.
pub const MAX_ITER: usize = 5;
/// Seed for all random draws so fits are reproducible.
pub const RANDOM_SEED: u64 = 42;
/// Terms in more than this fraction of documents are pruned.
pub const MAX_DOC_FREQUENCY: f64 = 0.95;
/// Terms in fewer than this fraction of documents are pruned.
pub const MIN_DOC_FREQUENCY: f64 = 0.01;
/// Corpora must be strictly larger than this to be worth fitting.
pub const MIN_TOPIC_DOCS: usize = 3;
/// Terms reported per topic in the visualization payload.
pub const TOP_TERMS_PER_TOPIC: usize = 10;

const LEARNING_DECAY: f64 = 0.7;
const LEARNING_OFFSET: f64 = 10.0;
const BATCH_SIZE: usize = 128;
const MEAN_CHANGE_TOL: f64 = 1e-3;
const MAX_DOC_UPDATE_ITER: usize = 100;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicFitError {
    #[error("topic modeling not possible for this input: the corpus is empty")]
    EmptyCorpus,
    #[error("topic modeling not possible for this input: no terms survive the document-frequency bounds")]
    EmptyVocabulary,
}

/// Unigram-plus-bigram count vectorizer with document-frequency pruning.
#[derive(Debug, Clone)]
pub struct BowVectorizer {
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
}

impl BowVectorizer {
    /// Learn the vocabulary over `docs` and return per-document term counts
    /// as sparse `(term index, count)` pairs.
    pub fn fit_transform(docs: &[&str]) -> Result<(Self, Vec<Vec<(usize, f64)>>), TopicFitError> {
        if docs.is_empty() {
            return Err(TopicFitError::EmptyCorpus);
        }
        let analyzed: Vec<Vec<String>> = docs.iter().map(|doc| analyze(doc)).collect();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for terms in &analyzed {
            let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }
        let total = docs.len() as f64;
        let max_doc_count = MAX_DOC_FREQUENCY * total;
        let min_doc_count = MIN_DOC_FREQUENCY * total;
        let mut vocabulary: Vec<String> = document_frequency
            .iter()
            .filter(|(_, count)| {
                let count = **count as f64;
                count >= min_doc_count && count <= max_doc_count
            })
            .map(|(term, _)| (*term).to_string())
            .collect();
        vocabulary.sort();
        if vocabulary.is_empty() {
            return Err(TopicFitError::EmptyVocabulary);
        }
        let index = vocabulary
            .iter()
            .enumerate()
            .map(|(position, term)| (term.clone(), position))
            .collect();
        let vectorizer = Self { vocabulary, index };
        let matrix = analyzed
            .iter()
            .map(|terms| vectorizer.count_terms(terms))
            .collect();
        Ok((vectorizer, matrix))
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    fn count_terms(&self, terms: &[String]) -> Vec<(usize, f64)> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in terms {
            if let Some(&position) = self.index.get(term.as_str()) {
                *counts.entry(position).or_insert(0.0) += 1.0;
            }
        }
        counts.into_iter().collect()
    }
}

/// Lowercase, fold accents away, then emit word tokens of two or more
/// characters plus each adjacent pair joined by a space.
fn analyze(text: &str) -> Vec<String> {
    let folded: String = text
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    let unigrams: Vec<&str> = TOKEN_RE.find_iter(&folded).map(|m| m.as_str()).collect();
    let mut terms: Vec<String> = unigrams.iter().map(|term| (*term).to_string()).collect();
    terms.extend(
        unigrams
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1])),
    );
    terms
}

/// Fitted model: normalized topic-term and document-topic distributions.
#[derive(Debug, Clone)]
pub struct TopicModel {
    vocabulary: Vec<String>,
    topic_term: Array2<f64>,
    doc_topic: Array2<f64>,
}

impl TopicModel {
    pub fn num_topics(&self) -> usize {
        self.topic_term.nrows()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn doc_topic(&self) -> &Array2<f64> {
        &self.doc_topic
    }

    /// The `count` heaviest terms of one topic, strongest first.
    pub fn top_terms(&self, topic: usize, count: usize) -> Vec<(&str, f64)> {
        let row = self.topic_term.row(topic);
        let mut weighted: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
        weighted.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        weighted
            .into_iter()
            .take(count)
            .map(|(position, weight)| (self.vocabulary[position].as_str(), weight))
            .collect()
    }
}

/// Fit a topic model over normalized document bodies.
///
/// Callers are expected to hand in more than [`MIN_TOPIC_DOCS`] documents;
/// smaller corpora tend to collapse to an empty vocabulary.
pub fn fit_topics(docs: &[&str]) -> Result<TopicModel, TopicFitError> {
    if docs.is_empty() {
        return Err(TopicFitError::EmptyCorpus);
    }
    let (vectorizer, matrix) = BowVectorizer::fit_transform(docs)?;
    let num_terms = vectorizer.vocabulary().len();
    let total_docs = matrix.len() as f64;
    let alpha = 1.0 / NUM_TOPICS as f64;
    let eta = 1.0 / NUM_TOPICS as f64;

    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    let gamma_dist = Gamma::new(100.0, 0.01).expect("valid gamma parameters");
    let mut lambda =
        Array2::from_shape_fn((NUM_TOPICS, num_terms), |_| gamma_dist.sample(&mut rng));

    let mut updates = 0u64;
    for _ in 0..MAX_ITER {
        for batch in matrix.chunks(BATCH_SIZE) {
            let exp_elog_beta = dirichlet_expectation_2d(&lambda).mapv(f64::exp);
            let mut sstats = Array2::<f64>::zeros((NUM_TOPICS, num_terms));
            for counts in batch {
                update_doc(
                    counts,
                    &exp_elog_beta,
                    alpha,
                    &mut rng,
                    &gamma_dist,
                    Some(&mut sstats),
                );
            }
            let rho = (LEARNING_OFFSET + updates as f64 + 1.0).powf(-LEARNING_DECAY);
            let scale = total_docs / batch.len() as f64;
            for topic in 0..NUM_TOPICS {
                for term in 0..num_terms {
                    let updated = eta + scale * sstats[[topic, term]] * exp_elog_beta[[topic, term]];
                    lambda[[topic, term]] = (1.0 - rho) * lambda[[topic, term]] + rho * updated;
                }
            }
            updates += 1;
        }
    }

    let exp_elog_beta = dirichlet_expectation_2d(&lambda).mapv(f64::exp);
    let mut doc_topic = Array2::<f64>::zeros((matrix.len(), NUM_TOPICS));
    for (position, counts) in matrix.iter().enumerate() {
        let gamma = update_doc(counts, &exp_elog_beta, alpha, &mut rng, &gamma_dist, None);
        let sum = gamma.sum();
        for topic in 0..NUM_TOPICS {
            doc_topic[[position, topic]] = gamma[topic] / sum;
        }
    }

    let mut topic_term = lambda;
    for mut row in topic_term.rows_mut() {
        let sum = row.sum();
        if sum > 0.0 {
            row /= sum;
        }
    }

    Ok(TopicModel {
        vocabulary: vectorizer.vocabulary,
        topic_term,
        doc_topic,
    })
}

/// One-document variational update. Returns the converged gamma vector and,
/// during training, accumulates the sufficient statistics.
fn update_doc(
    counts: &[(usize, f64)],
    exp_elog_beta: &Array2<f64>,
    alpha: f64,
    rng: &mut StdRng,
    gamma_dist: &Gamma<f64>,
    sstats: Option<&mut Array2<f64>>,
) -> Array1<f64> {
    let num_topics = exp_elog_beta.nrows();
    if counts.is_empty() {
        return Array1::from_elem(num_topics, alpha);
    }
    let mut gamma: Array1<f64> = Array1::from_shape_fn(num_topics, |_| gamma_dist.sample(rng));
    let mut exp_elog_theta = dirichlet_expectation_1d(&gamma).mapv(f64::exp);
    let mut phinorm = phi_norms(counts, &exp_elog_theta, exp_elog_beta);
    for _ in 0..MAX_DOC_UPDATE_ITER {
        let last = gamma.clone();
        for topic in 0..num_topics {
            let weighted: f64 = counts
                .iter()
                .enumerate()
                .map(|(i, (term, count))| count / phinorm[i] * exp_elog_beta[[topic, *term]])
                .sum();
            gamma[topic] = alpha + exp_elog_theta[topic] * weighted;
        }
        exp_elog_theta = dirichlet_expectation_1d(&gamma).mapv(f64::exp);
        phinorm = phi_norms(counts, &exp_elog_theta, exp_elog_beta);
        let mean_change = (&gamma - &last).mapv(f64::abs).sum() / num_topics as f64;
        if mean_change < MEAN_CHANGE_TOL {
            break;
        }
    }
    if let Some(sstats) = sstats {
        for (i, (term, count)) in counts.iter().enumerate() {
            for topic in 0..num_topics {
                sstats[[topic, *term]] += exp_elog_theta[topic] * count / phinorm[i];
            }
        }
    }
    gamma
}

fn phi_norms(
    counts: &[(usize, f64)],
    exp_elog_theta: &Array1<f64>,
    exp_elog_beta: &Array2<f64>,
) -> Vec<f64> {
    counts
        .iter()
        .map(|(term, _)| {
            exp_elog_theta
                .iter()
                .enumerate()
                .map(|(topic, theta)| theta * exp_elog_beta[[topic, *term]])
                .sum::<f64>()
                + 1e-100
        })
        .collect()
}

fn dirichlet_expectation_1d(values: &Array1<f64>) -> Array1<f64> {
    let psi_total = digamma(values.sum());
    values.mapv(|v| digamma(v) - psi_total)
}

fn dirichlet_expectation_2d(values: &Array2<f64>) -> Array2<f64> {
    let mut result = values.clone();
    for mut row in result.rows_mut() {
        let psi_total = digamma(row.sum());
        row.mapv_inplace(|v| digamma(v) - psi_total);
    }
    result
}

/// Digamma via the shift recurrence and the asymptotic series.
fn digamma(x: f64) -> f64 {
    let mut x = x;
    let mut result = 0.0;
    while x < 6.0 {
        result -= 1.0 / x;
        x += 1.0;
    }
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    result + x.ln() - 0.5 * inv
        - inv2 * (1.0 / 12.0 - inv2 * (1.0 / 120.0 - inv2 / 252.0))
}

/// JSON-friendly view of a fitted model for the exploration surfaces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicsPayload {
    pub num_topics: usize,
    pub topics: Vec<TopicEntry>,
    pub doc_topics: Vec<DocTopicEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicEntry {
    pub topic: usize,
    pub terms: Vec<TermWeight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocTopicEntry {
    pub id: String,
    pub weights: Vec<f64>,
}

/// Pair a fitted model with document ids for serialization. `ids` must line
/// up with the corpus the model was fitted on.
pub fn visualization_payload(model: &TopicModel, ids: &[&str], top_k: usize) -> TopicsPayload {
    debug_assert_eq!(
        ids.len(),
        model.doc_topic().nrows(),
        "one id per fitted document"
    );
    let topics = (0..model.num_topics())
        .map(|topic| TopicEntry {
            topic,
            terms: model
                .top_terms(topic, top_k)
                .into_iter()
                .map(|(term, weight)| TermWeight {
                    term: term.to_string(),
                    weight,
                })
                .collect(),
        })
        .collect();
    let doc_topics = model
        .doc_topic()
        .rows()
        .into_iter()
        .zip(ids.iter())
        .map(|(row, id)| DocTopicEntry {
            id: (*id).to_string(),
            weights: row.to_vec(),
        })
        .collect();
    TopicsPayload {
        num_topics: model.num_topics(),
        topics,
        doc_topics,
    }
}
