//! Text normalization: sentence segmentation, tokenization, part-of-speech
//! tagging and lemmatization feeding the summarizer and topic model.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Coarse part-of-speech classes assigned by the heuristic tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Number,
    Function,
    Interjection,
    Punct,
    Other,
}

impl PosTag {
    /// Content classes retained by the keyword filter.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::ProperNoun | PosTag::Verb | PosTag::Adjective
        )
    }
}

/// One token of the lower-cased document with its exclusion flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PosTag,
    pub is_stop: bool,
    pub is_punct: bool,
    pub like_num: bool,
    pub like_email: bool,
    pub like_url: bool,
}

impl Token {
    /// Tokens dropped by both the keyword and the lemma stream.
    pub fn is_excluded(&self) -> bool {
        self.is_stop || self.is_punct || self.like_num || self.like_email || self.like_url
    }
}

/// A sentence of the lower-cased document together with its tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceTokens {
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Result of one tokenization pass; both normalizer outputs derive from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessedDoc {
    pub sentences: Vec<SentenceTokens>,
}

impl ProcessedDoc {
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }

    /// POS-filtered keyword surfaces used by the ranked summarizer.
    pub fn keyword_stream(&self) -> Vec<&str> {
        self.tokens()
            .filter(|t| !t.is_excluded() && t.pos.is_content())
            .map(|t| t.text.as_str())
            .collect()
    }

    /// Space-joined lemmas of all surviving tokens, the topic-model input.
    pub fn lemma_stream(&self) -> String {
        self.tokens()
            .filter(|t| !t.is_excluded())
            .map(|t| t.lemma.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read-only text pipeline shared across enrichment calls.
pub struct TextAnalyzer {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
}

impl TextAnalyzer {
    pub fn new() -> Self {
        let mut stopwords: HashSet<String> =
            stop_words::get(stop_words::LANGUAGE::English).into_iter().collect();
        for extra in EXTRA_STOPWORDS {
            stopwords.insert((*extra).to_string());
        }
        Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Lower-case, segment and tokenize `text` in a single pass.
    pub fn process(&self, text: &str) -> ProcessedDoc {
        let lowered = text.to_lowercase();
        let sentences = split_sentences(&lowered)
            .into_iter()
            .map(|sentence| {
                let tokens = tokenize(&sentence)
                    .into_iter()
                    .map(|word| self.build_token(word))
                    .collect();
                SentenceTokens {
                    text: sentence,
                    tokens,
                }
            })
            .collect();
        ProcessedDoc { sentences }
    }

    fn build_token(&self, text: String) -> Token {
        let is_punct = !text.is_empty() && text.chars().all(is_punct_char);
        let like_num = !is_punct && like_num(&text);
        let like_url = URL_RE.is_match(&text);
        let like_email = EMAIL_RE.is_match(&text);
        let is_stop = self.stopwords.contains(&text);
        let pos = tag_word(&text, is_punct, like_num, like_url || like_email);
        let lemma = self.lemma_of(&text);
        Token {
            text,
            lemma,
            pos,
            is_stop,
            is_punct,
            like_num,
            like_email,
            like_url,
        }
    }

    /// Dictionary base form: irregular table first, Snowball stem otherwise.
    pub fn lemma_of(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR_LEMMAS.get(word) {
            return (*lemma).to_string();
        }
        if word.chars().any(|c| !c.is_alphabetic() && c != '\'' && c != '\u{2019}') {
            return word.to_string();
        }
        self.stemmer.stem(word).into_owned()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into coarse sentences on `.`/`!`/`?` followed by whitespace,
/// keeping known abbreviations and dotted acronyms attached.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            while i + 1 < chars.len() && matches!(chars[i + 1], '.' | '!' | '?') {
                i += 1;
                current.push(chars[i]);
            }
            let at_break = i + 1 >= chars.len() || chars[i + 1].is_whitespace();
            if at_break && !ends_with_abbreviation(&current) {
                push_sentence(&mut sentences, &mut current);
            }
        }
        i += 1;
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

fn ends_with_abbreviation(buffer: &str) -> bool {
    let Some(last_word) = buffer.split_whitespace().last() else {
        return false;
    };
    let stripped = last_word.trim_end_matches('.');
    if stripped.is_empty() {
        return false;
    }
    // internal periods mark dotted acronyms such as "u.s."
    if stripped.contains('.') {
        return true;
    }
    let lowered = stripped.to_lowercase();
    if lowered.len() == 1 && lowered.chars().all(|c| c.is_alphabetic()) {
        return true;
    }
    ABBREVIATIONS.contains(lowered.as_str())
}

/// Whitespace tokenization with leading and trailing punctuation peeled off
/// as separate tokens; dotted acronyms keep their final period.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let mut core = chunk;
        while let Some(first) = core.chars().next() {
            if !is_punct_char(first) {
                break;
            }
            tokens.push(first.to_string());
            core = &core[first.len_utf8()..];
        }
        let mut trailing = Vec::new();
        while let Some(last) = core.chars().last() {
            if !is_punct_char(last) {
                break;
            }
            let cut = core.len() - last.len_utf8();
            let candidate = &core[..cut];
            if last == '.' && candidate.contains('.') && !candidate.ends_with('.') {
                break;
            }
            trailing.push(last.to_string());
            core = candidate;
        }
        if !core.is_empty() {
            tokens.push(core.to_string());
        }
        tokens.extend(trailing.into_iter().rev());
    }
    tokens
}

fn is_punct_char(ch: char) -> bool {
    ch.is_ascii_punctuation() || (!ch.is_alphanumeric() && !ch.is_whitespace())
}

fn like_num(token: &str) -> bool {
    let stripped: String = token.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    NUMBER_WORDS.contains(token)
}

fn tag_word(text: &str, is_punct: bool, like_num: bool, like_web: bool) -> PosTag {
    if is_punct {
        return PosTag::Punct;
    }
    if like_web {
        return PosTag::Other;
    }
    if like_num {
        return PosTag::Number;
    }
    if FUNCTION_WORDS.contains(text) {
        return PosTag::Function;
    }
    if INTERJECTIONS.contains(text) {
        return PosTag::Interjection;
    }
    if ADVERB_WORDS.contains(text) {
        return PosTag::Adverb;
    }
    if let Some(tag) = LY_EXCEPTIONS.get(text) {
        return *tag;
    }
    if text.ends_with("ly") && text.len() > 3 {
        return PosTag::Adverb;
    }
    if text.contains('.') {
        return PosTag::ProperNoun;
    }
    if IRREGULAR_VERBS.contains(text) {
        return PosTag::Verb;
    }
    if has_adjective_suffix(text) {
        return PosTag::Adjective;
    }
    if has_verb_suffix(text) {
        return PosTag::Verb;
    }
    PosTag::Noun
}

fn has_adjective_suffix(text: &str) -> bool {
    const SUFFIXES: &[&str] = &[
        "ous", "ful", "less", "able", "ible", "ish", "ive", "ic", "al",
    ];
    text.len() > 4 && SUFFIXES.iter().any(|s| text.ends_with(s))
}

fn has_verb_suffix(text: &str) -> bool {
    (text.len() > 4 && text.ends_with("ing"))
        || (text.len() > 3 && text.ends_with("ed"))
        || (text.len() > 4 && (text.ends_with("ize") || text.ends_with("ise")))
        || (text.len() > 4 && text.ends_with("ify"))
}

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://|www\.)\S+$|^[a-z0-9][\w-]*(?:\.[\w-]+)*\.(?:com|org|net|gov|edu|io)(?:/\S*)?$")
        .expect("valid regex")
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w-]+(?:\.[\w-]+)+$").expect("valid regex"));

// Function words missing from the upstream stopword list.
const EXTRA_STOPWORDS: &[&str] = &["according", "amid", "despite", "via", "per"];

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc",
        "corp", "ltd", "co", "llc", "gov", "sen", "rep", "gen", "col", "capt",
        "lt", "sgt", "dept", "est", "approx", "mt", "ft", "jan", "feb", "mar",
        "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]
    .into_iter()
    .collect()
});

static NUMBER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
        "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
        "sixteen", "seventeen", "eighteen", "nineteen", "twenty", "thirty",
        "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred",
        "thousand", "million", "billion", "trillion", "dozen",
    ]
    .into_iter()
    .collect()
});

static FUNCTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "each", "every",
        "either", "neither", "of", "in", "on", "at", "by", "for", "with",
        "about", "against", "between", "into", "through", "during", "before",
        "after", "to", "from", "up", "down", "out", "off", "over", "under",
        "and", "or", "but", "nor", "so", "yet", "if", "because", "although",
        "though", "while", "unless", "whether", "than", "as", "when", "where",
        "am", "is", "are", "was", "were", "be", "been", "being", "do", "does",
        "did", "have", "has", "had", "will", "would", "shall", "should",
        "can", "could", "may", "might", "must", "not",
    ]
    .into_iter()
    .collect()
});

static INTERJECTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "oh", "ah", "hey", "wow", "hello", "hi", "ok", "okay", "hmm", "oops",
        "ouch", "yeah", "alas", "hooray",
    ]
    .into_iter()
    .collect()
});

static ADVERB_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "however", "instead", "perhaps", "maybe", "yesterday", "today",
        "tomorrow", "soon", "often", "always", "never", "already", "still",
        "ago", "almost", "together", "meanwhile", "moreover", "furthermore",
        "nevertheless", "nonetheless", "anyway", "somehow", "somewhat",
    ]
    .into_iter()
    .collect()
});

static LY_EXCEPTIONS: Lazy<HashMap<&'static str, PosTag>> = Lazy::new(|| {
    [
        ("family", PosTag::Noun),
        ("supply", PosTag::Noun),
        ("assembly", PosTag::Noun),
        ("rally", PosTag::Noun),
        ("ally", PosTag::Noun),
        ("belly", PosTag::Noun),
        ("jelly", PosTag::Noun),
        ("folly", PosTag::Noun),
        ("tally", PosTag::Noun),
        ("lily", PosTag::Noun),
        ("monopoly", PosTag::Noun),
        ("anomaly", PosTag::Noun),
        ("butterfly", PosTag::Noun),
        ("italy", PosTag::ProperNoun),
        ("july", PosTag::ProperNoun),
        ("fly", PosTag::Verb),
        ("apply", PosTag::Verb),
        ("reply", PosTag::Verb),
        ("imply", PosTag::Verb),
        ("multiply", PosTag::Verb),
        ("rely", PosTag::Verb),
        ("comply", PosTag::Verb),
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "say", "says", "made", "make", "took", "take", "went", "go", "goes",
        "got", "get", "gets", "saw", "see", "sees", "came", "come", "comes",
        "gave", "give", "gives", "told", "tell", "tells", "knew", "know",
        "knows", "grew", "grow", "grows", "drew", "draw", "draws", "wrote",
        "write", "writes", "spoke", "speak", "speaks", "ran", "run", "runs",
        "met", "meet", "meets", "paid", "pay", "pays", "sold", "sell",
        "sells", "bought", "buy", "buys", "brought", "bring", "brings",
        "began", "begin", "begins", "rose", "rise", "rises", "fell", "fall",
        "falls", "held", "hold", "holds", "kept", "keep", "keeps", "found",
        "find", "finds", "won", "win", "wins", "lost", "lose", "loses",
        "led", "lead", "leads", "felt", "feel", "feels", "put", "puts",
        "set", "sets", "left", "leave", "leaves",
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_LEMMAS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("said", "say"),
        ("went", "go"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("took", "take"),
        ("made", "make"),
        ("saw", "see"),
        ("came", "come"),
        ("gave", "give"),
        ("got", "get"),
        ("told", "tell"),
        ("knew", "know"),
        ("grew", "grow"),
        ("drew", "draw"),
        ("wrote", "write"),
        ("spoke", "speak"),
        ("ran", "run"),
        ("met", "meet"),
        ("paid", "pay"),
        ("sold", "sell"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("began", "begin"),
        ("rose", "rise"),
        ("fell", "fall"),
        ("held", "hold"),
        ("kept", "keep"),
        ("found", "find"),
        ("left", "leave"),
        ("won", "win"),
        ("lost", "lose"),
        ("led", "lead"),
        ("felt", "feel"),
        ("better", "good"),
        ("worse", "bad"),
    ]
    .into_iter()
    .collect()
});
