//! Gazetteer and pattern based named-entity recognition over news text.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fmt,
    str::FromStr,
    sync::Arc,
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Semantic categories assigned to recognized spans. The first nine are the
/// retained target set; the remainder exist so that date-like and
/// number-like spans can be recognized and then discarded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    Law,
    Date,
    Time,
    Money,
    Percent,
    Cardinal,
}

/// The fixed label set retained by the extractor.
pub const TARGET_LABELS: [EntityLabel; 9] = [
    EntityLabel::Person,
    EntityLabel::Norp,
    EntityLabel::Fac,
    EntityLabel::Org,
    EntityLabel::Gpe,
    EntityLabel::Loc,
    EntityLabel::Product,
    EntityLabel::Event,
    EntityLabel::Law,
];

impl EntityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Fac => "FAC",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::Law => "LAW",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }

    pub fn is_target(self) -> bool {
        TARGET_LABELS.contains(&self)
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PERSON" => Ok(EntityLabel::Person),
            "NORP" => Ok(EntityLabel::Norp),
            "FAC" => Ok(EntityLabel::Fac),
            "ORG" => Ok(EntityLabel::Org),
            "GPE" => Ok(EntityLabel::Gpe),
            "LOC" => Ok(EntityLabel::Loc),
            "PRODUCT" => Ok(EntityLabel::Product),
            "EVENT" => Ok(EntityLabel::Event),
            "LAW" => Ok(EntityLabel::Law),
            "DATE" => Ok(EntityLabel::Date),
            "TIME" => Ok(EntityLabel::Time),
            "MONEY" => Ok(EntityLabel::Money),
            "PERCENT" => Ok(EntityLabel::Percent),
            "CARDINAL" => Ok(EntityLabel::Cardinal),
            other => Err(format!("unknown entity label: {other}")),
        }
    }
}

/// Recognized span with byte offsets relative to the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Mention {
    pub start: usize,
    pub end: usize,
    pub label: EntityLabel,
    pub text: String,
}

/// Trait for entity recognizer implementations.
pub trait Recognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Mention>;
}

/// Per-category unique surfaces plus the duplicate-counting mention total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub entities: BTreeMap<EntityLabel, BTreeSet<String>>,
    pub mentions: usize,
}

/// A fresh category map holding every target label with an empty set.
pub fn empty_categories() -> BTreeMap<EntityLabel, BTreeSet<String>> {
    TARGET_LABELS
        .iter()
        .map(|label| (*label, BTreeSet::new()))
        .collect()
}

/// Collect target-set mentions: unique surfaces per category, duplicates
/// counted in the total. Non-target mentions are dropped on the floor.
pub fn target_entities(recognizer: &dyn Recognizer, text: &str) -> EntitySummary {
    let mut entities = empty_categories();
    let mut mentions = 0;
    for mention in recognizer.recognize(text) {
        if let Some(set) = entities.get_mut(&mention.label) {
            set.insert(mention.text);
            mentions += 1;
        }
    }
    EntitySummary { entities, mentions }
}

/// Load the gazetteer-backed recognizer.
pub fn load_recognizer() -> Arc<dyn Recognizer> {
    Arc::new(GazetteerRecognizer) as Arc<dyn Recognizer>
}

/// Deterministic recognizer combining curated term dictionaries with
/// structural capitalization rules and numeric patterns.
pub struct GazetteerRecognizer;

impl Recognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Vec<Mention> {
        let mut mentions = Vec::new();
        let mut claimed: Vec<(usize, usize)> = Vec::new();
        collect_token_mentions(text, &mut mentions, &mut claimed);
        collect_pattern_mentions(text, &mut mentions, &mut claimed);
        mentions.sort_by_key(|m| (m.start, m.end));
        mentions
    }
}

const MAX_NGRAM: usize = 4;

fn collect_token_mentions(
    text: &str,
    mentions: &mut Vec<Mention>,
    claimed: &mut Vec<(usize, usize)>,
) {
    let spans = word_spans(text);
    let mut i = 0;
    while i < spans.len() {
        let (start, _) = spans[i];
        if overlaps_any(claimed, spans[i].0, spans[i].1) {
            i += 1;
            continue;
        }
        if let Some((mention, consumed)) = match_titled_person(text, &spans[i..]) {
            claimed.push((start, mention.end));
            mentions.push(mention);
            i += consumed;
            continue;
        }
        let max_n = MAX_NGRAM.min(spans.len() - i);
        let mut matched = None;
        for n in (1..=max_n).rev() {
            let window = &spans[i..i + n];
            let end = window[n - 1].1;
            if overlaps_any(claimed, start, end) || !contiguous(text, window) {
                continue;
            }
            let surface = &text[start..end];
            if let Some(label) = match_window(text, window, surface) {
                matched = Some((end, n, label, surface.to_string()));
                break;
            }
        }
        if let Some((end, n, label, surface)) = matched {
            claimed.push((start, end));
            mentions.push(Mention {
                start,
                end,
                label,
                text: surface,
            });
            i += n;
        } else {
            i += 1;
        }
    }
}

fn match_window(text: &str, window: &[(usize, usize)], surface: &str) -> Option<EntityLabel> {
    let n = window.len();
    if has_uppercase(surface) {
        if let Some(label) = GAZETTEER.get(&normalize_key(surface)) {
            return Some(*label);
        }
    }
    if n >= 2 {
        if let Some(label) = match_suffix_sequence(text, window) {
            return Some(label);
        }
    }
    if n == 2 {
        let first = token_text(text, window[0]);
        let second = token_text(text, window[1]);
        if STORM_PREFIXES.contains(stripped_lower(first).as_str())
            && is_capitalized(first)
            && is_name_token(second)
        {
            return Some(EntityLabel::Event);
        }
    }
    if (2..=3).contains(&n) {
        if let Some(label) = match_name_pair(text, window) {
            return Some(label);
        }
    }
    if n == 1 {
        let token = token_text(text, window[0]);
        if is_unknown_acronym(token) {
            return Some(EntityLabel::Org);
        }
    }
    None
}

/// Capitalized run ending in a structural suffix such as "Inc." or "Act".
fn match_suffix_sequence(text: &str, window: &[(usize, usize)]) -> Option<EntityLabel> {
    let n = window.len();
    let first = token_text(text, window[0]);
    let last = token_text(text, window[n - 1]);
    if !is_capitalized(first) || !is_capitalized(last) {
        return None;
    }
    // A leading determiner stays outside the span; the shorter window at the
    // next token picks the name up instead.
    if matches!(stripped_lower(first).as_str(), "the" | "a" | "an") {
        return None;
    }
    // Every interior token must be capitalized too; a lowercase word means
    // the window has leaked past the name ("Shares of Nexara Corp.").
    for span in &window[1..n - 1] {
        if !is_capitalized(token_text(text, *span)) {
            return None;
        }
    }
    let suffix = stripped_lower(last);
    if ORG_SUFFIXES.contains(suffix.as_str()) {
        Some(EntityLabel::Org)
    } else if FAC_SUFFIXES.contains(suffix.as_str()) {
        Some(EntityLabel::Fac)
    } else if LAW_SUFFIXES.contains(suffix.as_str()) {
        Some(EntityLabel::Law)
    } else if EVENT_SUFFIXES.contains(suffix.as_str()) {
        Some(EntityLabel::Event)
    } else {
        None
    }
}

/// Adjacent capitalized tokens that belong to no other category read as a
/// person name ("Tim Cook", "John F. Kennedy").
fn match_name_pair(text: &str, window: &[(usize, usize)]) -> Option<EntityLabel> {
    let tokens: Vec<&str> = window.iter().map(|s| token_text(text, *s)).collect();
    if !tokens.iter().all(|t| is_name_token(t) || is_initial(t)) {
        return None;
    }
    if is_initial(tokens[0]) || is_initial(tokens[tokens.len() - 1]) {
        return None;
    }
    for token in &tokens {
        let lowered = stripped_lower(token);
        if NAME_GUARDS.contains(lowered.as_str())
            || GAZETTEER.contains_key(lowered.as_str())
            || PERSON_TITLES.contains(lowered.as_str())
            || is_structural_suffix(&lowered)
        {
            return None;
        }
    }
    Some(EntityLabel::Person)
}

/// "President Biden" style mentions; the emitted span covers the name only.
fn match_titled_person(text: &str, spans: &[(usize, usize)]) -> Option<(Mention, usize)> {
    let title = token_text(text, spans[0]);
    if !PERSON_TITLES.contains(stripped_lower(title).as_str()) {
        return None;
    }
    let mut names = Vec::new();
    for span in spans.iter().skip(1).take(2) {
        let token = token_text(text, *span);
        let lowered = stripped_lower(token);
        if (is_name_token(token) || is_initial(token))
            && !GAZETTEER.contains_key(lowered.as_str())
            && !NAME_GUARDS.contains(lowered.as_str())
            && !is_structural_suffix(&lowered)
        {
            names.push(*span);
        } else {
            break;
        }
    }
    let last = *names.last()?;
    if names.iter().all(|s| is_initial(token_text(text, *s))) {
        return None;
    }
    // Let dictionary phrases like "Queen Elizabeth" and trailing suffixes
    // like "General Dynamics Corp." win over the title heuristic.
    if GAZETTEER.contains_key(normalize_key(&text[spans[0].0..last.1]).as_str()) {
        return None;
    }
    if let Some(next) = spans.get(1 + names.len()) {
        let lowered = stripped_lower(token_text(text, *next));
        if is_capitalized(token_text(text, *next)) && is_structural_suffix(&lowered) {
            return None;
        }
    }
    let start = names[0].0;
    let end = last.1;
    let mention = Mention {
        start,
        end,
        label: EntityLabel::Person,
        text: text[start..end].to_string(),
    };
    Some((mention, 1 + names.len()))
}

fn is_structural_suffix(lowered: &str) -> bool {
    ORG_SUFFIXES.contains(lowered)
        || FAC_SUFFIXES.contains(lowered)
        || LAW_SUFFIXES.contains(lowered)
        || EVENT_SUFFIXES.contains(lowered)
}

fn collect_pattern_mentions(
    text: &str,
    mentions: &mut Vec<Mention>,
    claimed: &mut Vec<(usize, usize)>,
) {
    let passes: [(&Lazy<Regex>, EntityLabel); 6] = [
        (&MONEY_RE, EntityLabel::Money),
        (&PERCENT_RE, EntityLabel::Percent),
        (&TIME_RE, EntityLabel::Time),
        (&DATE_RE, EntityLabel::Date),
        (&YEAR_RE, EntityLabel::Date),
        (&CARDINAL_RE, EntityLabel::Cardinal),
    ];
    for (re, label) in passes {
        for found in re.find_iter(text) {
            if overlaps_any(claimed, found.start(), found.end()) {
                continue;
            }
            claimed.push((found.start(), found.end()));
            mentions.push(Mention {
                start: found.start(),
                end: found.end(),
                label,
                text: found.as_str().to_string(),
            });
        }
    }
}

fn word_spans(text: &str) -> Vec<(usize, usize)> {
    WORD_RE
        .find_iter(text)
        .filter_map(|m| {
            let start = m.start();
            let mut end = m.end();
            let mut token = m.as_str();
            for clitic in ["'s", "\u{2019}s"] {
                if let Some(stripped) = token.strip_suffix(clitic) {
                    if !stripped.is_empty() {
                        end -= clitic.len();
                        token = stripped;
                    }
                    break;
                }
            }
            if token.ends_with('.') {
                let trimmed = token.trim_end_matches('.');
                let keep = trimmed.contains('.')
                    || (trimmed.len() == 1 && trimmed.starts_with(|c: char| c.is_ascii_uppercase()))
                    || DOTTED_ABBREVIATIONS.contains(trimmed.to_lowercase().as_str());
                if !keep {
                    end -= token.len() - trimmed.len();
                }
            }
            (end > start).then_some((start, end))
        })
        .collect()
}

fn token_text(text: &str, span: (usize, usize)) -> &str {
    &text[span.0..span.1]
}

fn contiguous(text: &str, window: &[(usize, usize)]) -> bool {
    window
        .windows(2)
        .all(|pair| text[pair[0].1..pair[1].0].chars().all(char::is_whitespace))
}

fn overlaps_any(claimed: &[(usize, usize)], start: usize, end: usize) -> bool {
    claimed.iter().any(|(s, e)| start < *e && *s < end)
}

fn normalize_key(surface: &str) -> String {
    surface
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn stripped_lower(token: &str) -> String {
    token.trim_end_matches('.').to_lowercase()
}

fn has_uppercase(surface: &str) -> bool {
    surface.chars().any(char::is_uppercase)
}

fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

fn is_name_token(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_uppercase()
        && token.chars().count() >= 2
        && chars.all(|c| c.is_alphabetic() || c == '\'' || c == '\u{2019}' || c == '-')
}

/// Middle initials such as "F." in "John F. Kennedy".
fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some('.'), None) if first.is_uppercase()
    )
}

fn is_unknown_acronym(token: &str) -> bool {
    let len = token.chars().count();
    if !(3..=6).contains(&len) || !token.chars().all(|c| c.is_ascii_uppercase()) {
        return false;
    }
    if token.chars().all(|c| matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M')) {
        return false;
    }
    !ACRONYM_BLOCKLIST.contains(token)
}

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9][A-Za-z0-9&'’.\-]*").expect("valid regex"));

static MONEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\s?\d[\d,]*(?:\.\d+)?(?:\s(?:million|billion|trillion))?").expect("valid regex")
});

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?\s?(?:%|percent\b)").expect("valid regex"));

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}:\d{2}(?:\s?(?:a\.m\.|p\.m\.|am|pm|AM|PM))?").expect("valid regex")
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?(?:,\s?\d{4})?\b",
    )
    .expect("valid regex")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid regex"));

static CARDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:,\d{3})*(?:\.\d+)?\b").expect("valid regex"));

static DOTTED_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "inc", "corp", "ltd", "co", "llc", "mr", "mrs", "ms", "dr", "st", "jr",
        "sr", "prof", "gen", "col", "capt", "lt", "sgt", "gov", "sen", "rep",
        "v", "vs", "etc",
    ]
    .into_iter()
    .collect()
});

static ORG_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "inc", "corp", "ltd", "llc", "co", "plc", "company", "corporation",
        "group", "holdings", "university", "institute", "ministry",
        "department", "agency", "authority", "commission", "committee",
        "association", "federation", "bank", "airlines", "airways",
        "partners", "industries", "technologies", "systems", "motors",
        "media", "council", "foundation", "fund", "times", "post", "journal",
        "news", "network",
    ]
    .into_iter()
    .collect()
});

static FAC_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "airport", "bridge", "tower", "stadium", "arena", "station", "museum",
        "library", "dam", "tunnel", "highway", "hospital", "cathedral",
        "palace", "castle", "hotel", "center", "centre", "hall", "park",
    ]
    .into_iter()
    .collect()
});

static LAW_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "act", "law", "treaty", "amendment", "constitution", "code", "bill",
        "accord", "agreement", "directive", "statute", "protocol",
        "convention", "doctrine",
    ]
    .into_iter()
    .collect()
});

static EVENT_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "war", "cup", "olympics", "games", "festival", "summit", "conference",
        "championship", "awards", "prix", "marathon", "expo",
    ]
    .into_iter()
    .collect()
});

static STORM_PREFIXES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["hurricane", "typhoon", "cyclone", "storm"].into_iter().collect());

static PERSON_TITLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "professor", "president", "senator",
        "sen", "gov", "governor", "rep", "representative", "judge", "justice",
        "sir", "dame", "lord", "lady", "pope", "king", "queen", "prince",
        "princess", "minister", "chancellor", "mayor", "secretary", "gen",
        "general", "col", "colonel", "capt", "captain", "coach",
    ]
    .into_iter()
    .collect()
});

static NAME_GUARDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "this", "that", "these", "those", "new", "north",
        "south", "east", "west", "san", "los", "las", "el", "la", "le", "de",
        "van", "von", "mount", "lake", "fort", "saint", "port", "cape",
        "lower", "upper", "great", "little", "big", "old", "royal",
        "national", "federal", "central", "united", "first", "second",
        "third", "last", "next", "early", "late", "however", "meanwhile",
        "earlier", "later", "tomorrow", "yesterday", "today", "finally",
        "instead", "still", "monday", "tuesday", "wednesday", "thursday",
        "friday", "saturday", "sunday", "january", "february", "march",
        "april", "may", "june", "july", "august", "september", "october",
        "november", "december",
    ]
    .into_iter()
    .collect()
});

static ACRONYM_BLOCKLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "THE", "AND", "FOR", "NOT", "BUT", "ALL", "NEW", "NOW", "OUT", "TOP",
        "END", "CEO", "CFO", "CTO", "COO", "GDP", "GMT", "EST", "PST", "PDT",
        "USD", "EUR", "GBP", "FAQ", "DIY", "DNA", "RNA", "HIV", "AIDS",
        "PDF", "URL", "HTML", "HTTP", "WWW", "BREAKING", "UPDATE",
    ]
    .into_iter()
    .collect()
});

const GPE_TERMS: &[&str] = &[
    "United States", "U.S.", "US", "USA", "America", "United Kingdom", "U.K.",
    "UK", "Britain", "Great Britain", "England", "Scotland", "Wales",
    "Ireland", "France", "Germany", "Italy", "Spain", "Portugal", "Russia",
    "China", "Japan", "India", "Pakistan", "Bangladesh", "Brazil", "Mexico",
    "Canada", "Australia", "New Zealand", "Egypt", "Israel", "Iran", "Iraq",
    "Syria", "Turkey", "Greece", "Poland", "Ukraine", "Sweden", "Norway",
    "Denmark", "Finland", "Netherlands", "Belgium", "Switzerland", "Austria",
    "Hungary", "Romania", "Bulgaria", "Serbia", "Croatia", "South Korea",
    "North Korea", "Vietnam", "Thailand", "Indonesia", "Philippines",
    "Malaysia", "Singapore", "Saudi Arabia", "Qatar", "Kuwait", "Jordan",
    "Lebanon", "Afghanistan", "Nigeria", "Ghana", "Kenya", "South Africa",
    "Ethiopia", "Morocco", "Algeria", "Tunisia", "Libya", "Argentina",
    "Chile", "Colombia", "Venezuela", "Peru", "Cuba", "Panama",
    "Paris", "London", "Berlin", "Munich", "Frankfurt", "Madrid",
    "Barcelona", "Rome", "Milan", "Moscow", "Beijing", "Shanghai",
    "Shenzhen", "Guangzhou", "Tokyo", "Osaka", "Seoul", "Delhi", "New Delhi",
    "Mumbai", "Karachi", "Istanbul", "Dubai", "Abu Dhabi", "Cairo", "Lagos",
    "Nairobi", "Sydney", "Melbourne", "Toronto", "Vancouver", "Montreal",
    "Chicago", "Boston", "Seattle", "Houston", "Dallas", "Austin", "Miami",
    "Atlanta", "Denver", "Phoenix", "Detroit", "Philadelphia", "Baltimore",
    "Pittsburgh", "Washington", "New York", "New York City", "NYC",
    "Los Angeles", "San Francisco", "San Diego", "San Jose", "Las Vegas",
    "New Orleans", "Mexico City", "Sao Paulo", "Rio de Janeiro",
    "Buenos Aires", "Lima", "Bogota", "Amsterdam", "Brussels", "Geneva",
    "Zurich", "Vienna", "Prague", "Budapest", "Warsaw", "Athens", "Lisbon",
    "Dublin", "Edinburgh", "Stockholm", "Oslo", "Copenhagen", "Helsinki",
    "Kyiv", "Hong Kong", "Taipei", "Bangkok", "Jakarta", "Manila",
    "Baghdad", "Tehran", "Damascus", "Jerusalem", "Tel Aviv", "Riyadh",
    "Doha",
    "California", "Texas", "Florida", "Ohio", "Georgia", "Virginia",
    "Michigan", "Arizona", "Oregon", "Nevada", "Colorado", "Utah", "Alaska",
    "Hawaii", "Kansas", "Iowa", "Missouri", "Alabama", "Louisiana",
    "Kentucky", "Tennessee", "Indiana", "Illinois", "Wisconsin", "Minnesota",
    "Nebraska", "Oklahoma", "Arkansas", "Mississippi", "Montana", "Wyoming",
    "Idaho", "Maine", "Vermont", "Massachusetts", "Connecticut", "Maryland",
    "Delaware", "New Jersey", "New Hampshire", "Rhode Island",
    "Pennsylvania", "North Carolina", "South Carolina", "North Dakota",
    "South Dakota", "New Mexico", "West Virginia",
];

const LOC_TERMS: &[&str] = &[
    "Europe", "Asia", "Africa", "North America", "South America",
    "Latin America", "Antarctica", "Oceania", "Middle East",
    "Pacific Ocean", "Atlantic Ocean", "Indian Ocean", "Arctic", "Pacific",
    "Atlantic", "Mediterranean", "Caribbean", "Alps", "Himalayas", "Andes",
    "Rocky Mountains", "Mount Everest", "Sahara", "Amazon River", "Nile",
    "Mississippi River", "Silicon Valley", "Wall Street", "Gulf of Mexico",
    "Persian Gulf", "Red Sea", "Black Sea", "Baltic Sea", "North Sea",
    "Great Lakes",
];

const NORP_TERMS: &[&str] = &[
    "American", "Americans", "British", "French", "German", "Germans",
    "Italian", "Italians", "Spanish", "Russian", "Russians", "Chinese",
    "Japanese", "Korean", "Koreans", "North Korean", "South Korean",
    "Indian", "Indians", "Pakistani", "Brazilian", "Mexican", "Canadian",
    "Australian", "Egyptian", "Israeli", "Israelis", "Iranian", "Iranians",
    "Iraqi", "Turkish", "Greek", "Polish", "Ukrainian", "Swedish",
    "Norwegian", "Danish", "Finnish", "Dutch", "Belgian", "Swiss",
    "Austrian", "Irish", "European", "Europeans", "African", "Africans",
    "Asian", "Asians", "Arab", "Arabs", "Kurdish", "Kurds", "Palestinian",
    "Palestinians", "Republican", "Republicans", "Democrat", "Democrats",
    "Democratic", "Conservative", "Conservatives", "Labour", "Liberal",
    "Liberals", "Socialist", "Communist", "Communists", "Christian",
    "Christians", "Muslim", "Muslims", "Jewish", "Jews", "Catholic",
    "Catholics", "Protestant", "Protestants", "Buddhist", "Buddhists",
    "Hindu", "Hindus", "Sikh", "Sikhs",
];

const ORG_TERMS: &[&str] = &[
    "United Nations", "UN", "European Union", "EU", "World Bank",
    "International Monetary Fund", "IMF", "World Health Organization",
    "WHO", "World Trade Organization", "WTO", "NATO", "NASA", "FBI", "CIA",
    "Pentagon", "White House", "Congress", "Senate",
    "House of Representatives", "Supreme Court", "Federal Reserve",
    "European Central Bank", "ECB", "Bank of England", "OPEC", "Interpol",
    "Red Cross", "Greenpeace", "Amnesty International", "UNICEF", "UNESCO",
    "Apple", "Google", "Alphabet", "Microsoft", "Amazon", "Facebook",
    "Meta", "Twitter", "Tesla", "Netflix", "Intel", "IBM", "Oracle",
    "Samsung", "Sony", "Nokia", "Toyota", "Honda", "Volkswagen", "BMW",
    "Ford", "General Motors", "Boeing", "Airbus", "Shell", "BP",
    "ExxonMobil", "Chevron", "Goldman Sachs", "JPMorgan", "Morgan Stanley",
    "Citigroup", "HSBC", "Barclays", "Deutsche Bank", "Reuters",
    "Bloomberg", "BBC", "CNN", "Fox News", "New York Times",
    "Washington Post", "Wall Street Journal", "Guardian", "Al Jazeera",
    "Associated Press", "American Airlines", "Harvard", "Stanford", "MIT",
    "Oxford", "Yale", "Princeton", "McDonald's", "Coca-Cola", "PepsiCo",
    "Walmart", "Starbucks", "Nike", "Adidas", "Pfizer", "Moderna",
    "AstraZeneca", "Johnson & Johnson", "Airbnb", "Uber", "SpaceX",
];

const PRODUCT_TERMS: &[&str] = &[
    "iPhone", "iPad", "MacBook", "Apple Watch", "Android", "Windows",
    "Xbox", "PlayStation", "Kindle", "Boeing 737", "Boeing 747",
    "Airbus A380", "Falcon 9", "Model 3", "Walkman", "Concorde",
    "Photoshop", "PowerPoint",
];

const EVENT_TERMS: &[&str] = &[
    "Olympics", "Olympic Games", "World Cup", "Super Bowl", "World War I",
    "World War II", "Cold War", "Brexit", "Christmas", "Easter",
    "Thanksgiving", "Ramadan", "Oscars", "Academy Awards", "Grammy Awards",
    "Wimbledon", "Tour de France", "Black Friday",
];

const PERSON_TERMS: &[&str] = &[
    "Barack Obama", "Obama", "Donald Trump", "Trump", "Joe Biden", "Biden",
    "Hillary Clinton", "Vladimir Putin", "Putin", "Emmanuel Macron",
    "Macron", "Angela Merkel", "Merkel", "Boris Johnson", "Xi Jinping",
    "Narendra Modi", "Modi", "Justin Trudeau", "Trudeau", "Elon Musk",
    "Musk", "Jeff Bezos", "Bezos", "Bill Gates", "Mark Zuckerberg",
    "Zuckerberg", "Tim Cook", "Warren Buffett", "Taylor Swift", "Beyonce",
    "Cristiano Ronaldo", "Lionel Messi", "Messi", "Roger Federer",
    "Serena Williams", "Pope Francis", "Queen Elizabeth", "King Charles",
    "Winston Churchill", "Nelson Mandela", "Albert Einstein",
];

const LAW_TERMS: &[&str] = &[
    "GDPR", "Obamacare", "Roe v. Wade", "Magna Carta", "Bill of Rights",
    "First Amendment", "Second Amendment", "Patriot Act",
    "Affordable Care Act", "Clean Air Act", "Paris Agreement",
    "Kyoto Protocol", "Geneva Convention",
];

static GAZETTEER: Lazy<HashMap<String, EntityLabel>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let groups: [(&[&str], EntityLabel); 8] = [
        (PERSON_TERMS, EntityLabel::Person),
        (NORP_TERMS, EntityLabel::Norp),
        (ORG_TERMS, EntityLabel::Org),
        (GPE_TERMS, EntityLabel::Gpe),
        (LOC_TERMS, EntityLabel::Loc),
        (PRODUCT_TERMS, EntityLabel::Product),
        (EVENT_TERMS, EntityLabel::Event),
        (LAW_TERMS, EntityLabel::Law),
    ];
    for (terms, label) in groups {
        for term in terms {
            map.entry(normalize_key(term)).or_insert(label);
        }
    }
    map
});
