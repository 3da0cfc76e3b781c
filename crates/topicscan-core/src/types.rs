//! Domain types passed between the extractor, the matcher and the aggregator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::TopicError;

/// Every accepted spelling of one content word (inflections, plural, ...).
pub type WordForms = BTreeSet<String>;

/// A locale tag such as `en_US`, `de-AT` or `nl`.
///
/// Only the language subtag drives behaviour; the region is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    tag: String,
    language: String,
}

impl Locale {
    pub fn language(&self) -> &str { &self.language }
    pub fn as_str(&self) -> &str { &self.tag }
}

impl FromStr for Locale {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        let language = tag.split(['_', '-']).next().unwrap_or_default();
        let valid = (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
        if !valid { return Err(TopicError::InvalidLocale(s.to_string())); }
        Ok(Self { tag: tag.to_string(), language: language.to_ascii_lowercase() })
    }
}

impl TryFrom<String> for Locale {
    type Error = TopicError;
    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self { value.tag }
}

impl Default for Locale {
    fn default() -> Self { Self { tag: "en_US".to_string(), language: "en".to_string() } }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.tag) }
}

/// The input of one analysis: marked-up body, the keyphrase under test and
/// its synonyms (comma separated, as authors type them).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub keyphrase: String,
    pub synonyms: String,
    pub locale: Locale,
}

impl Document {
    pub fn new(text: impl Into<String>, keyphrase: impl Into<String>, locale: Locale) -> Self {
        Self { text: text.into(), keyphrase: keyphrase.into(), synonyms: String::new(), locale }
    }

    pub fn with_synonyms(mut self, synonyms: impl Into<String>) -> Self {
        self.synonyms = synonyms.into();
        self
    }

    /// Synonym phrases in author order, blanks dropped.
    pub fn synonym_phrases(&self) -> Vec<&str> {
        self.synonyms.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
    }
}

/// Keyphrase and synonym word forms for one locale.
///
/// Forms are grouped per content word: a phrase is matched word by word, and a
/// word counts as present when any of its forms is. All forms are stored
/// lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFormSet {
    base: String,
    keyphrase_forms: Vec<WordForms>,
    synonyms_forms: Vec<Vec<WordForms>>,
}

impl TopicFormSet {
    pub fn new(base: impl Into<String>, keyphrase_forms: Vec<WordForms>, synonyms_forms: Vec<Vec<WordForms>>) -> Self {
        Self {
            base: base.into(),
            keyphrase_forms: normalize_phrase(keyphrase_forms),
            synonyms_forms: synonyms_forms.into_iter().map(normalize_phrase).filter(|p| !p.is_empty()).collect(),
        }
    }

    /// A set with a base phrase but no forms; matches nothing.
    pub fn empty(base: impl Into<String>) -> Self {
        Self { base: base.into(), ..Self::default() }
    }

    pub fn base(&self) -> &str { &self.base }
    pub fn keyphrase_forms(&self) -> &[WordForms] { &self.keyphrase_forms }
    pub fn synonyms_forms(&self) -> &[Vec<WordForms>] { &self.synonyms_forms }

    /// Every form of the keyphrase and all synonyms, flattened.
    pub fn forms(&self) -> BTreeSet<&str> {
        self.keyphrase_forms
            .iter()
            .chain(self.synonyms_forms.iter().flatten())
            .flatten()
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool { self.keyphrase_forms.is_empty() && self.synonyms_forms.is_empty() }
}

fn normalize_phrase(words: Vec<WordForms>) -> Vec<WordForms> {
    words
        .into_iter()
        .map(|forms| forms.into_iter().map(|f| f.trim().to_lowercase()).filter(|f| !f.is_empty()).collect::<WordForms>())
        .filter(|forms| !forms.is_empty())
        .collect()
}

/// One heading pulled out of a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingSegment {
    pub position: usize,
    pub level: u8,
    pub text: String,
}

/// Which phrase produced a `MatchResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchSource {
    Keyphrase,
    /// Index into `TopicFormSet::synonyms_forms`.
    Synonym(usize),
}

/// Outcome of matching a topic against one text segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub count_word_matches: usize,
    /// Share of the phrase's content words found in the segment, 0..=100.
    pub percent_word_matches: u8,
    pub matched_forms: Vec<String>,
    pub source: MatchSource,
}

impl MatchResult {
    pub fn none(source: MatchSource) -> Self {
        Self { count_word_matches: 0, percent_word_matches: 0, matched_forms: Vec::new(), source }
    }
}

/// How many top-level headings reflect the topic.
///
/// Invariants: `matches <= count`; `percent_reflecting_topic` is
/// `matches / count * 100`, or `0` when there are no headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    pub count: usize,
    pub matches: usize,
    pub percent_reflecting_topic: f64,
}

impl CoverageResult {
    pub fn from_counts(count: usize, matches: usize) -> Self {
        let matches = matches.min(count);
        if count == 0 { return Self::default(); }
        #[allow(clippy::cast_precision_loss)]
        let percent_reflecting_topic = matches as f64 / count as f64 * 100.0;
        Self { count, matches, percent_reflecting_topic }
    }
}
