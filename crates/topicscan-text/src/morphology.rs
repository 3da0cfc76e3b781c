//! Keyphrase expansion without morphology data files.
//!
//! Every supported language gets its surface forms; English additionally gets
//! regular singular/plural pairs. Function words are dropped from a phrase when
//! the language has a list, unless nothing else would remain.
use std::collections::HashSet;

use tracing::debug;

use topicscan_core::error::{Result, TopicError};
use topicscan_core::traits::{FunctionWords, MorphologyExpander, WordTokenizer};
use topicscan_core::types::{Locale, TopicFormSet, WordForms};

/// Languages with function-word lists plus those matched on surface forms only.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "de", "fr", "es", "nl", "it", "pt", "sv", "pl", "da", "nb"];

pub struct BasicMorphology<T, F> {
	tokenizer: T,
	function_words: F,
	languages: HashSet<&'static str>,
}

impl<T, F> BasicMorphology<T, F> where T: WordTokenizer, F: FunctionWords {
	pub fn new(tokenizer: T, function_words: F) -> Self {
		Self { tokenizer, function_words, languages: SUPPORTED_LANGUAGES.iter().copied().collect() }
	}

	pub fn supports(&self, locale: &Locale) -> bool { self.languages.contains(locale.language()) }

	pub fn function_words(&self) -> &F { &self.function_words }

	fn phrase_forms(&self, phrase: &str, locale: &Locale) -> Vec<WordForms> {
		let words = self.tokenizer.words(phrase, locale);
		let content: Vec<&String> = words.iter().filter(|w| !self.function_words.is_function_word(w, locale)).collect();
		let kept: Vec<&String> = if content.is_empty() { words.iter().collect() } else { content };
		kept.into_iter().map(|w| word_forms(w, locale)).collect()
	}
}

impl<T, F> MorphologyExpander for BasicMorphology<T, F> where T: WordTokenizer, F: FunctionWords {
	fn expand(&self, keyphrase: &str, synonyms: &[&str], locale: &Locale) -> Result<TopicFormSet> {
		if !self.supports(locale) { return Err(TopicError::UnsupportedLocale(locale.to_string())); }
		let keyphrase_forms = self.phrase_forms(keyphrase, locale);
		let synonyms_forms: Vec<Vec<WordForms>> = synonyms.iter().map(|s| self.phrase_forms(s, locale)).collect();
		debug!(locale = %locale, keyphrase_words = keyphrase_forms.len(), synonyms = synonyms_forms.len(), "expanded topic forms");
		Ok(TopicFormSet::new(keyphrase, keyphrase_forms, synonyms_forms))
	}
}

fn word_forms(word: &str, locale: &Locale) -> WordForms {
	let mut forms = WordForms::new();
	forms.insert(word.to_string());
	if locale.language() == "en" { forms.extend(english_number_forms(word)); }
	forms
}

/// English words with a single form for both numbers.
const ENGLISH_NUMBERLESS: &[&str] = &[
	"news", "series", "species", "means", "chaos", "physics", "mathematics", "economics", "athletics",
	"sheep", "deer", "fish", "moose", "aircraft",
];

/// English singulars whose trailing `s` is not a plural ending.
const ENGLISH_SINGULAR_IN_S: &[&str] = &["gas", "lens", "bias", "atlas", "canvas", "alias", "iris", "yes"];

/// Regular English singular and plural counterparts of `word`.
fn english_number_forms(word: &str) -> Vec<String> {
	let mut out = Vec::new();
	if word.chars().count() < 3 || ENGLISH_NUMBERLESS.contains(&word) { return out; }
	if let Some(stem) = word.strip_suffix("ies") {
		out.push(format!("{stem}y"));
	} else if let Some(stem) = word.strip_suffix("es").filter(|s| ends_with_sibilant(s)) {
		out.push(stem.to_string());
	} else if let Some(stem) = word
		.strip_suffix('s')
		.filter(|s| !s.ends_with('s') && !s.ends_with('u') && !ENGLISH_SINGULAR_IN_S.contains(&word))
	{
		out.push(stem.to_string());
	} else if let Some(stem) = word.strip_suffix('y').filter(|s| s.chars().last().is_some_and(|c| !is_vowel(c))) {
		out.push(format!("{stem}ies"));
	} else if ends_with_sibilant(word) {
		out.push(format!("{word}es"));
	} else {
		out.push(format!("{word}s"));
	}
	out
}

fn ends_with_sibilant(word: &str) -> bool {
	["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix))
}

fn is_vowel(c: char) -> bool { matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') }
