use crate::error::Result;
use crate::types::{Document, HeadingSegment, Locale, TopicFormSet};

/// Removes markup that carries no text (scripts, styles, inline tags).
/// Applying it twice must give the same output as applying it once.
pub trait Sanitizer: Send + Sync {
    fn strip_non_text_markup(&self, raw: &str) -> String;
}

/// Pulls the plain text of top-level headings out of a sanitized body, in document order.
pub trait StructuralExtractor: Send + Sync {
    fn extract_top_level_headings(&self, text: &str) -> Vec<HeadingSegment>;
}

/// Splits text into the lowercase words that forms are compared against.
pub trait WordTokenizer: Send + Sync {
    fn words(&self, text: &str, locale: &Locale) -> Vec<String>;
}

pub trait FunctionWords: Send + Sync {
    fn has_function_words(&self, locale: &Locale) -> bool;
    fn is_function_word(&self, word: &str, locale: &Locale) -> bool;
}

/// Expands a keyphrase and its synonyms into matchable word forms.
pub trait MorphologyExpander: Send + Sync {
    fn expand(&self, keyphrase: &str, synonyms: &[&str], locale: &Locale) -> Result<TopicFormSet>;
}

/// Hands the analyzer a form set that was computed elsewhere.
pub trait TopicFormProvider {
    fn topic_forms(&self) -> Result<TopicFormSet>;
}

impl TopicFormProvider for TopicFormSet {
    fn topic_forms(&self) -> Result<TopicFormSet> { Ok(self.clone()) }
}

/// The sub-analyses the subheading analysis asks for, one method each.
pub trait Researcher: Send + Sync {
    fn morphology(&self, document: &Document) -> Result<TopicFormSet>;
    fn has_function_words(&self, locale: &Locale) -> bool;
}

/// Binds a researcher to a document so it can serve as a `TopicFormProvider`.
pub struct ResearchedForms<'a, R: ?Sized> {
    researcher: &'a R,
    document: &'a Document,
}

impl<'a, R: Researcher + ?Sized> ResearchedForms<'a, R> {
    pub fn new(researcher: &'a R, document: &'a Document) -> Self { Self { researcher, document } }
}

impl<R: Researcher + ?Sized> TopicFormProvider for ResearchedForms<'_, R> {
    fn topic_forms(&self) -> Result<TopicFormSet> { self.researcher.morphology(self.document) }
}
