use topicscan_core::error::Result;
use topicscan_core::traits::{ResearchedForms, Researcher, Sanitizer, StructuralExtractor, TopicFormProvider, WordTokenizer};
use topicscan_core::types::{CoverageResult, Document};

use crate::aggregator::{CoverageAggregator, ThresholdPolicy};

/// Sanitize → extract headings → match and count.
pub struct SubheadingAnalyzer<S, E, T> where S: Sanitizer, E: StructuralExtractor, T: WordTokenizer {
    sanitizer: S,
    extractor: E,
    aggregator: CoverageAggregator<T>,
    use_synonyms: bool,
}

impl<S, E, T> SubheadingAnalyzer<S, E, T> where S: Sanitizer, E: StructuralExtractor, T: WordTokenizer {
    pub fn new(sanitizer: S, extractor: E, tokenizer: T) -> Self {
        Self { sanitizer, extractor, aggregator: CoverageAggregator::new(tokenizer), use_synonyms: true }
    }

    pub fn with_synonyms(mut self, use_synonyms: bool) -> Self {
        self.use_synonyms = use_synonyms;
        self
    }

    /// Share of the document's top-level headings that reflect the topic.
    ///
    /// A document without headings yields an all-zero result. Errors from the
    /// form provider (e.g. an unsupported locale) are returned as-is, even when
    /// there is nothing to match.
    pub fn analyze_topic_in_headings<P>(&self, document: &Document, topic_forms: &P, has_function_words: bool) -> Result<CoverageResult>
    where
        P: TopicFormProvider + ?Sized,
    {
        let text = self.sanitizer.strip_non_text_markup(&document.text);
        let topic_forms = topic_forms.topic_forms()?;
        let headings = self.extractor.extract_top_level_headings(&text);
        let segments: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        let policy = ThresholdPolicy::for_function_words(has_function_words);
        Ok(self.aggregator.analyze(&topic_forms, &segments, self.use_synonyms, &document.locale, policy))
    }

    /// Same as `analyze_topic_in_headings`, asking `researcher` for the forms
    /// and for function-word availability.
    pub fn analyze_with_researcher<R>(&self, document: &Document, researcher: &R) -> Result<CoverageResult>
    where
        R: Researcher + ?Sized,
    {
        let forms = ResearchedForms::new(researcher, document);
        self.analyze_topic_in_headings(document, &forms, researcher.has_function_words(&document.locale))
    }
}
