use topicscan_core::error::Result;
use topicscan_core::traits::{FunctionWords, MorphologyExpander, Researcher};
use topicscan_core::types::{Document, Locale, TopicFormSet};

use crate::function_words::FunctionWordLists;
use crate::morphology::BasicMorphology;
use crate::tokenizer::TantivyWordTokenizer;

/// Serves the morphology and function-word research from the built-in lists.
pub struct BasicResearcher {
	morphology: BasicMorphology<TantivyWordTokenizer, FunctionWordLists>,
}

impl Default for BasicResearcher {
	fn default() -> Self { Self::new(FunctionWordLists::new()) }
}

impl BasicResearcher {
	pub fn new(function_words: FunctionWordLists) -> Self {
		Self { morphology: BasicMorphology::new(TantivyWordTokenizer::new(), function_words) }
	}
}

impl Researcher for BasicResearcher {
	fn morphology(&self, document: &Document) -> Result<TopicFormSet> {
		self.morphology.expand(&document.keyphrase, &document.synonym_phrases(), &document.locale)
	}

	fn has_function_words(&self, locale: &Locale) -> bool { self.morphology.function_words().has_function_words(locale) }
}
