use tantivy::tokenizer::{LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer, TokenStream};

use topicscan_core::traits::WordTokenizer;
use topicscan_core::types::Locale;

const MAX_WORD_LEN: usize = 64;

/// Splits on non-alphanumeric characters and lowercases. Function words are
/// kept; filtering them is the morphology's job.
#[derive(Clone)]
pub struct TantivyWordTokenizer {
	analyzer: TextAnalyzer,
}

impl Default for TantivyWordTokenizer {
	fn default() -> Self {
		let analyzer = TextAnalyzer::builder(SimpleTokenizer::default())
			.filter(RemoveLongFilter::limit(MAX_WORD_LEN))
			.filter(LowerCaser)
			.build();
		Self { analyzer }
	}
}

impl TantivyWordTokenizer {
	pub fn new() -> Self { Self::default() }
}

impl WordTokenizer for TantivyWordTokenizer {
	fn words(&self, text: &str, _locale: &Locale) -> Vec<String> {
		// token_stream needs &mut; analyzers are cheap to clone
		let mut analyzer = self.analyzer.clone();
		let mut stream = analyzer.token_stream(text);
		let mut words = Vec::new();
		stream.process(&mut |token| words.push(token.text.clone()));
		words
	}
}
