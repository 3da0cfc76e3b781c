//! topicscan-text
//!
//! Language and markup adapters for the analysis engine: a Tantivy-backed word
//! tokenizer, per-language function-word lists, a basic morphology expander,
//! and the HTML sanitizer and heading extractor.
pub mod function_words;
pub mod headings;
pub mod morphology;
pub mod research;
pub mod sanitize;
pub mod tokenizer;

pub use function_words::FunctionWordLists;
pub use headings::HtmlHeadingExtractor;
pub use morphology::BasicMorphology;
pub use research::BasicResearcher;
pub use sanitize::HtmlSanitizer;
pub use tokenizer::TantivyWordTokenizer;
