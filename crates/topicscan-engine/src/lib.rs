//! topicscan-engine
//!
//! How well a keyphrase is reflected in a document's subheadings:
//! `SegmentMatcher` scores one heading, `CoverageAggregator` classifies and
//! counts them, `SubheadingAnalyzer` wires sanitizer, extractor and forms together.
pub mod aggregator;
pub mod analyzer;
pub mod matcher;

pub use aggregator::{CoverageAggregator, ThresholdPolicy};
pub use analyzer::SubheadingAnalyzer;
pub use matcher::SegmentMatcher;
