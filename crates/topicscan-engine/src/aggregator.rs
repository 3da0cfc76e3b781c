use serde::{Deserialize, Serialize};

use topicscan_core::traits::WordTokenizer;
use topicscan_core::types::{CoverageResult, Locale, TopicFormSet};

use crate::matcher::SegmentMatcher;

/// When a heading's word-match percentage counts as reflecting the topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdPolicy {
    /// Every content word must be present (100%).
    StrictMatch,
    /// More than half of the content words must be present (> 50%).
    MajorityMatch,
}

impl ThresholdPolicy {
    /// Without a function-word list a partial match may rest on an article or
    /// preposition alone, so only full matches count.
    pub fn for_function_words(has_function_words: bool) -> Self {
        if has_function_words { Self::MajorityMatch } else { Self::StrictMatch }
    }

    pub fn reflects_topic(self, percent_word_matches: u8) -> bool {
        match self {
            Self::StrictMatch => percent_word_matches == 100,
            Self::MajorityMatch => percent_word_matches > 50,
        }
    }
}

pub struct CoverageAggregator<T> where T: WordTokenizer {
    matcher: SegmentMatcher<T>,
}

impl<T> CoverageAggregator<T> where T: WordTokenizer {
    pub fn new(tokenizer: T) -> Self { Self { matcher: SegmentMatcher::new(tokenizer) } }

    pub fn matcher(&self) -> &SegmentMatcher<T> { &self.matcher }

    /// Counts the segments reflecting the topic. Each segment is judged on its own.
    pub fn analyze<S: AsRef<str>>(
        &self,
        topic_forms: &TopicFormSet,
        segments: &[S],
        use_synonyms: bool,
        locale: &Locale,
        policy: ThresholdPolicy,
    ) -> CoverageResult {
        if segments.is_empty() { return CoverageResult::default(); }
        let matches = segments
            .iter()
            .map(|s| self.matcher.match_segment(topic_forms, s.as_ref(), use_synonyms, locale))
            .filter(|m| policy.reflects_topic(m.percent_word_matches))
            .count();
        CoverageResult::from_counts(segments.len(), matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_requires_full_match() {
        let p = ThresholdPolicy::for_function_words(false);
        assert_eq!(p, ThresholdPolicy::StrictMatch);
        assert!(p.reflects_topic(100));
        assert!(!p.reflects_topic(80));
    }

    #[test]
    fn majority_excludes_exactly_half() {
        let p = ThresholdPolicy::for_function_words(true);
        assert_eq!(p, ThresholdPolicy::MajorityMatch);
        assert!(p.reflects_topic(80));
        assert!(p.reflects_topic(51));
        assert!(!p.reflects_topic(50));
        assert!(!p.reflects_topic(0));
    }
}
