use std::collections::HashSet;

use topicscan_core::traits::WordTokenizer;
use topicscan_core::types::{Locale, MatchResult, MatchSource, TopicFormSet, WordForms};

pub struct SegmentMatcher<T> where T: WordTokenizer {
    tokenizer: T,
}

impl<T> SegmentMatcher<T> where T: WordTokenizer {
    pub fn new(tokenizer: T) -> Self { Self { tokenizer } }

    /// Scores `segment` against the keyphrase and, when `use_synonyms` is set
    /// and the keyphrase is not fully present, against every synonym.
    /// The best-scoring phrase wins; ties go to the earlier one.
    pub fn match_segment(&self, topic_forms: &TopicFormSet, segment: &str, use_synonyms: bool, locale: &Locale) -> MatchResult {
        let words = self.tokenizer.words(segment, locale);
        if words.is_empty() { return MatchResult::none(MatchSource::Keyphrase); }
        let words: HashSet<&str> = words.iter().map(String::as_str).collect();

        let mut best = score_phrase(topic_forms.keyphrase_forms(), &words, MatchSource::Keyphrase);
        if !use_synonyms || best.percent_word_matches == 100 { return best; }

        for (i, synonym) in topic_forms.synonyms_forms().iter().enumerate() {
            let candidate = score_phrase(synonym, &words, MatchSource::Synonym(i));
            if candidate.percent_word_matches > best.percent_word_matches { best = candidate; }
            if best.percent_word_matches == 100 { break; }
        }
        best
    }
}

fn score_phrase(phrase: &[WordForms], words: &HashSet<&str>, source: MatchSource) -> MatchResult {
    if phrase.is_empty() { return MatchResult::none(source); }
    let mut count_word_matches = 0;
    let mut matched_forms = Vec::new();
    for forms in phrase {
        let hits: Vec<String> = forms.iter().filter(|f| words.contains(f.as_str())).cloned().collect();
        if !hits.is_empty() {
            count_word_matches += 1;
            matched_forms.extend(hits);
        }
    }
    MatchResult { count_word_matches, percent_word_matches: percent(count_word_matches, phrase.len()), matched_forms, source }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn percent(found: usize, total: usize) -> u8 {
    // found <= total, so the rounded value stays within 0..=100
    (found as f64 / total as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 4), 0);
    }
}
