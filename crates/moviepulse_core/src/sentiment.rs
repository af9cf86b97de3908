//! crates/moviepulse_core/src/sentiment.rs
//!
//! Keyword-count sentiment tagging. This is a heuristic, not a classifier:
//! substring containment against two fixed word lists, one hit per keyword.
//! It exists behind the `SentimentClassifier` port so a real model can be
//! swapped in without touching the opinion write path.

use crate::domain::Sentiment;
use crate::ports::SentimentClassifier;

const POSITIVE_WORDS: [&str; 7] = [
    "love", "great", "excellent", "good", "amazing", "fantastic", "awesome",
];
const NEGATIVE_WORDS: [&str; 7] = [
    "hate", "terrible", "bad", "poor", "awful", "horrible", "disappointing",
];

/// The default keyword heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSentiment;

impl SentimentClassifier for KeywordSentiment {
    fn classify(&self, text: &str) -> Sentiment {
        let text = text.to_lowercase();
        let positive = POSITIVE_WORDS
            .iter()
            .filter(|word| text.contains(*word))
            .count();
        let negative = NEGATIVE_WORDS
            .iter()
            .filter(|word| text.contains(*word))
            .count();

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_keywords_win() {
        let sentiment = KeywordSentiment.classify("This was an amazing and great film");
        assert_eq!(sentiment, Sentiment::Positive);
    }

    #[test]
    fn no_hits_is_neutral() {
        let sentiment = KeywordSentiment.classify("okay film, nothing special");
        assert_eq!(sentiment, Sentiment::Neutral);
    }

    #[test]
    fn negative_keywords_win() {
        let sentiment = KeywordSentiment.classify("a terrible, disappointing mess");
        assert_eq!(sentiment, Sentiment::Negative);
    }

    #[test]
    fn ties_resolve_to_neutral() {
        let sentiment = KeywordSentiment.classify("great premise, awful pacing");
        assert_eq!(sentiment, Sentiment::Neutral);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        // "GOODBYE" contains "good" once lowercased.
        let sentiment = KeywordSentiment.classify("GOODBYE cinema");
        assert_eq!(sentiment, Sentiment::Positive);
    }
}
