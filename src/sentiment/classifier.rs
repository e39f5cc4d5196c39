use crate::models::SentimentLabel;
use crate::sentiment::scorer::{LexiconScorer, PolarityScorer};

/// Contract thresholds: scores inside [-0.1, 0.1] are Neutral so that
/// weakly-worded or short comments are not over-classified.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Maps a polarity score to a three-way label. The scoring engine sits
/// behind `PolarityScorer` and is swappable; the thresholds are not.
pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: impl PolarityScorer + 'static) -> Self {
        Self {
            scorer: Box::new(scorer),
        }
    }

    /// Classifier backed by the built-in review lexicon.
    pub fn lexicon() -> Self {
        Self::new(LexiconScorer::new())
    }

    pub fn classify(&self, text: &str) -> SentimentLabel {
        let score = self.scorer.score(text);

        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn score(&self, _text: &str) -> f64 {
            self.0
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_positive_above_threshold() {
        let classifier = SentimentClassifier::new(FixedScorer(0.5));
        assert_eq!(classifier.classify("anything"), SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_below_threshold() {
        let classifier = SentimentClassifier::new(FixedScorer(-0.5));
        assert_eq!(classifier.classify("anything"), SentimentLabel::Negative);
    }

    #[test]
    fn test_neutral_band_is_inclusive_of_bounds() {
        for score in [-0.1, -0.05, 0.0, 0.05, 0.1] {
            let classifier = SentimentClassifier::new(FixedScorer(score));
            assert_eq!(
                classifier.classify("anything"),
                SentimentLabel::Neutral,
                "score {} should be Neutral",
                score
            );
        }
    }

    #[test]
    fn test_just_outside_neutral_band() {
        let positive = SentimentClassifier::new(FixedScorer(0.10001));
        assert_eq!(positive.classify("x"), SentimentLabel::Positive);

        let negative = SentimentClassifier::new(FixedScorer(-0.10001));
        assert_eq!(negative.classify("x"), SentimentLabel::Negative);
    }

    #[test]
    fn test_empty_text_with_lexicon_is_neutral() {
        let classifier = SentimentClassifier::lexicon();
        assert_eq!(classifier.classify(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_lexicon_end_to_end_positive() {
        let classifier = SentimentClassifier::lexicon();
        assert_eq!(
            classifier.classify("i love this app"),
            SentimentLabel::Positive
        );
    }
}
