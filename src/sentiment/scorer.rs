use crate::sentiment::lexicon::ReviewLexicon;

/// Narrow seam for polarity scoring: any engine producing a scalar in
/// [-1.0, 1.0] can stand in for the default lexicon implementation without
/// touching the tri-state decision logic built on top of it.
pub trait PolarityScorer: Send + Sync {
    /// Polarity of `text` in [-1.0, 1.0]; 0.0 when nothing scoreable exists.
    fn score(&self, text: &str) -> f64;

    fn name(&self) -> &str;
}

/// Lexicon-driven scorer with intensity modifiers and a short negation
/// window. Deterministic: per-token table lookups only.
pub struct LexiconScorer {
    lexicon: ReviewLexicon,
    negation_window: usize,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: ReviewLexicon::new(),
            negation_window: 3,
        }
    }

    pub fn with_lexicon(mut self, lexicon: ReviewLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split_whitespace().map(|t| {
            t.trim_matches(|c: char| !c.is_ascii_alphanumeric())
                .to_lowercase()
        })
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let mut total_score = 0.0;
        let mut word_count = 0u32;
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0;

        for token in Self::tokens(text) {
            if token.is_empty() {
                continue;
            }

            if self.lexicon.is_negation(&token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.lexicon.get_modifier(&token) {
                current_modifier = modifier;
                continue;
            }

            if let Some(base_score) = self.lexicon.get_score(&token) {
                let mut score = base_score * current_modifier;

                // Invert with damping: "not great" reads negative, but less
                // strongly than "terrible".
                if negation_active && words_since_negation < self.negation_window {
                    score = -score * 0.8;
                }

                total_score += score;
                word_count += 1;
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        if word_count > 0 {
            (total_score / word_count as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
