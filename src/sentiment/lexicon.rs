use std::collections::HashMap;

/// Hand-tuned vocabulary for app-review and shopping commentary, with word
/// scores in [-1.0, 1.0], intensity modifiers, and negation markers.
#[derive(Debug, Clone)]
pub struct ReviewLexicon {
    positive: HashMap<String, f64>,
    negative: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    negations: Vec<String>,
}

impl ReviewLexicon {
    pub fn new() -> Self {
        let mut positive = HashMap::new();
        let mut negative = HashMap::new();
        let mut modifiers = HashMap::new();

        let strong_positive = [
            ("amazing", 0.8),
            ("excellent", 0.8),
            ("incredible", 0.85),
            ("fantastic", 0.8),
            ("awesome", 0.75),
            ("outstanding", 0.8),
            ("perfect", 0.85),
            ("love", 0.7),
            ("loved", 0.7),
            ("great", 0.7),
            ("best", 0.75),
            ("flawless", 0.8),
            ("recommend", 0.65),
            ("recommended", 0.65),
            ("impressed", 0.7),
            ("satisfied", 0.65),
            ("happy", 0.65),
            ("bargain", 0.6),
            ("painless", 0.6),
            ("seamless", 0.65),
        ];

        let moderate_positive = [
            ("good", 0.5),
            ("nice", 0.45),
            ("fast", 0.5),
            ("quick", 0.45),
            ("easy", 0.5),
            ("smooth", 0.5),
            ("helpful", 0.55),
            ("friendly", 0.5),
            ("reliable", 0.55),
            ("cheap", 0.4),
            ("affordable", 0.45),
            ("convenient", 0.5),
            ("useful", 0.45),
            ("works", 0.35),
            ("worked", 0.35),
            ("fine", 0.35),
            ("decent", 0.35),
            ("improved", 0.45),
            ("fresh", 0.35),
            ("responsive", 0.5),
        ];

        let strong_negative = [
            ("terrible", -0.8),
            ("horrible", -0.85),
            ("awful", -0.8),
            ("worst", -0.85),
            ("hate", -0.75),
            ("hated", -0.75),
            ("scam", -0.95),
            ("fraud", -0.95),
            ("fraudulent", -0.95),
            ("garbage", -0.8),
            ("useless", -0.75),
            ("unusable", -0.8),
            ("ripoff", -0.85),
            ("nightmare", -0.85),
            ("disgusting", -0.8),
            ("stolen", -0.85),
            ("fake", -0.7),
            ("counterfeit", -0.8),
            ("furious", -0.75),
            ("disaster", -0.85),
        ];

        let moderate_negative = [
            ("bad", -0.5),
            ("slow", -0.5),
            ("broken", -0.6),
            ("buggy", -0.6),
            ("crash", -0.6),
            ("crashes", -0.6),
            ("crashed", -0.6),
            ("delay", -0.5),
            ("delays", -0.5),
            ("delayed", -0.5),
            ("late", -0.45),
            ("missing", -0.5),
            ("lost", -0.55),
            ("damaged", -0.55),
            ("expensive", -0.4),
            ("overpriced", -0.55),
            ("refund", -0.35),
            ("cancelled", -0.4),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("annoying", -0.5),
            ("confusing", -0.45),
            ("rude", -0.55),
            ("unhelpful", -0.55),
            ("unreliable", -0.55),
            ("glitchy", -0.5),
            ("stuck", -0.4),
            ("spam", -0.5),
        ];

        for (word, score) in strong_positive.iter().chain(moderate_positive.iter()) {
            positive.insert(word.to_string(), *score);
        }

        for (word, score) in strong_negative.iter().chain(moderate_negative.iter()) {
            negative.insert(word.to_string(), *score);
        }

        let modifier_words = [
            ("very", 1.5),
            ("really", 1.4),
            ("extremely", 1.8),
            ("incredibly", 1.7),
            ("super", 1.5),
            ("absolutely", 1.6),
            ("totally", 1.4),
            ("completely", 1.5),
            ("highly", 1.4),
            ("quite", 1.2),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("barely", 0.6),
            ("kinda", 0.8),
            ("maybe", 0.8),
            ("possibly", 0.7),
        ];

        for (word, multiplier) in modifier_words {
            modifiers.insert(word.to_string(), multiplier);
        }

        // Cleaned text has apostrophes stripped, so both spellings are listed.
        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "dont", "don't",
            "doesnt", "doesn't", "didnt", "didn't", "cant", "can't", "couldnt", "couldn't",
            "wont", "won't", "wouldnt", "wouldn't", "shouldnt", "shouldn't", "isnt", "isn't",
            "arent", "aren't", "wasnt", "wasn't", "werent", "weren't", "havent", "haven't",
            "hasnt", "hasn't", "hadnt", "hadn't",
        ]
        .into_iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            positive,
            negative,
            modifiers,
            negations,
        }
    }

    /// Score for a lowercase word, from either polarity table.
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.positive
            .get(word)
            .or_else(|| self.negative.get(word))
            .copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == word)
    }

    pub fn get_modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }
}

impl Default for ReviewLexicon {
    fn default() -> Self {
        Self::new()
    }
}
