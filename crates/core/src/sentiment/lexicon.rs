//! Built-in lexicon model.
//!
//! Word valences live on a -4.0..=4.0 scale. Negations within the three
//! preceding tokens flip and damp a word, boosters within the same window
//! push it further from zero. The model answers both as a polarity model
//! (mean valence in [-1, 1]) and as a compound model (normalized sum).

use std::collections::{HashMap, HashSet};

use super::traits::{CompoundModel, PolarityModel};

/// Tokens looked back for negations and boosters.
const WINDOW: usize = 3;

/// Multiplier applied to a negated word in compound scoring.
const NEGATION_SCALAR: f64 = -0.74;

/// Multiplier applied to a negated word in polarity scoring.
const POLARITY_NEGATION_SCALAR: f64 = -0.5;

/// Increment added per booster word, before distance decay.
const BOOSTER_INCREMENT: f64 = 0.293;

/// Emphasis added per exclamation mark (at most four count).
const EXCLAMATION_INCREMENT: f64 = 0.292;

/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("cheerful", 2.5),
    ("cool", 1.3),
    ("delighted", 2.9),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("hope", 1.9),
    ("inspiring", 2.2),
    ("joy", 2.8),
    ("kind", 2.4),
    ("like", 1.5),
    ("love", 3.2),
    ("lovely", 2.8),
    ("lucky", 1.8),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("proud", 2.1),
    ("smile", 1.5),
    ("success", 2.7),
    ("superb", 3.1),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yay", 2.4),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.8),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -2.1),
    ("cry", -2.1),
    ("disappointed", -1.9),
    ("disaster", -3.1),
    ("dislike", -1.6),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fear", -2.2),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("lonely", -1.5),
    ("lose", -1.7),
    ("lost", -1.3),
    ("mad", -2.2),
    ("miserable", -2.2),
    ("pain", -2.3),
    ("sad", -2.1),
    ("scared", -1.9),
    ("sick", -2.3),
    ("sorry", -0.3),
    ("stress", -1.8),
    ("stupid", -2.4),
    ("terrible", -2.1),
    ("tired", -1.9),
    ("ugly", -2.3),
    ("upset", -1.6),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("uber", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("barely", -BOOSTER_INCREMENT),
    ("hardly", -BOOSTER_INCREMENT),
    ("kinda", -BOOSTER_INCREMENT),
    ("slightly", -BOOSTER_INCREMENT),
    ("somewhat", -BOOSTER_INCREMENT),
];

const NEGATIONS: &[&str] = &[
    "ain't", "aren't", "can't", "cannot", "didn't", "doesn't", "don't", "isn't", "never",
    "no", "nobody", "none", "not", "nothing", "nowhere", "wasn't", "won't", "wouldn't",
];

/// Lexicon-based sentiment model.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl LexiconModel {
    /// Create a model with the built-in word lists.
    pub fn new() -> Self {
        let valences = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(w, v)| (w.to_string(), *v))
            .collect();
        let boosters = BOOSTERS.iter().map(|(w, v)| (w.to_string(), *v)).collect();
        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();

        Self {
            valences,
            boosters,
            negations,
        }
    }

    /// Add or override a word valence (-4.0..=4.0).
    pub fn with_word(mut self, word: &str, valence: f64) -> Self {
        self.valences
            .insert(word.to_lowercase(), valence.clamp(-4.0, 4.0));
        self
    }

    /// Number of words carrying a valence.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|t| t.trim_matches('\'').to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Per-word valences after negation and booster adjustment.
    ///
    /// `negation_scalar` differs between the compound and polarity views.
    fn adjusted_valences(&self, tokens: &[String], negation_scalar: f64) -> Vec<f64> {
        let mut scores = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.valences.get(token) else {
                continue;
            };
            let mut valence = base;

            let start = i.saturating_sub(WINDOW);
            let mut negated = false;
            for (distance, previous) in tokens[start..i].iter().rev().enumerate() {
                if let Some(&boost) = self.boosters.get(previous) {
                    let decay = 1.0 - 0.05 * distance as f64;
                    valence += boost * decay * valence.signum();
                }
                if self.negations.contains(previous) || previous.ends_with("n't") {
                    negated = true;
                }
            }
            if negated {
                valence *= negation_scalar;
            }

            scores.push(valence);
        }

        scores
    }

    fn exclamation_emphasis(text: &str) -> f64 {
        let count = text.chars().filter(|c| *c == '!').count().min(4);
        count as f64 * EXCLAMATION_INCREMENT
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CompoundModel for LexiconModel {
    fn compound(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);
        let mut sum: f64 = self
            .adjusted_valences(&tokens, NEGATION_SCALAR)
            .iter()
            .sum();

        if sum > 0.0 {
            sum += Self::exclamation_emphasis(text);
        } else if sum < 0.0 {
            sum -= Self::exclamation_emphasis(text);
        }

        if sum == 0.0 {
            return 0.0;
        }
        (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl PolarityModel for LexiconModel {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);
        let scores = self.adjusted_valences(&tokens, POLARITY_NEGATION_SCALAR);
        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        (mean / 4.0).clamp(-1.0, 1.0)
    }
}
