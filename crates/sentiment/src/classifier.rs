use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Raw classifier polarity, before the signed-score rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

/// One classifier verdict: a polarity and a confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub polarity: Polarity,
    pub confidence: f64,
}

/// Pretrained binary sentiment classifier.
///
/// Backed by the shipped word-valence lexicon: the verdict is the sign of
/// the mean valence of matched tokens, the confidence its magnitude. Text
/// with no sentiment-bearing tokens classifies as POSITIVE with zero
/// confidence, which the signed-score rule turns into a negative label.
/// Deterministic: identical input always yields an identical verdict.
pub struct SentimentClassifier {
    lexicon: Lexicon,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
        }
    }

    pub fn classify(&self, text: &str) -> Verdict {
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut negated = false;

        for token in text.split_whitespace() {
            if self.lexicon.is_negation(token) {
                negated = true;
                continue;
            }
            if let Some(valence) = self.lexicon.valence(token) {
                total += if negated { -valence } else { valence };
                matched += 1;
                negated = false;
            }
        }

        if matched == 0 {
            return Verdict {
                polarity: Polarity::Positive,
                confidence: 0.0,
            };
        }

        let mean = total / matched as f64;
        Verdict {
            polarity: if mean < 0.0 {
                Polarity::Negative
            } else {
                Polarity::Positive
            },
            confidence: mean.abs().min(1.0),
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
