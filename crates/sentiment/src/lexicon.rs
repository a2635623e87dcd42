use std::collections::{HashMap, HashSet};

/// Word-valence table the classifier was trained on: general news and
/// business vocabulary with signed weights in [-1, 1], plus negation
/// words that flip the sign of the next sentiment-bearing token.
///
/// Lookups expect lemmatized lowercase tokens.
pub struct Lexicon {
    words: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.5),
    ("great", 0.7),
    ("excellent", 0.8),
    ("strong", 0.5),
    ("positive", 0.5),
    ("success", 0.7),
    ("successful", 0.7),
    ("win", 0.6),
    ("gain", 0.5),
    ("growth", 0.6),
    ("grow", 0.5),
    ("profit", 0.6),
    ("boom", 0.7),
    ("surge", 0.7),
    ("rally", 0.6),
    ("soar", 0.8),
    ("rise", 0.5),
    ("increase", 0.4),
    ("improve", 0.5),
    ("improvement", 0.5),
    ("recovery", 0.5),
    ("recover", 0.5),
    ("rebound", 0.5),
    ("record", 0.5),
    ("benefit", 0.5),
    ("boost", 0.6),
    ("support", 0.4),
    ("opportunity", 0.5),
    ("optimistic", 0.6),
    ("optimism", 0.6),
    ("confident", 0.5),
    ("confidence", 0.5),
    ("hope", 0.4),
    ("hopeful", 0.5),
    ("promising", 0.6),
    ("progress", 0.5),
    ("prosperity", 0.7),
    ("prosperous", 0.7),
    ("thrive", 0.7),
    ("expand", 0.4),
    ("expansion", 0.4),
    ("invest", 0.3),
    ("investment", 0.3),
    ("create", 0.3),
    ("safe", 0.4),
    ("safety", 0.4),
    ("clean", 0.4),
    ("sustainable", 0.5),
    ("approve", 0.4),
    ("approval", 0.4),
    ("welcome", 0.5),
    ("praise", 0.6),
    ("celebrate", 0.6),
    ("agreement", 0.4),
    ("stable", 0.4),
    ("stability", 0.4),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.5),
    ("poor", -0.5),
    ("terrible", -0.8),
    ("weak", -0.5),
    ("negative", -0.5),
    ("fail", -0.6),
    ("failure", -0.7),
    ("lose", -0.6),
    ("loss", -0.6),
    ("decline", -0.5),
    ("drop", -0.5),
    ("fall", -0.5),
    ("plunge", -0.8),
    ("crash", -0.9),
    ("collapse", -0.8),
    ("crisis", -0.8),
    ("risk", -0.4),
    ("threat", -0.6),
    ("threaten", -0.6),
    ("danger", -0.6),
    ("dangerous", -0.6),
    ("damage", -0.6),
    ("destroy", -0.8),
    ("destruction", -0.8),
    ("harm", -0.6),
    ("harmful", -0.6),
    ("hurt", -0.5),
    ("pollution", -0.6),
    ("pollute", -0.6),
    ("contamination", -0.6),
    ("toxic", -0.7),
    ("waste", -0.4),
    ("disaster", -0.8),
    ("accident", -0.6),
    ("death", -0.8),
    ("die", -0.7),
    ("injury", -0.6),
    ("injured", -0.6),
    ("protest", -0.4),
    ("conflict", -0.5),
    ("dispute", -0.4),
    ("corruption", -0.7),
    ("illegal", -0.6),
    ("violation", -0.6),
    ("fine", -0.3),
    ("penalty", -0.4),
    ("lawsuit", -0.4),
    ("layoff", -0.6),
    ("unemployment", -0.6),
    ("poverty", -0.7),
    ("concern", -0.4),
    ("worry", -0.5),
    ("fear", -0.6),
    ("anger", -0.6),
    ("angry", -0.6),
    ("oppose", -0.4),
    ("opposition", -0.4),
    ("reject", -0.5),
    ("deny", -0.4),
    ("delay", -0.3),
    ("problem", -0.4),
    ("trouble", -0.5),
    ("struggle", -0.5),
    ("suffer", -0.6),
    ("shortage", -0.5),
    ("deficit", -0.5),
    ("debt", -0.4),
    ("corrupt", -0.7),
    ("scandal", -0.7),
];

const NEGATIONS: &[&str] = &["never", "without", "hardly", "barely", "neither", "cannot"];

impl Lexicon {
    pub fn new() -> Self {
        let mut words = HashMap::new();
        words.extend(POSITIVE_WORDS.iter().copied());
        words.extend(NEGATIVE_WORDS.iter().copied());

        Self {
            words,
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    pub fn valence(&self, token: &str) -> Option<f64> {
        self.words.get(token).copied()
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
