use std::collections::HashMap;

/// Irregular forms resolved before any suffix rule, plus nouns whose
/// final `s` is not a plural marker.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("wolves", "wolf"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("media", "medium"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("means", "means"),
    ("politics", "politics"),
    ("economics", "economics"),
];

/// Morphy-style detachment rules, tried in order.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("sses", "ss"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
];

/// Maps tokens to their dictionary noun base form: an exception table
/// first, then suffix detachment, then a guarded plural-`s` strip.
pub struct Lemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: EXCEPTIONS.iter().copied().collect(),
        }
    }

    pub fn lemma(&self, token: &str) -> String {
        if let Some(base) = self.exceptions.get(token) {
            return (*base).to_string();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = token.strip_suffix(suffix) {
                if stem.len() >= 2 {
                    return format!("{stem}{replacement}");
                }
            }
        }

        if token.len() > 3
            && token.ends_with('s')
            && !token.ends_with("ss")
            && !token.ends_with("us")
            && !token.ends_with("is")
        {
            return token[..token.len() - 1].to_string();
        }

        token.to_string()
    }

    /// Lemmatize every whitespace token and rejoin with single spaces.
    pub fn lemmatize(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.lemma(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_regular_plurals() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("miners"), "miner");
        assert_eq!(lemmatizer.lemma("articles"), "article");
    }

    #[test]
    fn applies_suffix_rules() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("companies"), "company");
        assert_eq!(lemmatizer.lemma("losses"), "loss");
        assert_eq!(lemmatizer.lemma("taxes"), "tax");
        assert_eq!(lemmatizer.lemma("branches"), "branch");
        assert_eq!(lemmatizer.lemma("wishes"), "wish");
    }

    #[test]
    fn resolves_irregular_forms() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("children"), "child");
        assert_eq!(lemmatizer.lemma("mice"), "mouse");
    }

    #[test]
    fn leaves_non_plurals_alone() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(lemmatizer.lemma("news"), "news");
        assert_eq!(lemmatizer.lemma("glass"), "glass");
        assert_eq!(lemmatizer.lemma("status"), "status");
        assert_eq!(lemmatizer.lemma("basis"), "basis");
        assert_eq!(lemmatizer.lemma("gas"), "gas");
        assert_eq!(lemmatizer.lemma("mine"), "mine");
    }

    #[test]
    fn lemmatizes_whole_strings() {
        let lemmatizer = Lemmatizer::new();
        assert_eq!(
            lemmatizer.lemmatize("miners dig tunnels"),
            "miner dig tunnel"
        );
    }
}
