use regex::Regex;

/// Cleans segment text into the canonical lowercase form the scorer
/// expects: URLs stripped, curly apostrophes folded, everything outside
/// letters/whitespace/apostrophe/hyphen removed, whitespace collapsed.
pub struct TextCleaner {
    url: Regex,
    curly_quote: Regex,
    charset: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self {
            url: Regex::new(r"https?://\S+|www\.\S+").unwrap(),
            curly_quote: Regex::new(r"[’]").unwrap(),
            charset: Regex::new(r"[^a-zA-Z\s'-]").unwrap(),
        }
    }

    /// Idempotent: cleaning already-cleaned text is a no-op.
    pub fn clean(&self, text: &str) -> String {
        let text = self.url.replace_all(text, "");
        let text = self.curly_quote.replace_all(&text, "'");
        let text = self.charset.replace_all(&text, "");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        text.to_lowercase()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Cleans a segment's source file label: the `.txt` suffix is stripped
/// and every disallowed character becomes a single space (replaced, not
/// removed), then the label is lowercased.
pub struct LabelCleaner {
    disallowed: Regex,
}

impl LabelCleaner {
    pub fn new() -> Self {
        Self {
            disallowed: Regex::new(r"[^a-zA-Z\s'-]").unwrap(),
        }
    }

    pub fn clean(&self, label: &str) -> String {
        let label = label.strip_suffix(".txt").unwrap_or(label);
        let label = self.disallowed.replace_all(label, " ");
        label.to_lowercase()
    }
}

impl Default for LabelCleaner {
    fn default() -> Self {
        Self::new()
    }
}
