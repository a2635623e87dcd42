pub mod cleaner;
pub mod lemmatizer;
pub mod stopwords;

pub use cleaner::{LabelCleaner, TextCleaner};
pub use lemmatizer::Lemmatizer;
pub use stopwords::StopwordFilter;

use ingest::Segment;

/// The three text transforms (cleaning, stopword removal, lemmatization)
/// plus the source-label cleaner.
///
/// Every transform is total over the absent-text domain: an absent
/// segment text passes through unchanged and is never an error here.
pub struct Normalizer {
    text_cleaner: TextCleaner,
    label_cleaner: LabelCleaner,
    stopwords: StopwordFilter,
    lemmatizer: Lemmatizer,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            text_cleaner: TextCleaner::new(),
            label_cleaner: LabelCleaner::new(),
            stopwords: StopwordFilter::new(),
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Cleaning, then stopword removal, then lemmatization. Absent in,
    /// absent out.
    pub fn normalize_text(&self, text: Option<String>) -> Option<String> {
        text.map(|t| {
            let t = self.text_cleaner.clean(&t);
            let t = self.stopwords.remove(&t);
            self.lemmatizer.lemmatize(&t)
        })
    }

    pub fn normalize_segment(&self, segment: Segment) -> Segment {
        Segment {
            file_name: self.label_cleaner.clean(&segment.file_name),
            text: self.normalize_text(segment.text),
        }
    }

    pub fn normalize_all(&self, segments: Vec<Segment>) -> Vec<Segment> {
        segments
            .into_iter()
            .map(|segment| self.normalize_segment(segment))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
