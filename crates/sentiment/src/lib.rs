pub mod classifier;
pub mod lexicon;

pub use classifier::{Polarity, SentimentClassifier, Verdict};
pub use lexicon::Lexicon;

use anyhow::{Result, bail};
use ingest::Segment;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Final per-segment label, derived from the signed score alone:
/// `positive` iff the score is strictly greater than zero. A score of
/// exactly 0.0 is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
        }
    }
}

/// One row of the final table: a normalized segment with its signed
/// score in [-1, 1] and label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredSegment {
    pub file_name: String,
    pub sentence: String,
    pub score: f64,
    pub label: Label,
}

/// Signed score: the classifier confidence, negated for a NEGATIVE
/// verdict.
pub fn signed_score(verdict: &Verdict) -> f64 {
    match verdict.polarity {
        Polarity::Positive => verdict.confidence,
        Polarity::Negative => -verdict.confidence,
    }
}

/// Score every segment in order.
///
/// A segment whose text is absent is a classifier failure: it propagates
/// as an error and aborts the run, so no output past this stage is ever
/// written for a run that hits one.
pub fn score_segments(
    classifier: &SentimentClassifier,
    segments: &[Segment],
) -> Result<Vec<ScoredSegment>> {
    let mut scored = Vec::with_capacity(segments.len());

    for segment in segments {
        let Some(text) = segment.text.as_deref() else {
            bail!(
                "classifier received a segment with no text (source: {})",
                segment.file_name
            );
        };

        let verdict = classifier.classify(text);
        let score = signed_score(&verdict);
        debug!(file_name = %segment.file_name, score, "Scored segment");

        scored.push(ScoredSegment {
            file_name: segment.file_name.clone(),
            sentence: text.to_string(),
            score,
            label: Label::from_score(score),
        });
    }

    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: Option<&str>) -> Segment {
        Segment {
            file_name: "story.txt".to_string(),
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn label_is_positive_iff_score_is_strictly_positive() {
        assert_eq!(Label::from_score(0.3), Label::Positive);
        assert_eq!(Label::from_score(1.0), Label::Positive);
        assert_eq!(Label::from_score(-0.3), Label::Negative);
        assert_eq!(Label::from_score(0.0), Label::Negative);
    }

    #[test]
    fn signed_score_negates_negative_verdicts() {
        let positive = Verdict {
            polarity: Polarity::Positive,
            confidence: 0.8,
        };
        let negative = Verdict {
            polarity: Polarity::Negative,
            confidence: 0.8,
        };
        assert_eq!(signed_score(&positive), 0.8);
        assert_eq!(signed_score(&negative), -0.8);
    }

    #[test]
    fn scores_every_segment_in_order() {
        let classifier = SentimentClassifier::new();
        let segments = vec![
            segment(Some("strong growth record profit")),
            segment(Some("pollution damage disaster")),
        ];
        let scored = score_segments(&classifier, &segments).unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].label, Label::Positive);
        assert_eq!(scored[1].label, Label::Negative);
        assert!(scored[0].score > 0.0 && scored[0].score <= 1.0);
        assert!(scored[1].score < 0.0 && scored[1].score >= -1.0);
    }

    #[test]
    fn absent_text_aborts_the_run() {
        let classifier = SentimentClassifier::new();
        let segments = vec![segment(Some("strong growth")), segment(None)];
        let err = score_segments(&classifier, &segments).unwrap_err();
        assert!(err.to_string().contains("no text"));
    }

    #[test]
    fn neutral_text_scores_zero_and_labels_negative() {
        let classifier = SentimentClassifier::new();
        let scored = score_segments(&classifier, &[segment(Some("committee meeting tuesday"))])
            .unwrap();
        assert_eq!(scored[0].score, 0.0);
        assert_eq!(scored[0].label, Label::Negative);
    }
}
