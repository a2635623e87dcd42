use serde::{Deserialize, Serialize};

/// Header carrying the originating file name in a rendered node.
pub const FILE_NAME_HEADER: &str = "file_name:";

/// Marker separating node metadata from the segment text. Everything
/// after the first occurrence is the text; a node without the marker
/// carries no text.
pub const TEXT_MARKER: &str = "Text:";

/// One bounded-length span of article text, the atomic unit of scoring.
///
/// `text` is absent when the rendered node had no `Text:` marker. Every
/// downstream transform is total over the absent case; only the scorer
/// treats it as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub file_name: String,
    pub text: Option<String>,
}

impl Segment {
    pub fn from_node(file_name: &str, node: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            text: text_from_node(node),
        }
    }
}

/// Render a chunk into its node form.
pub fn render_node(file_name: &str, chunk: &str) -> String {
    format!("{FILE_NAME_HEADER} {file_name}\n\n{TEXT_MARKER} {chunk}")
}

/// Everything after the first `Text:` marker, trimmed. `None` when the
/// marker is missing.
pub fn text_from_node(node: &str) -> Option<String> {
    node.split_once(TEXT_MARKER)
        .map(|(_, rest)| rest.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_round_trip_recovers_the_chunk() {
        let node = render_node("story.txt", "A short chunk.");
        let segment = Segment::from_node("story.txt", &node);
        assert_eq!(segment.text.as_deref(), Some("A short chunk."));
        assert_eq!(segment.file_name, "story.txt");
    }

    #[test]
    fn missing_marker_yields_absent_text() {
        let segment = Segment::from_node("story.txt", "file_name: story.txt\n\nno marker here");
        assert_eq!(segment.text, None);
    }

    #[test]
    fn text_starts_after_the_first_marker() {
        let node = format!("{TEXT_MARKER} outer {TEXT_MARKER} inner");
        assert_eq!(
            text_from_node(&node).as_deref(),
            Some(&*format!("outer {TEXT_MARKER} inner"))
        );
    }
}
