pub mod article;
pub mod extractor;
pub mod fetcher;
pub mod segment;
pub mod segmenter;
pub mod sources;

pub use article::{ExtractedArticle, read_articles, save_articles};
pub use extractor::Extractor;
pub use fetcher::{Fetcher, RawDocument};
pub use segment::Segment;
pub use segmenter::{Segmenter, SegmenterConfig};
pub use sources::{SourceRecord, load_sources};

use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// Fetch and extract every source article, one URL at a time.
///
/// A failed fetch is logged and contributes nothing; extraction itself
/// cannot fail (missing markup degrades to sentinels).
pub async fn collect_articles(
    fetcher: &Fetcher,
    extractor: &Extractor,
    sources: &[SourceRecord],
) -> Vec<ExtractedArticle> {
    let mut articles = Vec::new();

    for source in sources {
        match fetcher.fetch(&source.url).await {
            Some(doc) => articles.push(extractor.extract(&doc)),
            None => warn!(url = %source.url, "Failed to fetch or parse the article"),
        }
    }

    articles
}

/// Segment every saved article: read the `.txt` files back, split each
/// body on the token budget, and parse each rendered node into a
/// [`Segment`].
pub async fn segment_articles(dir: &Path, segmenter: &Segmenter) -> Result<Vec<Segment>> {
    let files = read_articles(dir).await?;

    let mut segments = Vec::new();
    for (file_name, body) in files {
        for chunk in segmenter.split(&body) {
            let node = segment::render_node(&file_name, &chunk);
            segments.push(Segment::from_node(&file_name, &node));
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn segments_carry_their_source_file_name() {
        let dir = std::env::temp_dir().join("ingest_segment_articles");
        let _ = tokio::fs::remove_dir_all(&dir).await;

        let articles = vec![ExtractedArticle {
            url: "https://example.com/one".to_string(),
            title: "One Story".to_string(),
            body: "A first sentence. A second sentence.".to_string(),
        }];
        save_articles(&articles, &dir).await.unwrap();

        let segmenter = Segmenter::new(SegmenterConfig::default());
        let segments = segment_articles(&dir, &segmenter).await.unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].file_name, "One_Story.txt");
        assert_eq!(
            segments[0].text.as_deref(),
            Some("A first sentence. A second sentence.")
        );
    }
}
