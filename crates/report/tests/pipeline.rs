//! End-to-end run over prefetched documents: one document that splits
//! into two segments and one failed fetch, which must contribute nothing.

use ingest::{Extractor, RawDocument, Segmenter, SegmenterConfig, save_articles, segment_articles};
use normalize::Normalizer;
use report::{SentimentCounts, write_table};
use sentiment::{SentimentClassifier, score_segments};

fn article_html() -> String {
    // 12 sentences of 10 words each: enough for exactly two chunks under
    // the 100-token budget.
    let sentence = "Local miners report strong growth across the northern region today.";
    let body: Vec<&str> = (0..12).map(|_| sentence).collect();
    format!(
        r#"<html><body>
          <h1 class="tjp-title tjp-title--single">Mining Boom Continues</h1>
          <p>{}</p>
        </body></html>"#,
        body.join(" ")
    )
}

#[tokio::test]
async fn failed_fetch_contributes_zero_rows() {
    let workdir = std::env::temp_dir().join("pipeline_e2e_workdir");
    let _ = tokio::fs::remove_dir_all(&workdir).await;

    // Two identifiers: the first fetch succeeded, the second did not.
    let fetched: Vec<Option<RawDocument>> = vec![
        Some(RawDocument {
            url: "https://example.com/boom".to_string(),
            bytes: article_html().into_bytes(),
        }),
        None,
    ];

    let extractor = Extractor::new();
    let articles: Vec<_> = fetched
        .into_iter()
        .flatten()
        .map(|doc| extractor.extract(&doc))
        .collect();
    assert_eq!(articles.len(), 1);

    save_articles(&articles, &workdir).await.unwrap();

    let segmenter = Segmenter::new(SegmenterConfig::default());
    let segments = segment_articles(&workdir, &segmenter).await.unwrap();
    assert_eq!(segments.len(), 2);

    let normalizer = Normalizer::new();
    let segments = normalizer.normalize_all(segments);
    for segment in &segments {
        assert_eq!(segment.file_name, "mining boom continues");
    }

    let classifier = SentimentClassifier::new();
    let scored = score_segments(&classifier, &segments).unwrap();
    assert_eq!(scored.len(), 2);

    let counts = SentimentCounts::from_segments(&scored);
    assert_eq!(counts.total(), 2);

    let table = std::env::temp_dir().join("pipeline_e2e_result.csv");
    write_table(&scored, &table).unwrap();
    let content = std::fs::read_to_string(&table).unwrap();
    assert_eq!(content.lines().count(), 3); // header + one row per segment
}
