use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// One article after extraction: the source URL, a title (possibly the
/// title sentinel) and a never-empty body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub url: String,
    pub title: String,
    pub body: String,
}

impl ExtractedArticle {
    /// File name the article body is saved under. Spaces and path
    /// separators in the title become underscores.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.title)
            .replace(' ', "_")
            .replace('/', "_")
    }
}

/// Write one `.txt` body file per article into the work directory,
/// creating it if needed.
pub async fn save_articles(articles: &[ExtractedArticle], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create work directory {:?}", dir))?;

    for article in articles {
        let path = dir.join(article.file_name());
        fs::write(&path, &article.body)
            .await
            .with_context(|| format!("Failed to write article file {:?}", path))?;
        debug!(url = %article.url, path = %path.display(), "Saved article");
    }

    Ok(())
}

/// Read back every `.txt` article in the work directory as
/// (file name, body) pairs.
pub async fn read_articles(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut articles = Vec::new();

    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read work directory {:?}", dir))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let body = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read article file {:?}", path))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        articles.push((file_name, body));
    }

    Ok(articles)
}
