use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One row of the input table: a single article URL.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRecord {
    pub url: String,
}

/// Load the article URL list from a CSV file with a `url` column.
///
/// Order and duplicates are preserved. A missing input file or a missing
/// `url` column is fatal; no per-row validation is done beyond that.
pub fn load_sources<P: AsRef<Path>>(path: P) -> Result<Vec<SourceRecord>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open source list: {:?}", path.as_ref()))?;

    let mut reader = csv::Reader::from_reader(file);

    let has_url = reader
        .headers()
        .context("Failed to read source list headers")?
        .iter()
        .any(|h| h == "url");
    if !has_url {
        bail!("source list {:?} is missing a 'url' column", path.as_ref());
    }

    let mut sources = Vec::new();
    for row in reader.deserialize() {
        let record: SourceRecord = row.context("Failed to parse source row")?;
        sources.push(record);
    }

    Ok(sources)
}
