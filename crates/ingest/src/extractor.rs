use scraper::{ElementRef, Html, Selector};

use crate::article::ExtractedArticle;
use crate::fetcher::RawDocument;

pub const TITLE_SENTINEL: &str = "Title not found";
pub const BODY_SENTINEL: &str = "Article content not found";

/// Container classes whose paragraphs never belong to the article body.
const EXCLUDED_CONTAINERS: [&str; 2] = ["tjp-single__content-ads", "tjp-newsletter-box"];

/// Structural extractor for article pages.
///
/// Extraction is a pure function of the document: the title comes from a
/// fixed heading marker, the body is the concatenation of summary, opening
/// and every paragraph outside the ad and newsletter containers. Missing
/// markers degrade to sentinels, never to errors.
pub struct Extractor {
    title: Selector,
    summary: Selector,
    opening: Selector,
    opening_text: Selector,
    paragraph: Selector,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            title: Selector::parse("h1.tjp-title.tjp-title--single").unwrap(),
            summary: Selector::parse("p.tjp-summary.tjp-summary--single").unwrap(),
            opening: Selector::parse("div.tjp-opening").unwrap(),
            opening_text: Selector::parse("h1, p").unwrap(),
            paragraph: Selector::parse("p").unwrap(),
        }
    }

    pub fn extract(&self, doc: &RawDocument) -> ExtractedArticle {
        let html = Html::parse_document(&String::from_utf8_lossy(&doc.bytes));

        let title = html
            .select(&self.title)
            .next()
            .map(|el| element_text(&el))
            .unwrap_or_else(|| TITLE_SENTINEL.to_string());

        let summary = html
            .select(&self.summary)
            .next()
            .map(|el| element_text(&el))
            .unwrap_or_default();

        let opening = html
            .select(&self.opening)
            .next()
            .map(|div| {
                div.select(&self.opening_text)
                    .map(|el| element_text(&el))
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default();

        let mut paragraphs = Vec::new();
        for p in html.select(&self.paragraph) {
            let text = element_text(&p);
            if text.is_empty() || in_excluded_container(&p) {
                continue;
            }
            paragraphs.push(text);
        }
        let content = paragraphs.join(" ");

        let mut body = [summary, opening, content].join(" ").trim().to_string();
        if body.is_empty() {
            body = BODY_SENTINEL.to_string();
        }

        ExtractedArticle {
            url: doc.url.clone(),
            title,
            body,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn in_excluded_container(el: &ElementRef) -> bool {
    for ancestor in el.ancestors() {
        if let Some(div) = ElementRef::wrap(ancestor) {
            if div.value().name() == "div"
                && div
                    .value()
                    .classes()
                    .any(|c| EXCLUDED_CONTAINERS.contains(&c))
            {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> RawDocument {
        RawDocument {
            url: "https://example.com/article".to_string(),
            bytes: html.as_bytes().to_vec(),
        }
    }

    #[test]
    fn empty_document_yields_sentinels() {
        let extractor = Extractor::new();
        let article = extractor.extract(&doc("<html><body></body></html>"));
        assert_eq!(article.title, TITLE_SENTINEL);
        assert_eq!(article.body, BODY_SENTINEL);
    }

    #[test]
    fn body_is_never_empty() {
        let extractor = Extractor::new();
        let article = extractor.extract(&doc("<html><body><p>   </p></body></html>"));
        assert_eq!(article.body, BODY_SENTINEL);
    }

    #[test]
    fn extracts_title_summary_and_opening() {
        let html = r#"
            <html><body>
              <h1 class="tjp-title tjp-title--single"> Mine Expansion Approved </h1>
              <p class="tjp-summary tjp-summary--single">A short summary.</p>
              <div class="tjp-opening"><h1>Opening head</h1><p>Opening text.</p></div>
            </body></html>
        "#;
        let extractor = Extractor::new();
        let article = extractor.extract(&doc(html));
        assert_eq!(article.title, "Mine Expansion Approved");
        assert!(article.body.starts_with("A short summary."));
        assert!(article.body.contains("Opening headOpening text."));
    }

    #[test]
    fn excludes_ad_and_newsletter_paragraphs() {
        let html = r#"
            <html><body>
              <p>Visible paragraph.</p>
              <div class="tjp-single__content-ads"><p>Buy things now.</p></div>
              <div class="tjp-newsletter-box"><div><p>Subscribe today.</p></div></div>
            </body></html>
        "#;
        let extractor = Extractor::new();
        let article = extractor.extract(&doc(html));
        assert!(article.body.contains("Visible paragraph."));
        assert!(!article.body.contains("Buy things now."));
        assert!(!article.body.contains("Subscribe today."));
    }

    #[test]
    fn extraction_is_deterministic() {
        let html = r#"<html><body><p>Same input.</p></body></html>"#;
        let extractor = Extractor::new();
        let a = extractor.extract(&doc(html));
        let b = extractor.extract(&doc(html));
        assert_eq!(a.title, b.title);
        assert_eq!(a.body, b.body);
    }
}
