//! Page fetching and HTML field extraction.

use copytrace_core::document::Metadata;
use scraper::{Html, Selector};

/// Extracted fields of one fetched page.
#[derive(Debug)]
pub struct FetchedPage {
    pub title: String,
    pub text: String,
    pub metadata: Metadata,
}

/// Fetches one page and extracts its text and metadata.
///
/// Any failure (connection, status, body read) yields `None` and the
/// candidate is skipped; one dead link must not cost the whole batch.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Option<FetchedPage> {
    let response = client.get(url).send().await.ok()?;
    let body = response.error_for_status().ok()?.text().await.ok()?;
    Some(extract_page(&body))
}

/// Pulls title, body text, and named metadata out of an HTML document.
///
/// Missing fields are `None`; absence stays explicit so the confidence
/// scorer's completeness bonus counts only real metadata. The one default
/// is `language`, which falls back to `en` when the markup has no `lang`.
pub fn extract_page(html: &str) -> FetchedPage {
    let document = Html::parse_document(html);

    let title = select_text(&document, "title")
        .unwrap_or_else(|| "Untitled".to_string());
    let text = select_text(&document, "body").unwrap_or_default();

    let metadata = Metadata {
        description: meta_content(&document, r#"meta[name="description"]"#),
        keywords: meta_content(&document, r#"meta[name="keywords"]"#),
        author: meta_content(&document, r#"meta[name="author"]"#),
        published_date: meta_content(&document, r#"meta[property="article:published_time"]"#),
        last_modified: meta_content(&document, r#"meta[property="article:modified_time"]"#),
        language: attr_of(&document, "html", "lang").or_else(|| Some("en".to_string())),
    };

    FetchedPage {
        title,
        text,
        metadata,
    }
}

/// Text of the first element matching `selector`, whitespace-collapsed.
fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let joined = element.text().collect::<Vec<_>>().join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// `content` attribute of the first element matching `selector`.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    attr_of(document, selector, "content")
}

/// Non-empty `attr` of the first element matching `selector`.
fn attr_of(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let value = document.select(&selector).next()?.value().attr(attr)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
