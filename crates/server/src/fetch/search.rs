//! Search-results scraping and the production fetcher.

use crate::fetch::page::fetch_page;
use crate::fetch::SourceFetcher;
use copytrace_core::config;
use copytrace_core::document::Document;
use futures::future::join_all;
use scraper::{Html, Selector};
use std::time::Duration;

/// A search hit before its page has been fetched.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub snippet: Option<String>,
}

/// Production fetcher: scrapes a search results page for organic hits, then
/// fetches the top hits concurrently.
#[derive(Clone)]
pub struct WebFetcher {
    client: reqwest::Client,
    search_base: String,
}

impl WebFetcher {
    /// Builds a fetcher with browser-like headers and a per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(config::FETCH_ACCEPT),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static(config::FETCH_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(config::FETCH_USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .expect("client with static configuration");

        Self {
            client,
            search_base: config::DEFAULT_SEARCH_BASE.to_string(),
        }
    }

    /// Overrides the search endpoint (alternate engines, test servers).
    pub fn with_search_base(mut self, base: impl Into<String>) -> Self {
        self.search_base = base.into();
        self
    }

    async fn search(&self, query: &str) -> Vec<SearchHit> {
        let response = match self
            .client
            .get(&self.search_base)
            .query(&[("q", query)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "search request failed");
                return Vec::new();
            }
        };

        match response.text().await {
            Ok(body) => parse_search_results(&body),
            Err(err) => {
                tracing::warn!(error = %err, "search response body unreadable");
                Vec::new()
            }
        }
    }
}

impl SourceFetcher for WebFetcher {
    async fn search_and_fetch(&self, query: &str) -> Vec<Document> {
        let mut hits = self.search(query).await;
        hits.truncate(config::MAX_CANDIDATES);
        tracing::debug!(hits = hits.len(), "search hits after cap");

        let fetches = hits.into_iter().map(|hit| async move {
            let page = fetch_page(&self.client, &hit.url).await?;
            Some(Document {
                url: hit.url,
                title: page.title,
                snippet: hit.snippet,
                raw_text: page.text,
                metadata: page.metadata,
            })
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}

/// Extracts organic result hits (`div.g` blocks) from a search results
/// page. Only absolute http(s) links count; everything else is navigation
/// chrome.
pub fn parse_search_results(html: &str) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let Ok(result_selector) = Selector::parse("div.g") else {
        return Vec::new();
    };
    let Ok(link_selector) = Selector::parse("a") else {
        return Vec::new();
    };
    let Ok(title_selector) = Selector::parse("h3") else {
        return Vec::new();
    };
    let Ok(snippet_selector) = Selector::parse("div.VwiC3b") else {
        return Vec::new();
    };

    let mut hits = Vec::new();
    for result in document.select(&result_selector) {
        let Some(href) = result
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            continue;
        };
        if !href.starts_with("http") {
            continue;
        }

        let title = result
            .select(&title_selector)
            .next()
            .map(|h| h.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "Untitled".to_string());

        let snippet = result
            .select(&snippet_selector)
            .next()
            .map(|s| s.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());

        hits.push(SearchHit {
            url: href.to_string(),
            title,
            snippet,
        });
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: &str = r#"<html><body>
<div class="g">
  <a href="https://example.org/geese"><h3>Geese migration</h3></a>
  <div class="VwiC3b">How geese navigate at night.</div>
</div>
<div class="g">
  <a href="/relative/link"><h3>Navigation chrome</h3></a>
</div>
<div class="g">
  <a href="http://example.net/tides"></a>
</div>
</body></html>"#;

    #[test]
    fn parses_absolute_links_only() {
        let hits = parse_search_results(RESULTS);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].url, "https://example.org/geese");
        assert_eq!(hits[1].url, "http://example.net/tides");
    }

    #[test]
    fn captures_title_and_snippet_when_present() {
        let hits = parse_search_results(RESULTS);
        assert_eq!(hits[0].title, "Geese migration");
        assert_eq!(
            hits[0].snippet.as_deref(),
            Some("How geese navigate at night.")
        );
        assert_eq!(hits[1].title, "Untitled");
        assert_eq!(hits[1].snippet, None);
    }

    #[test]
    fn empty_page_yields_no_hits() {
        assert!(parse_search_results("<html></html>").is_empty());
    }
}
