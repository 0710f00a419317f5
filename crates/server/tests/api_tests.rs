use copytrace_core::document::{Document, Metadata};
use copytrace_server::api::create_router;
use copytrace_server::api::handlers::AppState;
use copytrace_server::fetch::SourceFetcher;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Fetcher returning a canned candidate list, ignoring the query.
#[derive(Clone)]
struct StubFetcher {
    candidates: Vec<Document>,
}

impl SourceFetcher for StubFetcher {
    async fn search_and_fetch(&self, _query: &str) -> Vec<Document> {
        self.candidates.clone()
    }
}

async fn spawn_app(candidates: Vec<Document>) -> String {
    let prometheus_handle =
        match metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder() {
            Ok(handle) => handle,
            Err(_) => metrics_exporter_prometheus::PrometheusBuilder::new()
                .build_recorder()
                .handle(),
        };

    let state = AppState {
        fetcher: StubFetcher { candidates },
        prometheus_handle,
        start_time: Instant::now(),
    };
    let app = create_router(state, Duration::from_secs(30));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client() -> Client {
    Client::new()
}

fn candidate(url: &str, text: &str, metadata: Metadata) -> Document {
    Document {
        url: url.to_string(),
        title: format!("Title of {url}"),
        snippet: Some("a snippet".to_string()),
        raw_text: text.to_string(),
        metadata,
    }
}

async fn check(base_url: &str, content: &str) -> reqwest::Response {
    client()
        .get(format!("{}/plagiarism", base_url))
        .query(&[("content", content)])
        .send()
        .await
        .expect("Failed to send request")
}

const SUBMISSION: &str = "Migrating geese navigate by the stars and the coastline below them.";

#[tokio::test]
async fn health_returns_ok() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = client()
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn missing_content_is_rejected() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = client()
        .get(format!("{}/plagiarism", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Content parameter is required");
}

#[tokio::test]
async fn short_content_is_rejected() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = check(&base_url, "too short").await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn punctuation_only_content_is_rejected() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = check(&base_url, "!!! ??? ... ---").await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "No valid content to analyze after processing");
}

#[tokio::test]
async fn no_candidates_returns_not_found() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = check(&base_url, SUBMISSION).await;

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "No comparison sources found");
}

// Simulated fetch faults: every candidate fetch failed, so the fetcher
// delivers an empty batch and the pipeline must answer with the
// insufficient-sources result, not a fault.
#[tokio::test]
async fn all_failed_fetches_return_not_found() {
    let base_url = spawn_app(Vec::new()).await;

    for _ in 0..5 {
        let resp = check(&base_url, SUBMISSION).await;
        assert_eq!(resp.status(), 404);
    }
}

#[tokio::test]
async fn identical_candidate_scores_full_confidence() {
    let base_url = spawn_app(vec![candidate(
        "https://match.example/article",
        SUBMISSION,
        Metadata::default(),
    )])
    .await;

    let resp = check(&base_url, SUBMISSION).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");

    let sources = &body["data"]["plagiarismResults"]["sources"];
    assert_eq!(sources[0]["confidenceScore"], 100.0);
    assert_eq!(sources[0]["isPlagiarized"], true);
    assert_eq!(sources[0]["url"], "https://match.example/article");

    let summary = &body["data"]["plagiarismResults"]["summary"];
    assert_eq!(summary["overallPlagiarized"], true);
    assert_eq!(summary["plagiarizedSources"], 1);
    assert_eq!(summary["mostLikelySource"], "https://match.example/article");
    assert_eq!(summary["mostLikelySourceConfidence"], 100.0);
}

#[tokio::test]
async fn disjoint_candidate_is_not_plagiarized() {
    let base_url = spawn_app(vec![candidate(
        "https://unrelated.example",
        "zebra xylophone quartz jumbo flask nimbus vortex glyph prism oracle",
        Metadata::default(),
    )])
    .await;

    let resp = check(&base_url, SUBMISSION).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    let sources = &body["data"]["plagiarismResults"]["sources"];
    assert_eq!(sources[0]["similarity"], 0.0);
    assert_eq!(sources[0]["isPlagiarized"], false);

    let summary = &body["data"]["plagiarismResults"]["summary"];
    assert_eq!(summary["overallPlagiarized"], false);
    assert_eq!(summary["plagiarizedSources"], 0);
}

#[tokio::test]
async fn sources_are_ranked_by_confidence() {
    let base_url = spawn_app(vec![
        candidate(
            "https://unrelated.example",
            "zebra xylophone quartz jumbo flask nimbus vortex glyph prism oracle",
            Metadata::default(),
        ),
        candidate("https://match.example", SUBMISSION, Metadata::default()),
    ])
    .await;

    let resp = check(&base_url, SUBMISSION).await;
    let body: serde_json::Value = resp.json().await.unwrap();

    let sources = body["data"]["plagiarismResults"]["sources"]
        .as_array()
        .unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0]["url"], "https://match.example");
    assert_eq!(sources[1]["url"], "https://unrelated.example");

    let summary = &body["data"]["plagiarismResults"]["summary"];
    assert_eq!(summary["totalSourcesAnalyzed"], 2);
    assert_eq!(summary["highConfidenceSources"], 1);
}

#[tokio::test]
async fn metadata_raises_confidence() {
    let full = Metadata {
        description: Some("A field guide to goose migration.".into()),
        keywords: Some("geese,migration".into()),
        author: Some("J. Doe".into()),
        published_date: Some("2024-03-01".into()),
        last_modified: Some("2024-04-01".into()),
        language: Some("en".into()),
    };
    let text = "zebra xylophone quartz jumbo flask nimbus vortex glyph prism oracle";
    let base_url = spawn_app(vec![
        candidate("https://bare.example", text, Metadata::default()),
        candidate("https://described.example", text, full),
    ])
    .await;

    let resp = check(&base_url, SUBMISSION).await;
    let body: serde_json::Value = resp.json().await.unwrap();

    let sources = body["data"]["plagiarismResults"]["sources"]
        .as_array()
        .unwrap();
    assert_eq!(sources[0]["url"], "https://described.example");
    let described = sources[0]["confidenceScore"].as_f64().unwrap();
    let bare = sources[1]["confidenceScore"].as_f64().unwrap();
    assert!((described - bare - 15.0).abs() < 1e-9);
}

#[tokio::test]
async fn submission_analysis_is_echoed() {
    let base_url = spawn_app(vec![candidate(
        "https://match.example",
        SUBMISSION,
        Metadata::default(),
    )])
    .await;

    let resp = check(&base_url, SUBMISSION).await;
    let body: serde_json::Value = resp.json().await.unwrap();

    let user = &body["data"]["userProvidedContent"];
    assert_eq!(user["content"], SUBMISSION);
    assert_eq!(user["characterCount"], SUBMISSION.len());
    assert_eq!(user["textStats"]["wordCount"], 11);
    assert!(user["textStats"]["lexicalDensity"].is_string());
    assert!(user["sentiment"]["score"].is_number());
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = client()
        .get(format!("{}/nope", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn metrics_endpoint_renders() {
    let base_url = spawn_app(Vec::new()).await;

    let resp = client()
        .get(format!("{}/metrics", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}
