use anyhow::Result;
use httpmock::prelude::*;
use publish_probe::core::preview::PREVIEW_CHAR_BUDGET;
use publish_probe::{
    ArticleDraft, ArticleFile, CommandHint, HttpHealthProbe, PayloadPrinter, SmokeTest,
};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const UNSET_KEY_VAR: &str = "PUBLISH_PROBE_IT_UNSET_KEY";

async fn run_against(base_url: &str, article: ArticleDraft) -> (publish_probe::Result<()>, String) {
    let probe = HttpHealthProbe::new(base_url, Duration::from_secs(5)).unwrap();
    let hint = CommandHint::new(base_url, UNSET_KEY_VAR);
    let smoke = SmokeTest::new(probe, article, hint);

    let mut out = Vec::new();
    let result = smoke.run(&mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_end_to_end_with_healthy_server() -> Result<()> {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200)
            .json_body(serde_json::json!({"status": "ok", "timestamp": "2026-01-01T00:00:00Z"}));
    });
    // 只做健康檢查，絕不送出建立請求
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/api/articles/create");
        then.status(201);
    });

    let base_url = server.base_url();
    let (result, output) = run_against(&base_url, ArticleDraft::sample()).await;

    assert!(result.is_ok());
    health_mock.assert();
    create_mock.assert_hits(0);

    assert!(output.contains(&format!("URL: {}/api/articles/create", base_url)));
    assert!(output.contains(
        "Title: L'Intelligence Artificielle Révolutionne la Maintenance des Flottes en 2026"
    ));
    assert!(output.contains(
        "✓ Server reachable: {\"status\":\"ok\",\"timestamp\":\"2026-01-01T00:00:00Z\"}"
    ));
    assert!(output.contains(&format!("curl -X POST \"{}/api/articles/create\" \\", base_url)));
    assert!(output.contains(&format!("-H \"X-API-Key: ${}\"", UNSET_KEY_VAR)));
    Ok(())
}

#[tokio::test]
async fn test_printed_preview_is_exact_budget() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(serde_json::json!({"status": "ok"}));
    });

    let article = ArticleDraft::sample();
    let rendered = PayloadPrinter::new().render(&article)?;
    let expected: String = rendered.chars().take(PREVIEW_CHAR_BUDGET).collect();

    let (result, output) = run_against(&server.base_url(), article).await;
    assert!(result.is_ok());

    let preview = output
        .split("Request structure:\n")
        .nth(1)
        .and_then(|rest| rest.split("\n\n✓ Test script prepared successfully!").next())
        .expect("preview section present");
    assert_eq!(preview, format!("{}...", expected));
    Ok(())
}

#[tokio::test]
async fn test_failed_health_check_prints_nothing_further() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(500);
    });

    let (result, output) = run_against(&server.base_url(), ArticleDraft::sample()).await;

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(output.contains("✗ Server error:"));
    assert!(!output.contains("=== PUBLISHING ==="));
    assert!(!output.contains("Request structure:"));
    assert!(!output.contains("curl"));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_exits_non_zero() -> Result<()> {
    let (result, output) = run_against("http://127.0.0.1:1", ArticleDraft::sample()).await;

    assert_eq!(result.unwrap_err().exit_code(), 1);
    assert!(output.starts_with("=== ARTICLE PUBLISH TEST ===\n"));
    assert!(!output.contains("Request structure:"));
    Ok(())
}

#[tokio::test]
async fn test_repeated_runs_are_byte_identical() -> Result<()> {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200)
            .json_body(serde_json::json!({"uptime": 42, "status": "ok"}));
    });

    let base_url = server.base_url();
    let (first_result, first) = run_against(&base_url, ArticleDraft::sample()).await;
    let (second_result, second) = run_against(&base_url, ArticleDraft::sample()).await;

    assert!(first_result.is_ok() && second_result.is_ok());
    health_mock.assert_hits(2);
    assert_eq!(first.as_bytes(), second.as_bytes());
    Ok(())
}

#[tokio::test]
async fn test_article_loaded_from_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[article]
title = "Pneus d'hiver obligatoires"
slug = "pneus-hiver-obligatoires"
excerpt = "Rappel du calendrier."
content = "Du 1er decembre au 15 mars."
categorySlug = "reglementation"
tagSlugs = ["pneus"]
status = "published"
generateCoverImage = false
"#,
    )?;
    let article = ArticleFile::from_file(temp_file.path())?.article;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(serde_json::json!({"status": "ok"}));
    });

    let (result, output) = run_against(&server.base_url(), article).await;
    assert!(result.is_ok());
    assert!(output.contains("Title: Pneus d'hiver obligatoires"));
    assert!(output.contains("\"slug\": \"pneus-hiver-obligatoires\""));
    assert!(!output.contains("Cover image generation"));
    Ok(())
}
