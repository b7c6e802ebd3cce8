//! HTTP 后端集成测试
//!
//! 默认用本地一次性桩服务运行。对真实分析服务的测试需要:
//! ```bash
//! HANZ_READER_URL=http://127.0.0.1:8000 \
//!     cargo test -p hanz-reader-client --test http_backend_test -- --ignored --nocapture
//! ```

mod common;

use common::{Reply, backend_for, closed_port_url, serve_once};
use hanz_reader_client::{
    AnalysisBackend, AnalysisError, AnalysisRequest, GENERIC_FAILURE_MESSAGE, InputMode,
    TIMEOUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};

const SAMPLE_RESULT: &str = r#"{
    "title": "Example",
    "url": "http://example.com",
    "difficulty_score": 3,
    "total_tokens": 120,
    "hsk_1_coverage": 0.5,
    "hsk_2_coverage": 0.2,
    "hsk_3_coverage": 0.1,
    "hsk_4_coverage": 0.1,
    "hsk_5_coverage": 0.0,
    "hsk_6_coverage": 0.0,
    "unknown_coverage": 0.1
}"#;

// ============ 请求格式 ============

#[tokio::test]
async fn test_url_request_posts_json_to_url_endpoint() {
    let (base, server) = require_some!(serve_once(Reply::Json(200, SAMPLE_RESULT)).await);
    let backend = require_some!(backend_for(&base, 5));

    let request = AnalysisRequest::for_mode(InputMode::Url, "http://example.com".into(), None);
    let result = require_ok!(backend.analyze(&request).await, "analyze 调用失败");
    assert_eq!(result.total_tokens, 120);
    assert_eq!(result.title.as_deref(), Some("Example"));

    let captured = require_ok!(server.await);
    assert_eq!(captured.request_line, "POST /api/v1/analyze/url HTTP/1.1");
    assert!(
        captured
            .header("content-type")
            .is_some_and(|v| v.starts_with("application/json"))
    );
    assert_eq!(
        captured.json_body(),
        serde_json::json!({ "url": "http://example.com" })
    );
}

#[tokio::test]
async fn test_text_request_posts_content_to_analyze_endpoint() {
    let (base, server) = require_some!(serve_once(Reply::Json(200, SAMPLE_RESULT)).await);
    let backend = require_some!(backend_for(&format!("{base}/"), 5));

    let request = AnalysisRequest::for_mode(InputMode::Text, "你好，我是学生。".into(), None);
    require_ok!(backend.analyze(&request).await, "analyze 调用失败");

    let captured = require_ok!(server.await);
    assert_eq!(captured.request_line, "POST /api/v1/analyze HTTP/1.1");
    assert_eq!(
        captured.json_body(),
        serde_json::json!({ "content": "你好，我是学生。" })
    );
}

// ============ 失败映射 ============

#[tokio::test]
async fn test_error_detail_is_passed_through() {
    let (base, _server) =
        require_some!(serve_once(Reply::Json(400, r#"{"detail": "Could not fetch URL"}"#)).await);
    let backend = require_some!(backend_for(&base, 5));

    let request = AnalysisRequest::for_mode(InputMode::Url, "http://bad".into(), None);
    let res = backend.analyze(&request).await;
    assert_eq!(
        res,
        Err(AnalysisError::RequestFailed {
            status: 400,
            message: "Could not fetch URL".into(),
        })
    );
}

#[tokio::test]
async fn test_error_without_detail_uses_generic_message() {
    let (base, _server) = require_some!(serve_once(Reply::Json(500, "{}")).await);
    let backend = require_some!(backend_for(&base, 5));

    let request = AnalysisRequest::for_mode(InputMode::Text, "你好".into(), None);
    let res = backend.analyze(&request).await;
    assert!(
        matches!(&res, Err(e @ AnalysisError::RequestFailed { status: 500, .. }) if e.user_message() == GENERIC_FAILURE_MESSAGE),
        "unexpected result: {res:?}"
    );
}

#[tokio::test]
async fn test_unreachable_service_is_transport_failure() {
    let base = require_some!(closed_port_url().await);
    let backend = require_some!(backend_for(&base, 5));

    let request = AnalysisRequest::for_mode(InputMode::Url, "http://example.com".into(), None);
    let res = backend.analyze(&request).await;
    assert!(
        matches!(
            &res,
            Err(e @ AnalysisError::TransportFailure { timed_out: false, .. })
                if e.user_message() == TRANSPORT_FAILURE_MESSAGE
        ),
        "unexpected result: {res:?}"
    );
}

#[tokio::test]
async fn test_silent_service_times_out() {
    let (base, _server) = require_some!(serve_once(Reply::Hang).await);
    let backend = require_some!(backend_for(&base, 1));

    let request = AnalysisRequest::for_mode(InputMode::Url, "http://example.com".into(), None);
    let res = backend.analyze(&request).await;
    assert!(
        matches!(
            &res,
            Err(e @ AnalysisError::TransportFailure { timed_out: true, .. })
                if e.user_message() == TIMEOUT_MESSAGE
        ),
        "unexpected result: {res:?}"
    );
}

// ============ 真实服务 ============

#[tokio::test]
#[ignore = "integration test: requires HANZ_READER_URL pointing at a running analysis service"]
async fn test_live_text_analysis() {
    skip_if_no_service!("HANZ_READER_URL");

    let base = std::env::var("HANZ_READER_URL").unwrap_or_default();
    let backend = require_some!(backend_for(&base, 30));

    let request = AnalysisRequest::for_mode(InputMode::Text, "我是学生。我喜欢学习中文。".into(), None);
    let result = require_ok!(backend.analyze(&request).await, "analyze 调用失败");
    assert!(result.total_tokens > 0, "分词结果不应为空");

    println!(
        "✓ 文本分析通过: score={}, tokens={}",
        result.difficulty_score, result.total_tokens
    );
}
