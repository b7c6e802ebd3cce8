//! Log previews for article text
//!
//! Text requests carry whole articles and URL analysis echoes page content,
//! so bodies are shortened before they reach debug/error logs. Limits count
//! characters, not bytes: one Chinese character is one unit of preview.

use crate::types::AnalysisRequest;

/// Characters of a response body kept in log output.
const BODY_PREVIEW_CHARS: usize = 200;

/// Characters of submitted article text kept in log output.
const CONTENT_PREVIEW_CHARS: usize = 40;

/// First `limit` characters of `text`, with the total count when cut.
fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((cut, _)) => format!(
            "{}... [{} chars total]",
            &text[..cut],
            text.chars().count()
        ),
    }
}

/// Shorten a response body for logging.
pub fn body_preview(body: &str) -> String {
    preview(body, BODY_PREVIEW_CHARS)
}

/// One-line description of a request.
///
/// URLs are logged whole; article content only as a short preview.
pub fn describe_request(request: &AnalysisRequest) -> String {
    match request {
        AnalysisRequest::ByUrl { url } => format!("url={url}"),
        AnalysisRequest::ByContent {
            content,
            target_level,
        } => format!(
            "content=\"{}\" target_level={}",
            preview(content, CONTENT_PREVIEW_CHARS),
            target_level.as_deref().unwrap_or("-")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputMode;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"detail":"rate limited"}"#;
        assert_eq!(body_preview(s), s);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 200 个汉字是 600 字节，仍在上限内
        let s = "学".repeat(BODY_PREVIEW_CHARS);
        assert_eq!(body_preview(&s), s);

        let longer = "学".repeat(BODY_PREVIEW_CHARS + 1);
        let result = body_preview(&longer);
        assert!(result.starts_with(&s));
        assert!(result.ends_with("... [201 chars total]"));
    }

    #[test]
    fn content_request_shows_preview_and_level() {
        let article = "我是学生。".repeat(20);
        let request =
            AnalysisRequest::for_mode(InputMode::Text, article, Some("HSK2".into()));
        let line = describe_request(&request);
        assert!(line.starts_with("content=\"我是学生。"));
        assert!(line.contains("[100 chars total]"));
        assert!(line.ends_with("target_level=HSK2"));
    }

    #[test]
    fn url_request_logs_whole_url() {
        let request =
            AnalysisRequest::for_mode(InputMode::Url, "http://example.com/a".into(), None);
        assert_eq!(describe_request(&request), "url=http://example.com/a");
    }
}
