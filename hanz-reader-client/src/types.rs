use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ============ Input Mode ============

/// Which input the user is working with.
///
/// Exactly one mode is active at any time. The mode decides which input
/// field is read on submit and which endpoint the request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Analyze the page behind a URL (fetched by the service).
    #[default]
    Url,
    /// Analyze raw text pasted by the user.
    Text,
}

impl InputMode {
    /// All modes in display order.
    pub fn all() -> &'static [InputMode] {
        &[InputMode::Url, InputMode::Text]
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Url => InputMode::Text,
            InputMode::Text => InputMode::Url,
        }
    }

    /// Prompt shown when the field for this mode is submitted empty.
    pub fn empty_input_message(self) -> &'static str {
        match self {
            InputMode::Url => "Please enter a URL",
            InputMode::Text => "Please enter some text",
        }
    }
}

// ============ Request ============

/// Service path for URL analysis.
pub const ANALYZE_URL_PATH: &str = "/api/v1/analyze/url";

/// Service path for raw content analysis.
pub const ANALYZE_CONTENT_PATH: &str = "/api/v1/analyze";

/// Body of one analysis call.
///
/// The two variants go to two distinct server operations; see
/// [`AnalysisRequest::path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisRequest {
    /// `{"url": ...}`
    ByUrl { url: String },
    /// `{"content": ...}`, with the learner's target level when configured.
    ByContent {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        target_level: Option<String>,
    },
}

impl AnalysisRequest {
    /// Build the request for `mode` from an already trimmed, non-empty value.
    pub fn for_mode(mode: InputMode, value: String, target_level: Option<String>) -> Self {
        match mode {
            InputMode::Url => Self::ByUrl { url: value },
            InputMode::Text => Self::ByContent {
                content: value,
                target_level,
            },
        }
    }

    /// Mode this request belongs to.
    pub fn mode(&self) -> InputMode {
        match self {
            Self::ByUrl { .. } => InputMode::Url,
            Self::ByContent { .. } => InputMode::Text,
        }
    }

    /// Endpoint path relative to the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::ByUrl { .. } => ANALYZE_URL_PATH,
            Self::ByContent { .. } => ANALYZE_CONTENT_PATH,
        }
    }
}

// ============ Result ============

/// Overall difficulty reported by the service.
///
/// The service has reported both plain numbers and level labels (`"A1"`,
/// `"Unknown"`); either is shown exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DifficultyScore {
    Number(serde_json::Number),
    Label(String),
}

impl Default for DifficultyScore {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl fmt::Display for DifficultyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// Statistics returned by a successful analysis.
///
/// Coverage fractions are expected in `[0, 1]` and to sum to roughly one,
/// but the client shows them as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Page title (URL analysis only).
    #[serde(default)]
    pub title: Option<String>,
    /// Source URL (URL analysis only).
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub difficulty_score: DifficultyScore,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default, deserialize_with = "coverage_or_zero")]
    pub hsk_1_coverage: f64,
    #[serde(default, deserialize_with = "coverage_or_zero")]
    pub hsk_2_coverage: f64,
    #[serde(default, deserialize_with = "coverage_or_zero")]
    pub hsk_3_coverage: f64,
    #[serde(default, deserialize_with = "coverage_or_zero")]
    pub hsk_4_coverage: f64,
    #[serde(default, deserialize_with = "coverage_or_zero")]
    pub hsk_5_coverage: f64,
    #[serde(default, deserialize_with = "coverage_or_zero")]
    pub hsk_6_coverage: f64,
    #[serde(default, deserialize_with = "coverage_or_zero")]
    pub unknown_coverage: f64,
}

/// A coverage field that is `null` reads as zero, like a missing one.
fn coverage_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

// ============ Coverage Levels ============

/// One row of the coverage breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageLevel {
    Hsk(u8),
    Unknown,
}

impl CoverageLevel {
    /// Fixed display order: HSK 1 through 6, then Unknown.
    pub const ORDER: [CoverageLevel; 7] = [
        CoverageLevel::Hsk(1),
        CoverageLevel::Hsk(2),
        CoverageLevel::Hsk(3),
        CoverageLevel::Hsk(4),
        CoverageLevel::Hsk(5),
        CoverageLevel::Hsk(6),
        CoverageLevel::Unknown,
    ];

    /// Label shown next to the bar.
    pub fn label(self) -> String {
        match self {
            CoverageLevel::Hsk(n) => format!("HSK {n}"),
            CoverageLevel::Unknown => "Unknown".to_string(),
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, CoverageLevel::Unknown)
    }
}

impl AnalysisResult {
    /// Fraction of tokens at `level`. Levels outside 1..=6 read as zero.
    pub fn coverage(&self, level: CoverageLevel) -> f64 {
        match level {
            CoverageLevel::Hsk(1) => self.hsk_1_coverage,
            CoverageLevel::Hsk(2) => self.hsk_2_coverage,
            CoverageLevel::Hsk(3) => self.hsk_3_coverage,
            CoverageLevel::Hsk(4) => self.hsk_4_coverage,
            CoverageLevel::Hsk(5) => self.hsk_5_coverage,
            CoverageLevel::Hsk(6) => self.hsk_6_coverage,
            CoverageLevel::Hsk(_) => 0.0,
            CoverageLevel::Unknown => self.unknown_coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_request_serializes_single_field() {
        let req = AnalysisRequest::for_mode(InputMode::Url, "http://example.com".into(), None);
        let json = serde_json::to_value(&req).ok();
        assert_eq!(json, Some(serde_json::json!({ "url": "http://example.com" })));
        assert_eq!(req.path(), "/api/v1/analyze/url");
    }

    #[test]
    fn content_request_omits_unset_target_level() {
        let req = AnalysisRequest::for_mode(InputMode::Text, "你好".into(), None);
        let json = serde_json::to_value(&req).ok();
        assert_eq!(json, Some(serde_json::json!({ "content": "你好" })));
        assert_eq!(req.path(), "/api/v1/analyze");
    }

    #[test]
    fn content_request_carries_target_level() {
        let req = AnalysisRequest::for_mode(InputMode::Text, "你好".into(), Some("HSK2".into()));
        let json = serde_json::to_value(&req).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({ "content": "你好", "target_level": "HSK2" }))
        );
    }

    #[test]
    fn url_mode_ignores_target_level() {
        let req = AnalysisRequest::for_mode(InputMode::Url, "http://a".into(), Some("HSK2".into()));
        assert_eq!(req.mode(), InputMode::Url);
        let json = serde_json::to_value(&req).ok();
        assert_eq!(json, Some(serde_json::json!({ "url": "http://a" })));
    }

    #[test]
    fn result_missing_coverage_defaults_to_zero() {
        let res: Result<AnalysisResult, _> =
            serde_json::from_str(r#"{"difficulty_score": 3, "total_tokens": 120}"#);
        assert!(res.is_ok(), "unexpected parse result: {res:?}");
        let Ok(result) = res else {
            return;
        };
        assert_eq!(result.total_tokens, 120);
        assert!(result.title.is_none());
        for level in CoverageLevel::ORDER {
            assert!(result.coverage(level).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn result_null_coverage_reads_as_zero() {
        let res: Result<AnalysisResult, _> = serde_json::from_str(
            r#"{"difficulty_score": 3, "total_tokens": 1,
                "hsk_2_coverage": null, "unknown_coverage": 0.1}"#,
        );
        assert!(res.is_ok(), "unexpected parse result: {res:?}");
        let Ok(result) = res else {
            return;
        };
        assert!(result.hsk_2_coverage.abs() < f64::EPSILON);
        assert!((result.unknown_coverage - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn score_accepts_number_and_label() {
        let res: Result<AnalysisResult, _> =
            serde_json::from_str(r#"{"difficulty_score": "A1", "total_tokens": 4}"#);
        assert!(matches!(&res, Ok(r) if r.difficulty_score.to_string() == "A1"));

        let res: Result<AnalysisResult, _> =
            serde_json::from_str(r#"{"difficulty_score": 3, "total_tokens": 4}"#);
        assert!(matches!(&res, Ok(r) if r.difficulty_score.to_string() == "3"));

        let res: Result<AnalysisResult, _> =
            serde_json::from_str(r#"{"difficulty_score": 2.5, "total_tokens": 4}"#);
        assert!(matches!(&res, Ok(r) if r.difficulty_score.to_string() == "2.5"));
    }

    #[test]
    fn mode_toggle_round_trips() {
        assert_eq!(InputMode::Url.toggled(), InputMode::Text);
        assert_eq!(InputMode::Text.toggled().toggled(), InputMode::Text);
    }

    #[test]
    fn coverage_order_is_fixed() {
        let labels: Vec<String> = CoverageLevel::ORDER.iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            ["HSK 1", "HSK 2", "HSK 3", "HSK 4", "HSK 5", "HSK 6", "Unknown"]
        );
    }
}
