//! Presentation model for analysis results
//!
//! Pure functions from an [`AnalysisResult`] to the rows and labels a view
//! shows. Nothing here touches a UI, so percentage formatting, bar order and
//! the inclusion threshold are tested on their own.

use crate::types::{AnalysisResult, CoverageLevel, InputMode};

/// Title used when the service returns none.
pub const FALLBACK_TITLE: &str = "Text Analysis";

/// Source label for raw text analysis.
pub const RAW_TEXT_SOURCE: &str = "Raw Text Input";

/// HSK levels at or below this fraction get no bar.
pub const COVERAGE_EPSILON: f64 = 0.001;

/// Format a fraction as a percentage with one decimal, e.g. `0.1234 -> "12.3%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// One coverage bar.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRow {
    pub level: CoverageLevel,
    /// Fraction as received from the service.
    pub fraction: f64,
    /// Label text, the same one-decimal percentage the width is drawn from.
    pub percent: String,
}

impl CoverageRow {
    /// Fill ratio for widgets that only accept `0.0..=1.0`.
    ///
    /// The label keeps the received value; only the drawn width is limited.
    pub fn width_ratio(&self) -> f64 {
        if self.fraction.is_nan() {
            0.0
        } else {
            self.fraction.clamp(0.0, 1.0)
        }
    }
}

/// Coverage rows in fixed order HSK 1..6, Unknown.
///
/// An HSK level gets a row when its fraction exceeds [`COVERAGE_EPSILON`];
/// Unknown always gets one, zero included. The list is rebuilt on every call.
pub fn coverage_rows(result: &AnalysisResult) -> Vec<CoverageRow> {
    CoverageLevel::ORDER
        .iter()
        .copied()
        .filter_map(|level| {
            let fraction = result.coverage(level);
            (fraction > COVERAGE_EPSILON || level.is_unknown()).then(|| CoverageRow {
                level,
                fraction,
                percent: format_percent(fraction),
            })
        })
        .collect()
}

/// Everything the results region shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsModel {
    pub title: String,
    /// Source URL or the raw text label.
    pub source: String,
    pub score: String,
    pub tokens: String,
    pub unknown_percent: String,
    pub bars: Vec<CoverageRow>,
}

impl ResultsModel {
    /// Project a result onto the view.
    ///
    /// `raw_url_input` is the untrimmed URL field, used as the source when the
    /// service did not echo a URL and the active mode is [`InputMode::Url`].
    pub fn build(result: &AnalysisResult, mode: InputMode, raw_url_input: &str) -> Self {
        let title = non_empty(result.title.as_deref())
            .unwrap_or(FALLBACK_TITLE)
            .to_string();

        let source = match (non_empty(result.url.as_deref()), mode) {
            (Some(url), _) => url.to_string(),
            (None, InputMode::Url) => raw_url_input.to_string(),
            (None, InputMode::Text) => RAW_TEXT_SOURCE.to_string(),
        };

        Self {
            title,
            source,
            score: result.difficulty_score.to_string(),
            tokens: result.total_tokens.to_string(),
            unknown_percent: format_percent(result.unknown_coverage),
            bars: coverage_rows(result),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
