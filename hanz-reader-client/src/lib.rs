//! # hanz-reader-client
//!
//! Client for the Hanz Reader analysis service, which grades Chinese text by
//! the HSK level of its vocabulary, plus the UI-agnostic controller that
//! drives an analysis page.
//!
//! ## Endpoints
//!
//! | Mode | Path | Body |
//! |------|------|------|
//! | URL | `/api/v1/analyze/url` | `{"url": "..."}` |
//! | Text | `/api/v1/analyze` | `{"content": "...", "target_level": "..."}` |
//!
//! `target_level` is optional and only sent when configured.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hanz_reader_client::{
//!     AnalysisBackend, AnalysisRequest, ClientConfig, HttpAnalysisBackend, InputMode,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = HttpAnalysisBackend::new(ClientConfig::default())?;
//!
//!     let request = AnalysisRequest::for_mode(InputMode::Text, "我是学生。".into(), None);
//!     let result = backend.analyze(&request).await?;
//!
//!     println!("{} tokens, score {}", result.total_tokens, result.difficulty_score);
//!     Ok(())
//! }
//! ```
//!
//! ## Driving a View
//!
//! A front end implements [`ViewPort`] and hands it to an
//! [`AnalysisController`]. The controller validates input, shows loading,
//! error and results, and keeps at most one submission in flight.
//!
//! ```rust,no_run
//! # use hanz_reader_client::*;
//! # async fn example<V: ViewPort>(view: V, backend: HttpAnalysisBackend) {
//! let mut controller = AnalysisController::new(view);
//! controller.set_mode(InputMode::Url);
//! match controller.submit(&backend).await {
//!     SubmitOutcome::Rendered => {}
//!     SubmitOutcome::Failed(e) => eprintln!("{e}"),
//!     SubmitOutcome::Ignored => {}
//! }
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, AnalysisError>`](AnalysisError):
//!
//! - [`AnalysisError::EmptyInput`]: nothing to submit, no request sent
//! - [`AnalysisError::RequestFailed`]: the service rejected the request
//! - [`AnalysisError::TransportFailure`]: unreachable, timed out or unreadable reply
//! - [`AnalysisError::SubmissionInFlight`]: a previous submission is still running
//!
//! Nothing is retried.

mod backend;
mod config;
mod controller;
mod error;
mod http_client;
mod presentation;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{
    AnalysisError, GENERIC_FAILURE_MESSAGE, Result, TIMEOUT_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};

// Re-export the backend trait and its HTTP implementation
pub use backend::HttpAnalysisBackend;
pub use traits::AnalysisBackend;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

pub use controller::{AnalysisController, SubmitOutcome, Submission, ViewPort};

pub use presentation::{
    COVERAGE_EPSILON, CoverageRow, FALLBACK_TITLE, RAW_TEXT_SOURCE, ResultsModel, coverage_rows,
    format_percent,
};

pub use types::{
    ANALYZE_CONTENT_PATH, ANALYZE_URL_PATH, AnalysisRequest, AnalysisResult, CoverageLevel,
    DifficultyScore, InputMode,
};
