//! HTTP request helpers
//!
//! The analysis service has one reply convention for both endpoints: JSON
//! body on every status, `detail` on failures. These helpers send a prepared
//! `RequestBuilder`, log the exchange and turn the reply into either an
//! [`AnalysisResult`] or an [`AnalysisError`].

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AnalysisError, GENERIC_FAILURE_MESSAGE};
use crate::types::AnalysisResult;
use crate::utils::log_preview::body_preview;

/// HTTP helper set
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return its status code and body text.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any status the server answered with
    /// * `Err(AnalysisError::TransportFailure)` when the request or body read fails;
    ///   `timed_out` is set when the client timeout fired
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), AnalysisError> {
        log::debug!("[analysis] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AnalysisError::timeout(e)
            } else {
                AnalysisError::transport(e)
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[analysis] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                AnalysisError::timeout(format!("Failed to read response body: {e}"))
            } else {
                AnalysisError::transport(format!("Failed to read response body: {e}"))
            }
        })?;

        log::debug!(
            "[analysis] Response Body: {}",
            body_preview(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON body.
    ///
    /// A body that does not decode is a transport fault: there is no
    /// structured detail to show.
    pub fn parse_json<T>(response_text: &str) -> Result<T, AnalysisError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[analysis] JSON parse failed: {e}");
            log::error!(
                "[analysis] Raw response: {}",
                body_preview(response_text)
            );
            AnalysisError::transport(format!("Invalid response body: {e}"))
        })
    }

    /// Interpret a status and body from the analysis service.
    ///
    /// 2xx bodies decode as [`AnalysisResult`]. Anything else becomes
    /// [`AnalysisError::RequestFailed`] carrying the server's `detail`, or the
    /// generic message when no usable detail is present.
    pub fn interpret_response(
        status_code: u16,
        response_text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        if (200..300).contains(&status_code) {
            return Self::parse_json(response_text);
        }

        let message = serde_json::from_str::<Value>(response_text)
            .ok()
            .and_then(|body| extract_detail(&body))
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());

        log::warn!("[analysis] Request failed (HTTP {status_code}): {message}");

        Err(AnalysisError::RequestFailed {
            status: status_code,
            message,
        })
    }
}

/// Pull a human readable message out of an error body's `detail`.
///
/// A string is used verbatim. FastAPI validation errors arrive as a list of
/// objects with a `msg` field; their messages are joined. Anything else has
/// no usable detail.
fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
