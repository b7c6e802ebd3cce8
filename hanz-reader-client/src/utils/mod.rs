//! Utility modules.

/// Char-limited previews of request and response bodies for logs.
pub mod log_preview;
