use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AnalysisRequest, AnalysisResult};

/// Analysis backend trait
///
/// One call per submission. Implementations pick the endpoint from the
/// request variant; the two variants are distinct server operations.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Backend identifier, used in logs.
    fn id(&self) -> &'static str;

    /// Run one analysis.
    ///
    /// Server rejections come back as [`AnalysisError::RequestFailed`],
    /// connection, timeout and decoding faults as
    /// [`AnalysisError::TransportFailure`].
    ///
    /// [`AnalysisError::RequestFailed`]: crate::AnalysisError::RequestFailed
    /// [`AnalysisError::TransportFailure`]: crate::AnalysisError::TransportFailure
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}
