//! Error taxonomy for the recommendation pipeline.

use thiserror::Error;

use crate::ai::GenerateError;

/// Failure modes of [`crate::recommend::RecommendationService::request_recipes`].
///
/// All three are caught at the view-state controller boundary and mapped to
/// the degrade-to-demo-mode outcome.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// No credential resolvable; raised before any network attempt.
    #[error("API key not configured: {0}")]
    Configuration(String),

    /// The external call failed or returned unparsable data.
    #[error("recommendation service failed: {0}")]
    Upstream(String),

    /// The call succeeded but no recipe survived validation.
    #[error("recommendation service returned no recipes")]
    EmptyResult,
}

impl From<GenerateError> for RecommendError {
    fn from(err: GenerateError) -> Self {
        RecommendError::Upstream(err.to_string())
    }
}
