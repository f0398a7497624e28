// ============================================================================
// Order Data Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Malformed order snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Order source unavailable: {0}")]
    SourceUnavailable(String),
}
