#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// missing or malformed upstream dataset, unsupported year range, or a
    /// numeric degenerate case such as zero population.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
    /// two tables that must align for arithmetic have mismatched keys.
    #[error("data alignment error: {0}")]
    DataAlignmentError(String),
}
