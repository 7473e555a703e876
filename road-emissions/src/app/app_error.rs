use road_emissions_core::model::PipelineError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("failed writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("{0}")]
    InternalError(String),
}
