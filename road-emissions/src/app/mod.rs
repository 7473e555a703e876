mod app_config;
mod app_error;
mod cli;
mod output_format;
mod predict;
mod sweep;

pub use app_config::AppConfig;
pub use app_error::AppError;
pub use cli::{EmissionsCliArguments, EmissionsOperation};
pub use output_format::OutputFormat;
pub use predict::{run_predict, write_records};
pub use sweep::{run_sweep, ScenarioSummary};
