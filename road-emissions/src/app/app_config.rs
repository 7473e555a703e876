use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::Arc};

use super::AppError;
use crate::model::{
    dataset::{DatasetPaths, InMemoryDataSource},
    pipeline::{EmissionsPipeline, PipelineConfig},
};

/// configuration of the road-emissions application.
///
/// loaded from an optional TOML file, then overridden by environment
/// variables such as `ROAD_EMISSIONS__PIPELINE__VEHICLE_CATEGORY=Vans`.
/// relative dataset paths are resolved against the directory of the
/// configuration file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// reuse results of repeated scenarios within a run
    pub cache_results: bool,
    pub datasets: DatasetPaths,
    pub pipeline: PipelineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_results: true,
            datasets: DatasetPaths::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl AppConfig {
    pub const ENV_PREFIX: &'static str = "ROAD_EMISSIONS";

    pub fn load(config_file: Option<&str>) -> Result<AppConfig, AppError> {
        let mut builder = Config::builder();
        if let Some(f) = config_file {
            log::info!("reading road-emissions configuration from {f}");
            std::fs::metadata(f).map_err(|e| AppError::ReadError {
                filepath: f.to_string(),
                error: e.to_string(),
            })?;
            builder = builder.add_source(File::new(f, FileFormat::Toml));
        }
        let config = builder
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::ConfigReadError {
                msg: format!("failed reading configuration {}", config_file.unwrap_or("")),
                source: e,
            })?;
        let conf: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::ConfigReadError {
                msg: String::from("failed decoding configuration"),
                source: e,
            })?;

        let base_directory = config_file
            .and_then(|f| Path::new(f).parent())
            .unwrap_or_else(|| Path::new(""));
        let resolved = AppConfig {
            datasets: conf.datasets.resolve(base_directory),
            ..conf
        };
        resolved.pipeline.validate()?;
        Ok(resolved)
    }

    /// loads the datasets and binds them to a pipeline.
    pub fn build_pipeline(&self) -> Result<EmissionsPipeline, AppError> {
        let source = InMemoryDataSource::from_csv_files(&self.datasets)?;
        let pipeline = EmissionsPipeline::new(Arc::new(source), self.pipeline.clone())?;
        Ok(pipeline)
    }

    /// the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, AppError> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::InternalError(format!("failed encoding configuration: {e}")))
    }
}
