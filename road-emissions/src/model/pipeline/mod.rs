mod emissions_pipeline;
mod pipeline_config;

pub use emissions_pipeline::{predict_cars_emissions, EmissionsPipeline};
pub use pipeline_config::PipelineConfig;
