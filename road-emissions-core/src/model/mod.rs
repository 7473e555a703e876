mod annual_series;
mod by_road;
mod emission_class;
mod engine_type;
mod pipeline_error;
mod road_type;
mod year_series;

pub use annual_series::AnnualSeries;
pub use by_road::ByRoad;
pub use emission_class::{EmissionClass, DEFAULT_EMISSION_CLASS_BOUNDARIES};
pub use engine_type::EngineType;
pub use pipeline_error::PipelineError;
pub use road_type::RoadType;
pub use year_series::YearSeries;
