use serde::{Deserialize, Serialize};

/// vehicles in use for one (year, category, engine label, model year).
///
/// CSV rows as currently defined:
/// municipality,year,vehicle,engine,model_year,count
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FleetCompositionRecord {
    pub municipality: String,
    pub year: i32,
    pub vehicle: String,
    /// raw registry label, canonicalized with [`road_emissions_core::model::EngineType::from_raw_label`]
    pub engine: String,
    pub model_year: i32,
    pub count: f64,
}
