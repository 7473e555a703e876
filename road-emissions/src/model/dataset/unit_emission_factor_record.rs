use road_emissions_core::model::{EmissionClass, EngineType, RoadType};
use serde::{Deserialize, Serialize};

/// a measured per-kilometer emission factor for cars.
///
/// CSV rows as currently defined:
/// engine,road,class,subcategory,co2e
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UnitEmissionFactorRecord {
    pub engine: EngineType,
    pub road: RoadType,
    pub class: EmissionClass,
    /// measurement sub-category (e.g. vehicle size), averaged away
    pub subcategory: Option<String>,
    /// grams CO2e per vehicle-kilometer
    pub co2e: f64,
}
