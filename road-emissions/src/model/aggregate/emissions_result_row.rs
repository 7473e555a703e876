use road_emissions_core::model::ByRoad;

use crate::model::fleet::EngineShareBreakdown;

/// car mileage and emissions of one year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissionsResultRow {
    pub population: f64,
    /// vehicle-kilometers
    pub mileage: ByRoad<f64>,
    pub total_mileage: f64,
    pub per_resident: ByRoad<f64>,
    pub total_per_resident: f64,
    /// kilotonnes CO2e
    pub emissions: ByRoad<f64>,
    pub total_emissions: f64,
    /// blended grams CO2e per vehicle-kilometer
    pub emission_factor: f64,
    pub engine_shares: EngineShareBreakdown,
}
