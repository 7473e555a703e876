use road_emissions_core::model::RoadType;
use serde::{Deserialize, Serialize};

/// a row of the historical transportation emissions inventory.
///
/// CSV rows as currently defined:
/// municipality,year,vehicle,road,mileage,co2e
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoricalEmissionsRecord {
    pub municipality: String,
    pub year: i32,
    /// vehicle category, such as "Cars" or "Vans"
    pub vehicle: String,
    pub road: RoadType,
    /// vehicle-kilometers driven
    pub mileage: f64,
    /// measured emissions in tonnes CO2e, if the inventory has them for this row
    pub co2e: Option<f64>,
}
