use serde::{Deserialize, Serialize};

/// flat, serializable form of one [`super::EmissionsResultRow`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmissionsResultRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Forecast")]
    pub forecast: bool,
    #[serde(rename = "Population")]
    pub population: f64,
    #[serde(rename = "Urban")]
    pub urban: f64,
    #[serde(rename = "Highways")]
    pub highways: f64,
    #[serde(rename = "Mileage")]
    pub mileage: f64,
    #[serde(rename = "UrbanPerResident")]
    pub urban_per_resident: f64,
    #[serde(rename = "HighwaysPerResident")]
    pub highways_per_resident: f64,
    #[serde(rename = "PerResident")]
    pub per_resident: f64,
    #[serde(rename = "UrbanEmissions")]
    pub urban_emissions: f64,
    #[serde(rename = "HighwaysEmissions")]
    pub highways_emissions: f64,
    #[serde(rename = "Emissions")]
    pub emissions: f64,
    #[serde(rename = "EmissionFactor")]
    pub emission_factor: f64,
    pub gasoline: f64,
    pub diesel: f64,
    pub electric: f64,
    #[serde(rename = "PHEV (gasoline)")]
    pub phev_gasoline: f64,
}
