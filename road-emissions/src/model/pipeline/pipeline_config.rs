use road_emissions_core::model::{
    ByRoad, EmissionClass, PipelineError, DEFAULT_EMISSION_CLASS_BOUNDARIES,
};
use serde::{Deserialize, Serialize};

/// parameters of the emissions pipeline that do not vary per scenario.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// vehicle category selected from the inventory and fleet datasets
    #[serde(default = "default_vehicle_category")]
    pub vehicle_category: String,
    /// first model year of each emission class, oldest first
    #[serde(default = "default_emission_class_boundaries")]
    pub emission_class_boundaries: Vec<i32>,
    /// electric car energy consumption in kWh/km
    #[serde(default = "default_energy_consumption")]
    pub energy_consumption: ByRoad<f64>,
}

fn default_vehicle_category() -> String {
    String::from("Cars")
}

fn default_emission_class_boundaries() -> Vec<i32> {
    DEFAULT_EMISSION_CLASS_BOUNDARIES.to_vec()
}

fn default_energy_consumption() -> ByRoad<f64> {
    ByRoad::new(0.20, 0.17)
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            vehicle_category: default_vehicle_category(),
            emission_class_boundaries: default_emission_class_boundaries(),
            energy_consumption: default_energy_consumption(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.vehicle_category.trim().is_empty() {
            return Err(PipelineError::ConfigurationError(String::from(
                "vehicle category cannot be empty",
            )));
        }
        let boundaries = &self.emission_class_boundaries;
        if boundaries.is_empty() || boundaries.len() > usize::from(u8::MAX) {
            return Err(PipelineError::ConfigurationError(format!(
                "expected between 1 and {} emission class boundaries, found {}",
                u8::MAX,
                boundaries.len()
            )));
        }
        if boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PipelineError::ConfigurationError(format!(
                "emission class boundaries must be strictly increasing: {boundaries:?}"
            )));
        }
        for (road, kwh) in self.energy_consumption.iter() {
            if !kwh.is_finite() || *kwh < 0.0 {
                return Err(PipelineError::ConfigurationError(format!(
                    "invalid {road} energy consumption {kwh} kWh/km"
                )));
            }
        }
        Ok(())
    }

    /// emission class that electric cars are assigned to.
    pub fn final_emission_class(&self) -> EmissionClass {
        EmissionClass::final_class(&self.emission_class_boundaries)
    }
}
