use road_emissions_core::model::{AnnualSeries, PipelineError};

use super::{FleetCompositionRecord, HistoricalEmissionsRecord, UnitEmissionFactorRecord};

/// the upstream collaborators that provide the pre-loaded input datasets.
pub trait EmissionsDataSource: Send + Sync {
    /// population counts covering at least the historical years through the target year.
    fn population_forecast(
        &self,
        municipality: &str,
        target_year: i32,
    ) -> Result<AnnualSeries, PipelineError>;

    /// grid emission intensity in grams CO2e per kWh.
    fn electricity_emission_factor_forecast(&self) -> Result<AnnualSeries, PipelineError>;

    fn historical_transportation_emissions(
        &self,
        municipality: &str,
    ) -> Result<Vec<HistoricalEmissionsRecord>, PipelineError>;

    fn fleet_composition(
        &self,
        municipality: &str,
    ) -> Result<Vec<FleetCompositionRecord>, PipelineError>;

    fn car_unit_emission_factors(&self) -> Result<Vec<UnitEmissionFactorRecord>, PipelineError>;
}
