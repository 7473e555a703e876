use itertools::Itertools;
use road_emissions_core::model::{AnnualSeries, PipelineError};
use std::collections::HashMap;

use super::{
    csv_ops::{self, ElectricityEmissionFactorRow, PopulationRow},
    DatasetPaths, EmissionsDataSource, FleetCompositionRecord, HistoricalEmissionsRecord,
    UnitEmissionFactorRecord,
};

/// input datasets held in memory, filtered per municipality on request.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDataSource {
    pub population: HashMap<String, AnnualSeries>,
    pub electricity_emission_factor: AnnualSeries,
    pub historical_emissions: Vec<HistoricalEmissionsRecord>,
    pub fleet_composition: Vec<FleetCompositionRecord>,
    pub unit_emission_factors: Vec<UnitEmissionFactorRecord>,
}

impl InMemoryDataSource {
    /// loads all datasets from CSV files.
    pub fn from_csv_files(paths: &DatasetPaths) -> Result<InMemoryDataSource, PipelineError> {
        let population_rows: Vec<PopulationRow> = csv_ops::read_rows(&paths.population_file)?;
        let population = population_rows
            .into_iter()
            .into_group_map_by(|row| row.municipality.clone())
            .into_iter()
            .map(|(municipality, rows)| {
                let series = AnnualSeries::from_pairs(
                    &format!("population forecast for {municipality}"),
                    rows.into_iter().map(|r| (r.year, r.population)),
                );
                (municipality, series)
            })
            .collect::<HashMap<_, _>>();

        let electricity_rows: Vec<ElectricityEmissionFactorRow> =
            csv_ops::read_rows(&paths.electricity_emission_factor_file)?;
        let electricity_emission_factor = AnnualSeries::from_pairs(
            "electricity emission factor forecast",
            electricity_rows
                .into_iter()
                .map(|r| (r.year, r.emission_factor)),
        );

        Ok(InMemoryDataSource {
            population,
            electricity_emission_factor,
            historical_emissions: csv_ops::read_rows(&paths.historical_emissions_file)?,
            fleet_composition: csv_ops::read_rows(&paths.fleet_composition_file)?,
            unit_emission_factors: csv_ops::read_rows(&paths.unit_emission_factors_file)?,
        })
    }
}

impl EmissionsDataSource for InMemoryDataSource {
    fn population_forecast(
        &self,
        municipality: &str,
        target_year: i32,
    ) -> Result<AnnualSeries, PipelineError> {
        let series = self.population.get(municipality).ok_or_else(|| {
            PipelineError::ConfigurationError(format!(
                "no population forecast for municipality '{municipality}'"
            ))
        })?;
        if series.last_year().map(|y| y < target_year).unwrap_or(true) {
            log::warn!(
                "population forecast for '{municipality}' ends before target year {target_year}"
            );
        }
        Ok(series.clone())
    }

    fn electricity_emission_factor_forecast(&self) -> Result<AnnualSeries, PipelineError> {
        Ok(self.electricity_emission_factor.clone())
    }

    fn historical_transportation_emissions(
        &self,
        municipality: &str,
    ) -> Result<Vec<HistoricalEmissionsRecord>, PipelineError> {
        let rows = self
            .historical_emissions
            .iter()
            .filter(|r| r.municipality == municipality)
            .cloned()
            .collect_vec();
        if rows.is_empty() {
            Err(PipelineError::ConfigurationError(format!(
                "no historical transportation emissions for municipality '{municipality}'"
            )))
        } else {
            Ok(rows)
        }
    }

    fn fleet_composition(
        &self,
        municipality: &str,
    ) -> Result<Vec<FleetCompositionRecord>, PipelineError> {
        let rows = self
            .fleet_composition
            .iter()
            .filter(|r| r.municipality == municipality)
            .cloned()
            .collect_vec();
        if rows.is_empty() {
            Err(PipelineError::ConfigurationError(format!(
                "no fleet composition data for municipality '{municipality}'"
            )))
        } else {
            Ok(rows)
        }
    }

    fn car_unit_emission_factors(&self) -> Result<Vec<UnitEmissionFactorRecord>, PipelineError> {
        Ok(self.unit_emission_factors.clone())
    }
}
