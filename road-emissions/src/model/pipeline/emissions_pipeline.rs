use road_emissions_core::model::PipelineError;
use std::sync::Arc;

use super::PipelineConfig;
use crate::model::{
    aggregate::{aggregate_emissions, EmissionsResultTable},
    dataset::EmissionsDataSource,
    fleet::estimate_engine_shares,
    mileage::{forecast_road_mileage, pivot_historical},
    unit_emissions::{
        average_measured_factors, estimate_unit_emission_factors, UnitEmissionFactorTable,
    },
};

/// car emissions pipeline bound to a data source and configuration. each
/// prediction builds its tables from scratch, so a pipeline can be shared
/// across threads.
#[derive(Clone)]
pub struct EmissionsPipeline {
    source: Arc<dyn EmissionsDataSource>,
    config: PipelineConfig,
}

impl EmissionsPipeline {
    pub fn new(
        source: Arc<dyn EmissionsDataSource>,
        config: PipelineConfig,
    ) -> Result<EmissionsPipeline, PipelineError> {
        config.validate()?;
        Ok(EmissionsPipeline { source, config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn predict_cars_emissions(
        &self,
        target_year: i32,
        mileage_adjustment_percent: f64,
        municipality: &str,
    ) -> Result<EmissionsResultTable, PipelineError> {
        predict_cars_emissions(
            self.source.as_ref(),
            &self.config,
            target_year,
            mileage_adjustment_percent,
            municipality,
        )
    }
}

/// estimates yearly car mileage and emissions of a municipality through the
/// target year.
///
/// # Arguments
///
/// * `source` - provider of the input datasets
/// * `config` - pipeline parameters
/// * `target_year` - last year of the forecast
/// * `mileage_adjustment_percent` - change of per-resident car mileage at the
///   target year relative to the last historical year
/// * `municipality` - municipality to select from the datasets
///
/// # Returns
///
/// the result table, owned by the caller
pub fn predict_cars_emissions(
    source: &dyn EmissionsDataSource,
    config: &PipelineConfig,
    target_year: i32,
    mileage_adjustment_percent: f64,
    municipality: &str,
) -> Result<EmissionsResultTable, PipelineError> {
    log::info!(
        "predicting car emissions for '{municipality}' through {target_year} with mileage adjustment {mileage_adjustment_percent}%"
    );
    let vehicle = config.vehicle_category.as_str();

    let historical = pivot_historical(
        &source.historical_transportation_emissions(municipality)?,
        vehicle,
    )?;
    let population = source.population_forecast(municipality, target_year)?;
    let mileage = forecast_road_mileage(
        &historical.map(|_, data| data.mileage),
        &population,
        target_year,
        mileage_adjustment_percent,
    )?;
    let measured_co2e = historical.map(|_, data| data.co2e);

    let shares = estimate_engine_shares(
        &source.fleet_composition(municipality)?,
        vehicle,
        &config.emission_class_boundaries,
    )?;

    let last_historical_year = mileage.last_historical_year();
    let factors = if target_year > last_historical_year {
        let measured_factors = average_measured_factors(&source.car_unit_emission_factors()?)?;
        estimate_unit_emission_factors(
            &measured_factors,
            &source.electricity_emission_factor_forecast()?,
            last_historical_year..=target_year,
            &config.energy_consumption,
            config.final_emission_class(),
        )?
    } else {
        log::debug!("no forecast years, skipping unit emission factor estimation");
        UnitEmissionFactorTable::default()
    };

    let rows = aggregate_emissions(&mileage, &measured_co2e, &shares, &factors)?;
    log::debug!(
        "car emissions table for '{municipality}' spans {}..={} with {} forecast years",
        rows.start_year(),
        rows.end_year(),
        rows.forecast_years().count()
    );
    Ok(EmissionsResultTable::new(
        municipality,
        target_year,
        mileage_adjustment_percent,
        rows,
    ))
}
