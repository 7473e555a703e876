use itertools::Itertools;
use rayon::prelude::*;
use road_emissions_core::model::PipelineError;
use serde::Serialize;
use std::{fmt::Display, sync::Arc};

use super::{AppConfig, AppError};
use crate::model::{
    aggregate::EmissionsResultTable,
    cache::{CachedEmissionsPipeline, InMemoryEmissionsCache},
    pipeline::EmissionsPipeline,
};

/// target-year outcome of one scenario of a sweep
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ScenarioSummary {
    pub municipality: String,
    pub target_year: i32,
    pub mileage_adjustment_percent: f64,
    /// kilotonnes CO2e
    pub urban_emissions: f64,
    pub highways_emissions: f64,
    pub total_emissions: f64,
    /// g CO2e/km
    pub emission_factor: f64,
}

impl ScenarioSummary {
    fn from_table(table: &EmissionsResultTable) -> Option<ScenarioSummary> {
        let row = table.last_row()?;
        Some(ScenarioSummary {
            municipality: table.municipality.clone(),
            target_year: table.target_year,
            mileage_adjustment_percent: table.mileage_adjustment_percent,
            urban_emissions: row.emissions.urban,
            highways_emissions: row.emissions.highways,
            total_emissions: row.total_emissions,
            emission_factor: row.emission_factor,
        })
    }
}

impl Display for ScenarioSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {:+}%: {:.3} kt CO2e (urban {:.3}, highways {:.3}), {:.1} g/km",
            self.municipality,
            self.target_year,
            self.mileage_adjustment_percent,
            self.total_emissions,
            self.urban_emissions,
            self.highways_emissions,
            self.emission_factor
        )
    }
}

/// evaluates every (target year, mileage adjustment) pair in parallel.
///
/// # Returns
///
/// one summary per scenario ordered by target year, then adjustment
pub fn run_sweep(
    conf: &AppConfig,
    target_years: &[i32],
    mileage_adjustments: &[f64],
    municipality: &str,
) -> Result<Vec<ScenarioSummary>, AppError> {
    let pipeline = conf.build_pipeline()?;
    let scenarios = target_years
        .iter()
        .copied()
        .cartesian_product(mileage_adjustments.iter().copied())
        .collect_vec();
    log::info!(
        "running {} scenarios for '{municipality}' on {} threads",
        scenarios.len(),
        rayon::current_num_threads()
    );
    let summaries = sweep_pipeline(&pipeline, conf.cache_results, &scenarios, municipality)?;
    Ok(summaries)
}

fn sweep_pipeline(
    pipeline: &EmissionsPipeline,
    cache_results: bool,
    scenarios: &[(i32, f64)],
    municipality: &str,
) -> Result<Vec<ScenarioSummary>, PipelineError> {
    let cached = cache_results.then(|| {
        CachedEmissionsPipeline::new(pipeline.clone(), Arc::new(InMemoryEmissionsCache::new()))
    });
    let mut summaries = scenarios
        .par_iter()
        .map(|(target_year, adjustment)| {
            let table = match &cached {
                Some(c) => c.predict_cars_emissions(*target_year, *adjustment, municipality)?,
                None => Arc::new(pipeline.predict_cars_emissions(
                    *target_year,
                    *adjustment,
                    municipality,
                )?),
            };
            ScenarioSummary::from_table(&table).ok_or_else(|| {
                PipelineError::ConfigurationError(format!(
                    "scenario ({target_year}, {adjustment}%) produced an empty table"
                ))
            })
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;
    summaries.sort_by(|a, b| {
        a.target_year.cmp(&b.target_year).then(
            a.mileage_adjustment_percent
                .total_cmp(&b.mileage_adjustment_percent),
        )
    });
    Ok(summaries)
}
