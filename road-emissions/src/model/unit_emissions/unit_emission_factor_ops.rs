use itertools::Itertools;
use road_emissions_core::model::{
    AnnualSeries, ByRoad, EmissionClass, EngineType, PipelineError, RoadType,
};
use std::{collections::BTreeMap, ops::RangeInclusive};

use super::{UnitEmissionFactorKey, UnitEmissionFactorTable};
use crate::model::dataset::UnitEmissionFactorRecord;

/// measured grams CO2e/km per (road, emission class, engine), averaged over sub-categories
pub type MeasuredFactors = BTreeMap<(RoadType, EmissionClass, EngineType), f64>;

/// averages measured factors across sub-categories into one factor per
/// (road, emission class, engine).
///
/// # Arguments
///
/// * `records` - measured unit emission factors
///
/// # Returns
///
/// the averaged factors, or an error if the measurements are empty, contain
/// invalid values, or do not include every road type
pub fn average_measured_factors(
    records: &[UnitEmissionFactorRecord],
) -> Result<MeasuredFactors, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::ConfigurationError(String::from(
            "car unit emission factor dataset is empty",
        )));
    }
    if let Some(r) = records.iter().find(|r| !r.co2e.is_finite() || r.co2e < 0.0) {
        return Err(PipelineError::ConfigurationError(format!(
            "invalid unit emission factor {} for {} {} {}",
            r.co2e, r.road, r.engine, r.class
        )));
    }

    let baseline = records
        .iter()
        .map(|r| ((r.road, r.class, r.engine), r.co2e))
        .into_group_map()
        .into_iter()
        .map(|(key, values)| (key, values.iter().sum::<f64>() / values.len() as f64))
        .collect::<MeasuredFactors>();

    for road in RoadType::ALL {
        if !baseline.keys().any(|(r, _, _)| *r == road) {
            return Err(PipelineError::DataAlignmentError(format!(
                "car unit emission factors have no {road} measurements"
            )));
        }
    }
    Ok(baseline)
}

/// builds unit emission factors for each year of `years`.
///
/// the steps run in a fixed order:
///   1. the measured baseline is copied into every year
///   2. the electric factor of `top_class` is replaced by the grid emission
///      factor of the year times the energy consumption of the road
///   3. every (year, road, class) with both an electric and a gasoline factor
///      gets a PHEV factor equal to their mean
///
/// # Arguments
///
/// * `measured` - averaged measured factors
/// * `grid_emission_factor` - grams CO2e per kWh by year
/// * `years` - years to produce factors for
/// * `energy_consumption` - kWh per km of an electric car by road type
/// * `top_class` - most recent emission class, which electric cars belong to
pub fn estimate_unit_emission_factors(
    measured: &MeasuredFactors,
    grid_emission_factor: &AnnualSeries,
    years: RangeInclusive<i32>,
    energy_consumption: &ByRoad<f64>,
    top_class: EmissionClass,
) -> Result<UnitEmissionFactorTable, PipelineError> {
    grid_emission_factor.check_coverage(years.clone())?;

    let mut factors = pad_baseline(measured, years.clone());
    override_electric(
        &mut factors,
        grid_emission_factor,
        years,
        energy_consumption,
        top_class,
    )?;
    blend_phev(&mut factors);

    log::debug!("estimated {} unit emission factors", factors.len());
    Ok(UnitEmissionFactorTable::new(factors))
}

/// measured factors do not change over time, so every year starts from the baseline
fn pad_baseline(
    measured: &MeasuredFactors,
    years: RangeInclusive<i32>,
) -> BTreeMap<UnitEmissionFactorKey, f64> {
    years
        .flat_map(|year| {
            measured.iter().map(move |((road, class, engine), value)| {
                (
                    UnitEmissionFactorKey::new(year, *road, *class, *engine),
                    *value,
                )
            })
        })
        .collect()
}

fn override_electric(
    factors: &mut BTreeMap<UnitEmissionFactorKey, f64>,
    grid_emission_factor: &AnnualSeries,
    years: RangeInclusive<i32>,
    energy_consumption: &ByRoad<f64>,
    top_class: EmissionClass,
) -> Result<(), PipelineError> {
    for year in years {
        let grams_per_kwh = grid_emission_factor.require(year)?;
        for road in RoadType::ALL {
            let key = UnitEmissionFactorKey::new(year, road, top_class, EngineType::Electric);
            factors.insert(key, grams_per_kwh * energy_consumption.get(road));
        }
    }
    Ok(())
}

fn blend_phev(factors: &mut BTreeMap<UnitEmissionFactorKey, f64>) {
    let buckets = factors
        .keys()
        .map(|k| (k.year, k.road, k.emission_class))
        .dedup()
        .collect_vec();
    for (year, road, class) in buckets {
        let electric = factors.get(&UnitEmissionFactorKey::new(
            year,
            road,
            class,
            EngineType::Electric,
        ));
        let gasoline = factors.get(&UnitEmissionFactorKey::new(
            year,
            road,
            class,
            EngineType::Gasoline,
        ));
        if let (Some(electric), Some(gasoline)) = (electric, gasoline) {
            let phev = (electric + gasoline) / 2.0;
            factors.insert(
                UnitEmissionFactorKey::new(year, road, class, EngineType::PhevGasoline),
                phev,
            );
        }
    }
}
