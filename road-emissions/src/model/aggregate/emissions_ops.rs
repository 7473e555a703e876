use itertools::Itertools;
use road_emissions_core::{
    model::{ByRoad, EngineType, PipelineError, RoadType, YearSeries},
    util::{interpolation, mass_ops},
};

use super::EmissionsResultRow;
use crate::model::{
    fleet::{EngineShareBreakdown, EngineShareTable},
    mileage::RoadMileageTable,
    unit_emissions::UnitEmissionFactorTable,
};

/// combines mileage, engine shares and unit emission factors into yearly
/// emissions per road type.
///
/// historical years keep their measured emissions. forecast years sum
/// share × mileage × unit factor over every (emission class, engine) of the
/// year, where a share without a matching factor contributes nothing. gaps
/// left in the yearly columns are then linearly interpolated.
///
/// # Arguments
///
/// * `mileage` - road mileage through the target year
/// * `measured_co2e` - measured historical emissions in tonnes CO2e
/// * `shares` - engine shares, covering at least every forecast year
/// * `factors` - unit emission factors, covering every forecast year and road
///
/// # Returns
///
/// one result row per year of the mileage table
pub fn aggregate_emissions(
    mileage: &RoadMileageTable,
    measured_co2e: &YearSeries<ByRoad<Option<f64>>>,
    shares: &EngineShareTable,
    factors: &UnitEmissionFactorTable,
) -> Result<YearSeries<EmissionsResultRow>, PipelineError> {
    check_alignment(mileage, shares, factors)?;
    let start_year = mileage.start_year();

    let emissions_column = |road: RoadType| -> Result<Vec<f64>, PipelineError> {
        let column = mileage
            .iter()
            .map(|(year, forecast, row)| {
                if forecast {
                    Some(forecast_road_emissions(
                        year,
                        road,
                        *row.mileage.get(road),
                        shares,
                        factors,
                    ))
                } else {
                    measured_co2e
                        .get(year)
                        .and_then(|measured| *measured.get(road))
                        .map(mass_ops::tonnes_to_kilotonnes)
                }
            })
            .collect_vec();
        interpolation::fill_gaps(&column).map_err(|idx| {
            PipelineError::ConfigurationError(format!(
                "no measured {road} emissions for {} to interpolate from",
                start_year + idx as i32
            ))
        })
    };
    let emissions = ByRoad::new(
        emissions_column(RoadType::Highways)?,
        emissions_column(RoadType::Urban)?,
    );

    // years before the first fleet observation take its breakdown
    let mut breakdowns = mileage
        .years()
        .map(|year| shares.engine_breakdown(year))
        .collect_vec();
    let first_observed = breakdowns.iter().flatten().next().copied().ok_or_else(|| {
        PipelineError::DataAlignmentError(format!(
            "fleet composition does not cover any year of {}..={}",
            start_year,
            mileage.end_year()
        ))
    })?;
    for b in breakdowns.iter_mut().take_while(|b| b.is_none()) {
        *b = Some(first_observed);
    }
    let share_column = |engine: EngineType| -> Result<Vec<f64>, PipelineError> {
        let column = breakdowns
            .iter()
            .map(|b| b.as_ref().map(|b| b.get(engine)))
            .collect_vec();
        interpolation::fill_gaps(&column).map_err(|idx| {
            PipelineError::DataAlignmentError(format!(
                "fleet composition does not cover {}",
                start_year + idx as i32
            ))
        })
    };
    let gasoline = share_column(EngineType::Gasoline)?;
    let diesel = share_column(EngineType::Diesel)?;
    let electric = share_column(EngineType::Electric)?;
    let phev_gasoline = share_column(EngineType::PhevGasoline)?;

    mileage.try_map(|year, row| {
        let idx = (year - start_year) as usize;
        let road_emissions = ByRoad::new(emissions.highways[idx], emissions.urban[idx]);
        let total_emissions = road_emissions.total();
        if row.total_mileage <= 0.0 {
            return Err(PipelineError::ConfigurationError(format!(
                "total car mileage for {year} is {}, cannot derive an emission factor",
                row.total_mileage
            )));
        }
        let emission_factor = mass_ops::kilotonnes_to_grams(total_emissions) / row.total_mileage;
        if !emission_factor.is_finite() {
            return Err(PipelineError::ConfigurationError(format!(
                "emission factor for {year} is not a finite number"
            )));
        }
        Ok(EmissionsResultRow {
            population: row.population,
            mileage: row.mileage,
            total_mileage: row.total_mileage,
            per_resident: row.per_resident,
            total_per_resident: row.total_per_resident,
            emissions: road_emissions,
            total_emissions,
            emission_factor,
            engine_shares: EngineShareBreakdown {
                gasoline: gasoline[idx],
                diesel: diesel[idx],
                electric: electric[idx],
                phev_gasoline: phev_gasoline[idx],
            },
        })
    })
}

/// forecast years need shares and unit factors for every road type
fn check_alignment(
    mileage: &RoadMileageTable,
    shares: &EngineShareTable,
    factors: &UnitEmissionFactorTable,
) -> Result<(), PipelineError> {
    for year in mileage.forecast_years() {
        if !shares.contains_year(year) {
            return Err(PipelineError::DataAlignmentError(format!(
                "engine shares have no rows for forecast year {year}"
            )));
        }
        for road in RoadType::ALL {
            if !factors.contains(year, road) {
                return Err(PipelineError::DataAlignmentError(format!(
                    "unit emission factors have no {road} rows for forecast year {year}"
                )));
            }
        }
    }
    Ok(())
}

/// kilotonnes CO2e emitted on one road type in a forecast year
fn forecast_road_emissions(
    year: i32,
    road: RoadType,
    road_mileage: f64,
    shares: &EngineShareTable,
    factors: &UnitEmissionFactorTable,
) -> f64 {
    let grams: f64 = shares
        .year_entries(year)
        .map(|(key, share)| {
            let factor = factors
                .get(year, road, key.emission_class, key.engine)
                .unwrap_or_default();
            share * road_mileage * factor
        })
        .sum();
    mass_ops::grams_to_kilotonnes(grams)
}
