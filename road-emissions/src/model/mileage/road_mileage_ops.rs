use road_emissions_core::{
    model::{AnnualSeries, ByRoad, PipelineError, YearSeries},
    util::interpolation,
};

use super::{RoadMileageRow, RoadMileageTable};

/// projects road mileage from the historical record through the target year.
///
/// per-resident mileage is fixed at the last historical year, scaled by
/// `1 + mileage_adjustment_percent / 100` at the target year, and linearly
/// interpolated in between. forecast mileage is per-resident mileage times
/// the forecast population. historical years pass through unchanged. when the
/// target year is not after the last historical year, the historical data is
/// returned truncated at the target year with no forecast rows, and the
/// target year becomes the last historical year.
///
/// # Arguments
///
/// * `historical` - measured mileage per road type, all rows historical
/// * `population` - population counts covering every output year
/// * `target_year` - last year of the output
/// * `mileage_adjustment_percent` - change of per-resident mileage at the target year
///
/// # Returns
///
/// the mileage table, or a configuration error if the inputs cannot support the span
pub fn forecast_road_mileage(
    historical: &YearSeries<ByRoad<f64>>,
    population: &AnnualSeries,
    target_year: i32,
    mileage_adjustment_percent: f64,
) -> Result<RoadMileageTable, PipelineError> {
    if !mileage_adjustment_percent.is_finite() || mileage_adjustment_percent <= -100.0 {
        return Err(PipelineError::ConfigurationError(format!(
            "mileage adjustment must be a finite percentage above -100, found {mileage_adjustment_percent}"
        )));
    }
    let first_year = historical.start_year();
    let last_historical_year = historical.last_historical_year();
    if target_year < first_year {
        return Err(PipelineError::ConfigurationError(format!(
            "target year {target_year} precedes the first historical year {first_year}"
        )));
    }

    population.check_coverage(first_year..=target_year)?;
    let population_of = |year: i32| -> Result<f64, PipelineError> {
        let p = population.require(year)?;
        if p <= 0.0 {
            Err(PipelineError::ConfigurationError(format!(
                "population for {year} must be positive, found {p}"
            )))
        } else {
            Ok(p)
        }
    };

    let historical_rows = historical
        .iter()
        .filter(|(year, _, _)| *year <= target_year)
        .map(|(year, _, mileage)| {
            Ok(RoadMileageRow::from_mileage(
                *mileage,
                population_of(year)?,
            ))
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    let last_row = match (
        target_year > last_historical_year,
        historical_rows.last().copied(),
    ) {
        (true, Some(row)) => row,
        _ => {
            log::debug!(
                "target year {target_year} is not after last historical year {last_historical_year}, no mileage forecast"
            );
            return YearSeries::new(
                first_year,
                last_historical_year.min(target_year),
                historical_rows,
            );
        }
    };

    let factor = 1.0 + mileage_adjustment_percent / 100.0;
    let target_per_resident = last_row.per_resident.map(|_, pr| pr * factor);
    log::debug!(
        "per-resident car mileage {} -> {target_year}: highways {:.1} -> {:.1}, urban {:.1} -> {:.1}",
        last_historical_year,
        last_row.per_resident.highways,
        target_per_resident.highways,
        last_row.per_resident.urban,
        target_per_resident.urban
    );

    let mut rows = historical_rows;
    for year in (last_historical_year + 1)..=target_year {
        let per_resident = last_row.per_resident.map(|road, last| {
            interpolation::linear(
                last_historical_year,
                *last,
                target_year,
                *target_per_resident.get(road),
                year,
            )
        });
        rows.push(RoadMileageRow::from_per_resident(
            per_resident,
            population_of(year)?,
        ));
    }

    YearSeries::new(first_year, last_historical_year, rows)
}
