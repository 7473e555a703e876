use road_emissions_core::model::{ByRoad, PipelineError, RoadType, YearSeries};
use std::collections::BTreeMap;

use crate::model::dataset::HistoricalEmissionsRecord;

/// measured mileage and emissions of one vehicle category for one year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoricalCarData {
    /// vehicle-kilometers
    pub mileage: ByRoad<f64>,
    /// tonnes CO2e, when measured
    pub co2e: ByRoad<Option<f64>>,
}

/// pivots the long-format emissions inventory into one row per year for a
/// single vehicle category. the resulting series is entirely historical.
///
/// # Arguments
///
/// * `records` - inventory rows of a single municipality
/// * `vehicle` - vehicle category to keep, such as "Cars"
///
/// # Returns
///
/// a contiguous series of yearly measurements, or an error if any year in the
/// range lacks a road type or a (year, road) pair appears twice
pub fn pivot_historical(
    records: &[HistoricalEmissionsRecord],
    vehicle: &str,
) -> Result<YearSeries<HistoricalCarData>, PipelineError> {
    let mut cells: BTreeMap<(i32, RoadType), (f64, Option<f64>)> = BTreeMap::new();
    for r in records.iter().filter(|r| r.vehicle == vehicle) {
        if !r.mileage.is_finite() || r.mileage < 0.0 {
            return Err(PipelineError::ConfigurationError(format!(
                "invalid {} mileage {} for {} in {}",
                r.road, r.mileage, vehicle, r.year
            )));
        }
        if r.co2e.map(|c| !c.is_finite()).unwrap_or(false) {
            return Err(PipelineError::ConfigurationError(format!(
                "invalid {} emissions for {} in {}",
                r.road, vehicle, r.year
            )));
        }
        if cells.insert((r.year, r.road), (r.mileage, r.co2e)).is_some() {
            return Err(PipelineError::ConfigurationError(format!(
                "duplicate {} row for {} in {}",
                r.road, vehicle, r.year
            )));
        }
    }

    let (first_year, last_year) = match (cells.keys().next(), cells.keys().next_back()) {
        (Some((first, _)), Some((last, _))) => (*first, *last),
        _ => {
            return Err(PipelineError::ConfigurationError(format!(
                "historical emissions contain no rows for vehicle category '{vehicle}'"
            )))
        }
    };

    let rows = (first_year..=last_year)
        .map(|year| {
            let cell = |road: RoadType| {
                cells.get(&(year, road)).copied().ok_or_else(|| {
                    PipelineError::ConfigurationError(format!(
                        "historical emissions for '{vehicle}' missing {road} row for year {year}"
                    ))
                })
            };
            let (highways_mileage, highways_co2e) = cell(RoadType::Highways)?;
            let (urban_mileage, urban_co2e) = cell(RoadType::Urban)?;
            Ok(HistoricalCarData {
                mileage: ByRoad::new(highways_mileage, urban_mileage),
                co2e: ByRoad::new(highways_co2e, urban_co2e),
            })
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    YearSeries::new(first_year, last_year, rows)
}

#[cfg(test)]
mod tests {
    use super::pivot_historical;
    use crate::model::dataset::HistoricalEmissionsRecord;
    use road_emissions_core::model::{PipelineError, RoadType};

    fn record(year: i32, vehicle: &str, road: RoadType, mileage: f64) -> HistoricalEmissionsRecord {
        HistoricalEmissionsRecord {
            municipality: String::from("Testville"),
            year,
            vehicle: vehicle.to_string(),
            road,
            mileage,
            co2e: Some(mileage / 1000.0),
        }
    }

    #[test]
    fn test_pivot_filters_vehicle() {
        let records = vec![
            record(2017, "Cars", RoadType::Urban, 100.0),
            record(2017, "Cars", RoadType::Highways, 200.0),
            record(2018, "Cars", RoadType::Urban, 110.0),
            record(2018, "Cars", RoadType::Highways, 210.0),
            record(2018, "Vans", RoadType::Urban, 999.0),
        ];
        let pivot = pivot_historical(&records, "Cars").unwrap();
        assert_eq!(pivot.start_year(), 2017);
        assert_eq!(pivot.last_historical_year(), 2018);
        assert_eq!(pivot.get(2018).unwrap().mileage.urban, 110.0);
        assert_eq!(pivot.forecast_years().count(), 0);
    }

    #[test]
    fn test_missing_road_fails() {
        let records = vec![
            record(2017, "Cars", RoadType::Urban, 100.0),
            record(2017, "Cars", RoadType::Highways, 200.0),
            record(2018, "Cars", RoadType::Urban, 110.0),
        ];
        let err = pivot_historical(&records, "Cars").unwrap_err();
        assert!(err.to_string().contains("Highways"));
    }

    #[test]
    fn test_missing_vehicle_fails() {
        let records = vec![record(2017, "Vans", RoadType::Urban, 100.0)];
        assert!(pivot_historical(&records, "Cars").is_err());
    }

    fn both_roads(year: i32) -> Vec<HistoricalEmissionsRecord> {
        vec![
            record(year, "Cars", RoadType::Urban, 100.0),
            record(year, "Cars", RoadType::Highways, 200.0),
        ]
    }

    #[test]
    fn test_duplicate_row_fails() {
        let mut records = both_roads(2017);
        records.push(record(2017, "Cars", RoadType::Urban, 105.0));
        let result = pivot_historical(&records, "Cars");
        assert!(matches!(result, Err(PipelineError::ConfigurationError(_))));
    }

    #[test]
    fn test_invalid_mileage_fails() {
        for mileage in [-1.0, f64::NAN, f64::INFINITY] {
            let mut records = both_roads(2017);
            records[0].mileage = mileage;
            let result = pivot_historical(&records, "Cars");
            assert!(
                matches!(result, Err(PipelineError::ConfigurationError(_))),
                "mileage {mileage} was accepted"
            );
        }
    }

    #[test]
    fn test_non_finite_emissions_fail() {
        for co2e in [f64::NAN, f64::NEG_INFINITY] {
            let mut records = both_roads(2017);
            records[1].co2e = Some(co2e);
            let result = pivot_historical(&records, "Cars");
            assert!(matches!(result, Err(PipelineError::ConfigurationError(_))));
        }
        let mut records = both_roads(2017);
        records[1].co2e = None;
        assert!(pivot_historical(&records, "Cars").is_ok());
    }
}
