use road_emissions_core::model::YearSeries;

use super::{EmissionsResultRecord, EmissionsResultRow};

/// the pipeline output: yearly car mileage and emissions of a municipality
/// from the first historical year through the target year.
#[derive(Clone, Debug, PartialEq)]
pub struct EmissionsResultTable {
    pub municipality: String,
    pub target_year: i32,
    pub mileage_adjustment_percent: f64,
    rows: YearSeries<EmissionsResultRow>,
}

impl EmissionsResultTable {
    pub fn new(
        municipality: &str,
        target_year: i32,
        mileage_adjustment_percent: f64,
        rows: YearSeries<EmissionsResultRow>,
    ) -> EmissionsResultTable {
        EmissionsResultTable {
            municipality: municipality.to_string(),
            target_year,
            mileage_adjustment_percent,
            rows,
        }
    }

    pub fn rows(&self) -> &YearSeries<EmissionsResultRow> {
        &self.rows
    }

    pub fn get(&self, year: i32) -> Option<&EmissionsResultRow> {
        self.rows.get(year)
    }

    pub fn last_historical_year(&self) -> i32 {
        self.rows.last_historical_year()
    }

    /// the row of the final year of the table.
    pub fn last_row(&self) -> Option<&EmissionsResultRow> {
        self.rows.values().last()
    }

    pub fn to_records(&self) -> Vec<EmissionsResultRecord> {
        self.rows
            .iter()
            .map(|(year, forecast, row)| EmissionsResultRecord {
                year,
                forecast,
                population: row.population,
                urban: row.mileage.urban,
                highways: row.mileage.highways,
                mileage: row.total_mileage,
                urban_per_resident: row.per_resident.urban,
                highways_per_resident: row.per_resident.highways,
                per_resident: row.total_per_resident,
                urban_emissions: row.emissions.urban,
                highways_emissions: row.emissions.highways,
                emissions: row.total_emissions,
                emission_factor: row.emission_factor,
                gasoline: row.engine_shares.gasoline,
                diesel: row.engine_shares.diesel,
                electric: row.engine_shares.electric,
                phev_gasoline: row.engine_shares.phev_gasoline,
            })
            .collect()
    }
}
