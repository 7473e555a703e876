use road_emissions_core::model::PipelineError;
use serde::{de::DeserializeOwned, Deserialize};
use std::path::Path;

/// row of a population forecast file
#[derive(Deserialize, Debug)]
pub struct PopulationRow {
    pub municipality: String,
    pub year: i32,
    pub population: f64,
}

/// row of a grid electricity emission factor file
#[derive(Deserialize, Debug)]
pub struct ElectricityEmissionFactorRow {
    pub year: i32,
    pub emission_factor: f64,
}

/// reads every row of a CSV file with headers into `T`.
///
/// # Arguments
///
/// * `filepath` - CSV file to read
///
/// # Returns
///
/// the deserialized rows, or a configuration error naming the file and row
pub fn read_rows<T>(filepath: &Path) -> Result<Vec<T>, PipelineError>
where
    T: DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(filepath).map_err(|e| {
        PipelineError::ConfigurationError(format!("failed reading '{}': {e}", filepath.display()))
    })?;
    let rows = reader
        .deserialize::<T>()
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|e| {
                PipelineError::ConfigurationError(format!(
                    "failed decoding row {idx} of '{}': {e}",
                    filepath.display()
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("read {} rows from {}", rows.len(), filepath.display());
    Ok(rows)
}
