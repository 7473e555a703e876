use std::{fs::File, io::Write, path::Path};

use super::{AppConfig, AppError, OutputFormat};
use crate::model::aggregate::EmissionsResultRecord;

/// runs one prediction and writes the result table to `output_file`, or to
/// stdout when no file is given.
pub fn run_predict(
    conf: &AppConfig,
    target_year: i32,
    mileage_adjustment_percent: f64,
    municipality: &str,
    output_file: Option<&Path>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pipeline = conf.build_pipeline()?;
    let table =
        pipeline.predict_cars_emissions(target_year, mileage_adjustment_percent, municipality)?;
    let records = table.to_records();
    match output_file {
        Some(path) => {
            let name = path.display().to_string();
            let file = File::create(path).map_err(|e| AppError::WriteError {
                filepath: name.clone(),
                error: e.to_string(),
            })?;
            write_records(file, &records, format, &name)?;
            log::info!("wrote {} rows to {name}", records.len());
        }
        None => write_records(std::io::stdout().lock(), &records, format, "stdout")?,
    }
    Ok(())
}

/// serializes result records as CSV with a header row, or as a JSON array.
pub fn write_records<W: Write>(
    writer: W,
    records: &[EmissionsResultRecord],
    format: OutputFormat,
    destination: &str,
) -> Result<(), AppError> {
    let write_error = |error: String| AppError::WriteError {
        filepath: destination.to_string(),
        error,
    };
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for record in records {
                csv_writer
                    .serialize(record)
                    .map_err(|e| write_error(e.to_string()))?;
            }
            csv_writer.flush().map_err(|e| write_error(e.to_string()))
        }
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, records)
                .map_err(|e| write_error(e.to_string()))?;
            writeln!(writer).map_err(|e| write_error(e.to_string()))
        }
    }
}
