use clap::{Parser, Subcommand};
use std::path::Path;

use super::{run_predict, run_sweep, AppConfig, AppError, OutputFormat};

/// command line tool forecasting municipal road traffic emissions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EmissionsCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: EmissionsOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum EmissionsOperation {
    /// predicts yearly car mileage and emissions of one municipality
    /// through a target year.
    Predict {
        /// last year of the forecast
        #[arg(long)]
        target_year: i32,
        /// change of per-resident car mileage at the target year, in percent
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        mileage_adjustment: f64,
        #[arg(long)]
        municipality: String,
        /// TOML file with dataset paths and pipeline parameters
        #[arg(long)]
        config_file: Option<String>,
        /// result file path. writes to stdout if omitted.
        #[arg(long)]
        output_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// runs every combination of target years and mileage adjustments,
    /// printing the target-year outcome of each.
    Sweep {
        /// comma-separated target years, such as 2025,2030
        #[arg(long, value_delimiter = ',', required = true)]
        target_years: Vec<i32>,
        /// comma-separated adjustments in percent, such as -10,0,10
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            default_value = "0"
        )]
        mileage_adjustments: Vec<f64>,
        #[arg(long)]
        municipality: String,
        #[arg(long)]
        config_file: Option<String>,
    },
    /// prints the effective configuration as TOML.
    ShowConfig {
        #[arg(long)]
        config_file: Option<String>,
    },
}

impl EmissionsOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            EmissionsOperation::Predict {
                target_year,
                mileage_adjustment,
                municipality,
                config_file,
                output_file,
                format,
            } => {
                let conf = AppConfig::load(config_file.as_deref())?;
                run_predict(
                    &conf,
                    *target_year,
                    *mileage_adjustment,
                    municipality,
                    output_file.as_deref().map(Path::new),
                    *format,
                )
            }
            EmissionsOperation::Sweep {
                target_years,
                mileage_adjustments,
                municipality,
                config_file,
            } => {
                let conf = AppConfig::load(config_file.as_deref())?;
                let summaries = run_sweep(&conf, target_years, mileage_adjustments, municipality)?;
                for summary in summaries {
                    println!("{summary}");
                }
                Ok(())
            }
            EmissionsOperation::ShowConfig { config_file } => {
                let conf = AppConfig::load(config_file.as_deref())?;
                print!("{}", conf.to_toml()?);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EmissionsCliArguments, EmissionsOperation};
    use crate::app::OutputFormat;
    use clap::Parser;

    #[test]
    fn test_parse_predict() {
        let args = EmissionsCliArguments::parse_from([
            "road-emissions",
            "predict",
            "--target-year",
            "2030",
            "--mileage-adjustment",
            "-10",
            "--municipality",
            "Testville",
            "--format",
            "json",
        ]);
        match args.op {
            EmissionsOperation::Predict {
                target_year,
                mileage_adjustment,
                format,
                output_file,
                ..
            } => {
                assert_eq!(target_year, 2030);
                assert_eq!(mileage_adjustment, -10.0);
                assert_eq!(format, OutputFormat::Json);
                assert!(output_file.is_none());
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_parse_sweep_lists() {
        let args = EmissionsCliArguments::parse_from([
            "road-emissions",
            "sweep",
            "--target-years",
            "2025,2030",
            "--mileage-adjustments",
            "-10,0,10",
            "--municipality",
            "Testville",
        ]);
        match args.op {
            EmissionsOperation::Sweep {
                target_years,
                mileage_adjustments,
                ..
            } => {
                assert_eq!(target_years, vec![2025, 2030]);
                assert_eq!(mileage_adjustments, vec![-10.0, 0.0, 10.0]);
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }
}
