use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// file locations of the pre-loaded input datasets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DatasetPaths {
    /// municipality,year,population
    pub population_file: PathBuf,
    /// year,emission_factor (g CO2e/kWh)
    pub electricity_emission_factor_file: PathBuf,
    /// municipality,year,vehicle,road,mileage,co2e
    pub historical_emissions_file: PathBuf,
    /// municipality,year,vehicle,engine,model_year,count
    pub fleet_composition_file: PathBuf,
    /// engine,road,class,subcategory,co2e
    pub unit_emission_factors_file: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            population_file: PathBuf::from("population.csv"),
            electricity_emission_factor_file: PathBuf::from("electricity_emission_factor.csv"),
            historical_emissions_file: PathBuf::from("historical_emissions.csv"),
            fleet_composition_file: PathBuf::from("fleet_composition.csv"),
            unit_emission_factors_file: PathBuf::from("car_unit_emissions.csv"),
        }
    }
}

impl DatasetPaths {
    /// makes relative paths relative to `base_directory`, leaving absolute paths untouched.
    pub fn resolve(&self, base_directory: &Path) -> DatasetPaths {
        let r = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base_directory.join(p)
            }
        };
        DatasetPaths {
            population_file: r(&self.population_file),
            electricity_emission_factor_file: r(&self.electricity_emission_factor_file),
            historical_emissions_file: r(&self.historical_emissions_file),
            fleet_composition_file: r(&self.fleet_composition_file),
            unit_emission_factors_file: r(&self.unit_emission_factors_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DatasetPaths;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_resolve_relative_paths() {
        let mut paths = DatasetPaths::default();
        paths.population_file = PathBuf::from("/data/population.csv");
        let resolved = paths.resolve(Path::new("config"));
        assert_eq!(resolved.population_file, PathBuf::from("/data/population.csv"));
        assert_eq!(
            resolved.fleet_composition_file,
            Path::new("config").join("fleet_composition.csv")
        );
    }
}
