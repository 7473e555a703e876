mod csv_ops;
mod dataset_paths;
mod emissions_data_source;
mod fleet_composition_record;
mod historical_emissions_record;
mod in_memory_data_source;
#[cfg(test)]
pub(crate) mod sample_data_source;
mod unit_emission_factor_record;

pub use dataset_paths::DatasetPaths;
pub use emissions_data_source::EmissionsDataSource;
pub use fleet_composition_record::FleetCompositionRecord;
pub use historical_emissions_record::HistoricalEmissionsRecord;
pub use in_memory_data_source::InMemoryDataSource;
pub use unit_emission_factor_record::UnitEmissionFactorRecord;
