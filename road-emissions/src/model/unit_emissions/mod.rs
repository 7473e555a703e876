mod unit_emission_factor_key;
mod unit_emission_factor_ops;
mod unit_emission_factor_table;

pub use unit_emission_factor_key::UnitEmissionFactorKey;
pub use unit_emission_factor_ops::{
    average_measured_factors, estimate_unit_emission_factors, MeasuredFactors,
};
pub use unit_emission_factor_table::UnitEmissionFactorTable;
