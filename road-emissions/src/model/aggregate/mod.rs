mod emissions_ops;
mod emissions_result_record;
mod emissions_result_row;
mod emissions_result_table;

pub use emissions_ops::aggregate_emissions;
pub use emissions_result_record::EmissionsResultRecord;
pub use emissions_result_row::EmissionsResultRow;
pub use emissions_result_table::EmissionsResultTable;
