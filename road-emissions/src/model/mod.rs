pub mod aggregate;
pub mod cache;
pub mod dataset;
pub mod fleet;
pub mod mileage;
pub mod pipeline;
pub mod unit_emissions;
