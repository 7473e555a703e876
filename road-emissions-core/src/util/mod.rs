pub mod interpolation;
pub mod mass_ops;
