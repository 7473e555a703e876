mod engine_share_key;
mod engine_share_table;
mod fleet_composition_ops;

pub use engine_share_key::EngineShareKey;
pub use engine_share_table::{EngineShareBreakdown, EngineShareTable};
pub use fleet_composition_ops::estimate_engine_shares;
