use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// identifies one pipeline invocation. the adjustment is wrapped so that
/// keys are hashable; NaN adjustments are rejected before a key is built.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub target_year: i32,
    pub mileage_adjustment_percent: OrderedFloat<f64>,
    pub municipality: String,
}

impl CacheKey {
    pub fn new(target_year: i32, mileage_adjustment_percent: f64, municipality: &str) -> CacheKey {
        CacheKey {
            target_year,
            mileage_adjustment_percent: OrderedFloat(mileage_adjustment_percent),
            municipality: municipality.to_string(),
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}%)",
            self.municipality, self.target_year, self.mileage_adjustment_percent
        )
    }
}
