use road_emissions_core::model::{EmissionClass, EngineType, RoadType};
use std::collections::BTreeMap;

use super::UnitEmissionFactorKey;

/// grams CO2e per vehicle-kilometer per (year, road, emission class, engine).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitEmissionFactorTable {
    factors: BTreeMap<UnitEmissionFactorKey, f64>,
}

impl UnitEmissionFactorTable {
    pub fn new(factors: BTreeMap<UnitEmissionFactorKey, f64>) -> UnitEmissionFactorTable {
        UnitEmissionFactorTable { factors }
    }

    pub fn get(
        &self,
        year: i32,
        road: RoadType,
        emission_class: EmissionClass,
        engine: EngineType,
    ) -> Option<f64> {
        self.factors
            .get(&UnitEmissionFactorKey::new(year, road, emission_class, engine))
            .copied()
    }

    /// all factors of a (year, road).
    pub fn road_entries(
        &self,
        year: i32,
        road: RoadType,
    ) -> impl Iterator<Item = (&UnitEmissionFactorKey, &f64)> {
        let (lo, hi) = UnitEmissionFactorKey::road_bounds(year, road);
        self.factors.range(lo..=hi)
    }

    pub fn contains(&self, year: i32, road: RoadType) -> bool {
        self.road_entries(year, road).next().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&UnitEmissionFactorKey, &f64)> {
        self.factors.iter()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}
