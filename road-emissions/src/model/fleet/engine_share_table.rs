use road_emissions_core::model::{EmissionClass, EngineType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::EngineShareKey;

/// fraction of car mileage per (year, emission class, engine type). the
/// shares of each year sum to one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineShareTable {
    shares: BTreeMap<EngineShareKey, f64>,
}

/// shares of a single year summed over emission classes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineShareBreakdown {
    pub gasoline: f64,
    pub diesel: f64,
    pub electric: f64,
    pub phev_gasoline: f64,
}

impl EngineShareBreakdown {
    pub fn get(&self, engine: EngineType) -> f64 {
        match engine {
            EngineType::Gasoline => self.gasoline,
            EngineType::Diesel => self.diesel,
            EngineType::Electric => self.electric,
            EngineType::PhevGasoline => self.phev_gasoline,
        }
    }

    fn add(&mut self, engine: EngineType, share: f64) {
        match engine {
            EngineType::Gasoline => self.gasoline += share,
            EngineType::Diesel => self.diesel += share,
            EngineType::Electric => self.electric += share,
            EngineType::PhevGasoline => self.phev_gasoline += share,
        }
    }

    pub fn total(&self) -> f64 {
        self.gasoline + self.diesel + self.electric + self.phev_gasoline
    }
}

impl EngineShareTable {
    pub fn new(shares: BTreeMap<EngineShareKey, f64>) -> EngineShareTable {
        EngineShareTable { shares }
    }

    pub fn get(&self, year: i32, emission_class: EmissionClass, engine: EngineType) -> Option<f64> {
        self.shares
            .get(&EngineShareKey::new(year, emission_class, engine))
            .copied()
    }

    /// all (key, share) entries of a year.
    pub fn year_entries(&self, year: i32) -> impl Iterator<Item = (&EngineShareKey, &f64)> {
        let (lo, hi) = EngineShareKey::year_bounds(year);
        self.shares.range(lo..=hi)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.year_entries(year).next().is_some()
    }

    pub fn years(&self) -> Vec<i32> {
        let mut years = self.shares.keys().map(|k| k.year).collect::<Vec<_>>();
        years.dedup();
        years
    }

    /// shares of a year summed across emission classes, if the year is present.
    pub fn engine_breakdown(&self, year: i32) -> Option<EngineShareBreakdown> {
        if !self.contains_year(year) {
            return None;
        }
        let mut breakdown = EngineShareBreakdown::default();
        for (key, share) in self.year_entries(year) {
            breakdown.add(key.engine, *share);
        }
        Some(breakdown)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EngineShareKey, &f64)> {
        self.shares.iter()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
