use road_emissions_core::model::{EmissionClass, EngineType};

/// composite key of the engine share table, ordered by year first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EngineShareKey {
    pub year: i32,
    pub emission_class: EmissionClass,
    pub engine: EngineType,
}

impl EngineShareKey {
    pub fn new(year: i32, emission_class: EmissionClass, engine: EngineType) -> EngineShareKey {
        EngineShareKey {
            year,
            emission_class,
            engine,
        }
    }

    /// smallest and largest possible keys of a year, for range queries.
    pub fn year_bounds(year: i32) -> (EngineShareKey, EngineShareKey) {
        (
            EngineShareKey::new(year, EmissionClass::new(u8::MIN), EngineType::Gasoline),
            EngineShareKey::new(year, EmissionClass::new(u8::MAX), EngineType::PhevGasoline),
        )
    }
}
