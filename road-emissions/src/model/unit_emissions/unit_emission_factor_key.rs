use road_emissions_core::model::{EmissionClass, EngineType, RoadType};

/// composite key of the unit emission factor table, ordered by year then road.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitEmissionFactorKey {
    pub year: i32,
    pub road: RoadType,
    pub emission_class: EmissionClass,
    pub engine: EngineType,
}

impl UnitEmissionFactorKey {
    pub fn new(
        year: i32,
        road: RoadType,
        emission_class: EmissionClass,
        engine: EngineType,
    ) -> UnitEmissionFactorKey {
        UnitEmissionFactorKey {
            year,
            road,
            emission_class,
            engine,
        }
    }

    /// smallest and largest possible keys of a (year, road), for range queries.
    pub fn road_bounds(year: i32, road: RoadType) -> (UnitEmissionFactorKey, UnitEmissionFactorKey) {
        (
            UnitEmissionFactorKey::new(year, road, EmissionClass::new(u8::MIN), EngineType::Gasoline),
            UnitEmissionFactorKey::new(
                year,
                road,
                EmissionClass::new(u8::MAX),
                EngineType::PhevGasoline,
            ),
        )
    }
}
