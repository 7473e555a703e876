use road_emissions_core::model::ByRoad;

/// car mileage for a single year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadMileageRow {
    pub population: f64,
    /// vehicle-kilometers per road type
    pub mileage: ByRoad<f64>,
    /// vehicle-kilometers per resident per road type
    pub per_resident: ByRoad<f64>,
    pub total_mileage: f64,
    pub total_per_resident: f64,
}

impl RoadMileageRow {
    /// row from measured mileage, deriving per-resident values.
    pub fn from_mileage(mileage: ByRoad<f64>, population: f64) -> RoadMileageRow {
        let per_resident = mileage.map(|_, m| m / population);
        RoadMileageRow::new(mileage, per_resident, population)
    }

    /// row from per-resident mileage, deriving absolute mileage.
    pub fn from_per_resident(per_resident: ByRoad<f64>, population: f64) -> RoadMileageRow {
        let mileage = per_resident.map(|_, pr| pr * population);
        RoadMileageRow::new(mileage, per_resident, population)
    }

    fn new(mileage: ByRoad<f64>, per_resident: ByRoad<f64>, population: f64) -> RoadMileageRow {
        RoadMileageRow {
            population,
            mileage,
            per_resident,
            total_mileage: mileage.total(),
            total_per_resident: per_resident.total(),
        }
    }
}
