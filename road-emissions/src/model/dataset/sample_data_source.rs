use road_emissions_core::model::{AnnualSeries, EmissionClass, EngineType, RoadType};
use std::collections::HashMap;

use super::{
    FleetCompositionRecord, HistoricalEmissionsRecord, InMemoryDataSource,
    UnitEmissionFactorRecord,
};

pub const MUNICIPALITY: &str = "Testville";

/// a small municipality with history 2016..=2018 and forecasts through 2035.
pub fn sample_data_source() -> InMemoryDataSource {
    let mut historical_emissions = vec![];
    for (idx, year) in (2016..=2018).enumerate() {
        let step = idx as f64;
        for (road, mileage, co2e) in [
            (RoadType::Highways, 3.0e6 + step * 1.0e5, Some(540.0 + step * 10.0)),
            (RoadType::Urban, 5.0e6 + step * 5.0e4, Some(1050.0 + step * 5.0)),
        ] {
            historical_emissions.push(HistoricalEmissionsRecord {
                municipality: String::from(MUNICIPALITY),
                year,
                vehicle: String::from("Cars"),
                road,
                mileage,
                co2e,
            });
            historical_emissions.push(HistoricalEmissionsRecord {
                municipality: String::from(MUNICIPALITY),
                year,
                vehicle: String::from("Vans"),
                road,
                mileage: mileage / 10.0,
                co2e: None,
            });
        }
    }

    let mut fleet_composition = vec![];
    for year in 2016..=2035 {
        let t = (year - 2016) as f64;
        for (engine, model_year, count) in [
            ("gasoline", 2008, 500.0 - t * 10.0),
            ("gasoline", 2016, 300.0),
            ("diesel", 2012, 200.0 - t * 5.0),
            ("BEV", 2016, 10.0 + t * 12.0),
            ("PHEV", 2017, 5.0 + t * 3.0),
        ] {
            fleet_composition.push(FleetCompositionRecord {
                municipality: String::from(MUNICIPALITY),
                year,
                vehicle: String::from("Cars"),
                engine: String::from(engine),
                model_year,
                count,
            });
        }
    }

    let mut unit_emission_factors = vec![];
    for (road, scale) in [(RoadType::Highways, 1.0), (RoadType::Urban, 1.25)] {
        for (engine, class, co2e) in [
            (EngineType::Gasoline, 4, 190.0),
            (EngineType::Gasoline, 5, 170.0),
            (EngineType::Gasoline, 6, 150.0),
            (EngineType::Diesel, 4, 170.0),
            (EngineType::Diesel, 5, 155.0),
            (EngineType::Diesel, 6, 140.0),
        ] {
            for (subcategory, offset) in [("small", -10.0), ("large", 10.0)] {
                unit_emission_factors.push(UnitEmissionFactorRecord {
                    engine,
                    road,
                    class: EmissionClass::new(class),
                    subcategory: Some(String::from(subcategory)),
                    co2e: (co2e + offset) * scale,
                });
            }
        }
    }

    let population = HashMap::from([(
        String::from(MUNICIPALITY),
        AnnualSeries::from_pairs(
            "population",
            (2016..=2035).map(|y| (y, 20_000.0 + (y - 2016) as f64 * 150.0)),
        ),
    )]);
    let electricity_emission_factor = AnnualSeries::from_pairs(
        "electricity emission factor",
        (2016..=2035).map(|y| (y, 120.0 - (y - 2016) as f64 * 4.0)),
    );

    InMemoryDataSource {
        population,
        electricity_emission_factor,
        historical_emissions,
        fleet_composition,
        unit_emission_factors,
    }
}
