use road_emissions::{
    app::{write_records, AppConfig, OutputFormat},
    model::{
        cache::{CachedEmissionsPipeline, InMemoryEmissionsCache},
        dataset::InMemoryDataSource,
        pipeline::{EmissionsPipeline, PipelineConfig},
    },
};
use road_emissions_core::model::PipelineError;
use std::{path::Path, sync::Arc};

fn sample_config() -> AppConfig {
    let file = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("resources")
        .join("road-emissions.toml");
    AppConfig::load(file.to_str()).expect("sample configuration should load")
}

fn sample_pipeline() -> EmissionsPipeline {
    sample_config()
        .build_pipeline()
        .expect("sample datasets should load")
}

#[test]
fn test_sample_datasets_run_end_to_end() {
    let table = sample_pipeline()
        .predict_cars_emissions(2030, -10.0, "Example")
        .unwrap();
    let rows = table.rows();
    assert_eq!(rows.start_year(), 2010);
    assert_eq!(rows.last_historical_year(), 2018);
    assert_eq!(rows.end_year(), 2030);

    for (year, forecast, row) in rows.iter() {
        assert_eq!(row.total_mileage, row.mileage.highways + row.mileage.urban);
        assert!(row.total_emissions.is_finite() && row.total_emissions > 0.0);
        assert!((row.engine_shares.total() - 1.0).abs() < 1e-9, "{year}");
        if forecast {
            assert_eq!(
                row.total_per_resident,
                row.per_resident.urban + row.per_resident.highways
            );
        }
    }

    let last = table.get(2018).unwrap();
    let target = table.get(2030).unwrap();
    assert!((target.per_resident.urban - last.per_resident.urban * 0.9).abs() < 1e-6);
    assert!(target.engine_shares.electric > last.engine_shares.electric);
}

#[test]
fn test_missing_measurement_is_interpolated() {
    let table = sample_pipeline()
        .predict_cars_emissions(2020, 0.0, "Example")
        .unwrap();
    let before = table.get(2012).unwrap().emissions.urban;
    let gap = table.get(2013).unwrap().emissions.urban;
    let after = table.get(2014).unwrap().emissions.urban;
    assert!(((before + after) / 2.0 - gap).abs() < 1e-9);
}

#[test]
fn test_municipality_without_inventory() {
    let result = sample_pipeline().predict_cars_emissions(2030, 0.0, "Lakeside");
    assert!(matches!(result, Err(PipelineError::ConfigurationError(_))));
}

#[test]
fn test_serialized_output_is_byte_identical() {
    let pipeline = sample_pipeline();
    let render = || {
        let table = pipeline
            .predict_cars_emissions(2035, 5.0, "Example")
            .unwrap();
        let mut buffer = vec![];
        write_records(&mut buffer, &table.to_records(), OutputFormat::Csv, "buffer").unwrap();
        buffer
    };
    assert_eq!(render(), render());
}

#[test]
fn test_cached_pipeline_over_csv_source() {
    let conf = sample_config();
    let source = InMemoryDataSource::from_csv_files(&conf.datasets).unwrap();
    let pipeline = EmissionsPipeline::new(Arc::new(source), PipelineConfig::default()).unwrap();
    let cached = CachedEmissionsPipeline::new(pipeline, Arc::new(InMemoryEmissionsCache::new()));
    let a = cached.predict_cars_emissions(2025, 0.0, "Example").unwrap();
    let b = cached.predict_cars_emissions(2025, 0.0, "Example").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    cached.invalidate_all();
    let c = cached.predict_cars_emissions(2025, 0.0, "Example").unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(a, c);
}
