use road_emissions_core::model::PipelineError;
use std::sync::Arc;

use super::{CacheKey, EmissionsCache};
use crate::model::{aggregate::EmissionsResultTable, pipeline::EmissionsPipeline};

/// wraps an [`EmissionsPipeline`] with a result cache keyed on the
/// invocation arguments. failed runs are not stored.
pub struct CachedEmissionsPipeline {
    pipeline: EmissionsPipeline,
    cache: Arc<dyn EmissionsCache>,
}

impl CachedEmissionsPipeline {
    pub fn new(pipeline: EmissionsPipeline, cache: Arc<dyn EmissionsCache>) -> Self {
        Self { pipeline, cache }
    }

    pub fn pipeline(&self) -> &EmissionsPipeline {
        &self.pipeline
    }

    pub fn cache(&self) -> &Arc<dyn EmissionsCache> {
        &self.cache
    }

    pub fn predict_cars_emissions(
        &self,
        target_year: i32,
        mileage_adjustment_percent: f64,
        municipality: &str,
    ) -> Result<Arc<EmissionsResultTable>, PipelineError> {
        if mileage_adjustment_percent.is_nan() {
            return Err(PipelineError::ConfigurationError(String::from(
                "mileage adjustment cannot be NaN",
            )));
        }
        let key = CacheKey::new(target_year, mileage_adjustment_percent, municipality);
        if let Some(table) = self.cache.get(&key) {
            log::debug!("cache hit for {key}");
            return Ok(table);
        }
        let table = Arc::new(self.pipeline.predict_cars_emissions(
            target_year,
            mileage_adjustment_percent,
            municipality,
        )?);
        self.cache.insert(key, table.clone());
        Ok(table)
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn invalidate_municipality(&self, municipality: &str) {
        self.cache.invalidate_municipality(municipality);
    }
}

#[cfg(test)]
mod tests {
    use super::CachedEmissionsPipeline;
    use crate::model::{
        cache::InMemoryEmissionsCache,
        dataset::{
            sample_data_source::{sample_data_source, MUNICIPALITY},
            EmissionsDataSource, FleetCompositionRecord, HistoricalEmissionsRecord,
            InMemoryDataSource, UnitEmissionFactorRecord,
        },
        pipeline::{EmissionsPipeline, PipelineConfig},
    };
    use road_emissions_core::model::{AnnualSeries, PipelineError};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    /// counts pipeline runs by counting historical inventory reads
    struct CountingSource {
        inner: InMemoryDataSource,
        reads: AtomicUsize,
    }

    impl EmissionsDataSource for CountingSource {
        fn population_forecast(
            &self,
            municipality: &str,
            target_year: i32,
        ) -> Result<AnnualSeries, PipelineError> {
            self.inner.population_forecast(municipality, target_year)
        }

        fn electricity_emission_factor_forecast(&self) -> Result<AnnualSeries, PipelineError> {
            self.inner.electricity_emission_factor_forecast()
        }

        fn historical_transportation_emissions(
            &self,
            municipality: &str,
        ) -> Result<Vec<HistoricalEmissionsRecord>, PipelineError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.historical_transportation_emissions(municipality)
        }

        fn fleet_composition(
            &self,
            municipality: &str,
        ) -> Result<Vec<FleetCompositionRecord>, PipelineError> {
            self.inner.fleet_composition(municipality)
        }

        fn car_unit_emission_factors(
            &self,
        ) -> Result<Vec<UnitEmissionFactorRecord>, PipelineError> {
            self.inner.car_unit_emission_factors()
        }
    }

    fn setup() -> (Arc<CountingSource>, CachedEmissionsPipeline) {
        let source = Arc::new(CountingSource {
            inner: sample_data_source(),
            reads: AtomicUsize::new(0),
        });
        let pipeline = EmissionsPipeline::new(source.clone(), PipelineConfig::default()).unwrap();
        let cached = CachedEmissionsPipeline::new(pipeline, Arc::new(InMemoryEmissionsCache::new()));
        (source, cached)
    }

    #[test]
    fn test_repeated_invocation_is_served_from_cache() {
        let (source, cached) = setup();
        let a = cached.predict_cars_emissions(2030, -10.0, MUNICIPALITY).unwrap();
        let b = cached.predict_cars_emissions(2030, -10.0, MUNICIPALITY).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(source.reads.load(Ordering::SeqCst), 1);

        cached.predict_cars_emissions(2030, -5.0, MUNICIPALITY).unwrap();
        assert_eq!(source.reads.load(Ordering::SeqCst), 2);
        assert_eq!(cached.cache().len(), 2);
    }

    #[test]
    fn test_invalidation() {
        let (source, cached) = setup();
        cached.predict_cars_emissions(2025, 0.0, MUNICIPALITY).unwrap();
        cached.invalidate_municipality("Elsewhere");
        assert_eq!(cached.cache().len(), 1);
        cached.invalidate_municipality(MUNICIPALITY);
        assert!(cached.cache().is_empty());

        cached.predict_cars_emissions(2025, 0.0, MUNICIPALITY).unwrap();
        cached.invalidate_all();
        cached.predict_cars_emissions(2025, 0.0, MUNICIPALITY).unwrap();
        assert_eq!(source.reads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let (source, cached) = setup();
        assert!(cached.predict_cars_emissions(2030, 0.0, "Nowhere").is_err());
        assert!(cached.predict_cars_emissions(2030, 0.0, "Nowhere").is_err());
        assert!(cached.cache().is_empty());
        assert_eq!(source.reads.load(Ordering::SeqCst), 2);
        assert!(cached.predict_cars_emissions(2030, f64::NAN, MUNICIPALITY).is_err());
    }
}
