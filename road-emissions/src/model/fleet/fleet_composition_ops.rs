use road_emissions_core::model::{EmissionClass, EngineType, PipelineError};
use std::collections::BTreeMap;

use super::{EngineShareKey, EngineShareTable};
use crate::model::dataset::FleetCompositionRecord;

/// converts vehicle counts by engine label and model year into yearly
/// mileage shares per (emission class, engine type).
///
/// # Arguments
///
/// * `records` - fleet composition rows of one municipality
/// * `vehicle` - vehicle category to keep
/// * `class_boundaries` - first model years of each emission class
///
/// # Returns
///
/// shares normalized so that every year sums to one
pub fn estimate_engine_shares(
    records: &[FleetCompositionRecord],
    vehicle: &str,
    class_boundaries: &[i32],
) -> Result<EngineShareTable, PipelineError> {
    let mut counts: BTreeMap<EngineShareKey, f64> = BTreeMap::new();
    let mut year_totals: BTreeMap<i32, f64> = BTreeMap::new();
    for r in records.iter().filter(|r| r.vehicle == vehicle) {
        if !r.count.is_finite() || r.count < 0.0 {
            return Err(PipelineError::ConfigurationError(format!(
                "invalid vehicle count {} for {} model year {} in {}",
                r.count, r.engine, r.model_year, r.year
            )));
        }
        let key = EngineShareKey::new(
            r.year,
            EmissionClass::from_model_year(r.model_year, class_boundaries),
            EngineType::from_raw_label(&r.engine),
        );
        *counts.entry(key).or_default() += r.count;
        *year_totals.entry(r.year).or_default() += r.count;
    }

    if counts.is_empty() {
        return Err(PipelineError::ConfigurationError(format!(
            "fleet composition has no rows for vehicle category '{vehicle}'"
        )));
    }
    if let Some((year, _)) = year_totals.iter().find(|(_, total)| **total <= 0.0) {
        return Err(PipelineError::ConfigurationError(format!(
            "fleet composition for '{vehicle}' has no vehicles in {year}"
        )));
    }

    let shares = counts
        .into_iter()
        .map(|(key, count)| (key, count / year_totals[&key.year]))
        .collect::<BTreeMap<_, _>>();
    log::debug!(
        "estimated {} engine shares over {} years",
        shares.len(),
        year_totals.len()
    );
    Ok(EngineShareTable::new(shares))
}
