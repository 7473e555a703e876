use std::{collections::BTreeMap, ops::RangeInclusive};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::PipelineError;

/// a sparse mapping from year to value, used for externally forecast inputs
/// such as population or the electricity grid emission factor.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AnnualSeries {
    name: String,
    values: BTreeMap<i32, f64>,
}

impl AnnualSeries {
    pub fn new(name: &str, values: BTreeMap<i32, f64>) -> AnnualSeries {
        AnnualSeries {
            name: name.to_string(),
            values,
        }
    }

    pub fn from_pairs<I>(name: &str, pairs: I) -> AnnualSeries
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        AnnualSeries::new(name, pairs.into_iter().collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied()
    }

    /// gets the value for a year or fails with a configuration error.
    pub fn require(&self, year: i32) -> Result<f64, PipelineError> {
        self.get(year).ok_or_else(|| {
            PipelineError::ConfigurationError(format!("{} has no value for year {year}", self.name))
        })
    }

    pub fn first_year(&self) -> Option<i32> {
        self.values.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.values.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values.iter().map(|(y, v)| (*y, *v))
    }

    /// fails unless every year in the range has a finite value.
    pub fn check_coverage(&self, years: RangeInclusive<i32>) -> Result<(), PipelineError> {
        let missing = years
            .clone()
            .filter(|y| !self.get(*y).map(f64::is_finite).unwrap_or(false))
            .collect_vec();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::ConfigurationError(format!(
                "{} does not cover years {}..={}, missing or invalid: [{}]",
                self.name,
                years.start(),
                years.end(),
                missing.iter().join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnnualSeries;

    #[test]
    fn test_coverage() {
        let s = AnnualSeries::from_pairs("population", [(2018, 10.0), (2019, 11.0), (2021, 12.0)]);
        assert!(s.check_coverage(2018..=2019).is_ok());
        let err = s.check_coverage(2018..=2021).unwrap_err();
        assert!(err.to_string().contains("2020"));
        assert_eq!(s.first_year(), Some(2018));
        assert_eq!(s.last_year(), Some(2021));
    }

    #[test]
    fn test_non_finite_is_missing() {
        let s = AnnualSeries::from_pairs("grid", [(2018, f64::NAN)]);
        assert!(s.check_coverage(2018..=2018).is_err());
    }
}
