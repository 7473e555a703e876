use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::PipelineError;

/// first model years of the EURO emission standards, oldest first.
pub const DEFAULT_EMISSION_CLASS_BOUNDARIES: [i32; 7] = [1993, 1997, 2001, 2006, 2011, 2013, 2015];

/// a regulatory emission standard tier ("EURO n") assigned by vehicle model year.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct EmissionClass(u8);

impl EmissionClass {
    pub const fn new(tier: u8) -> EmissionClass {
        EmissionClass(tier)
    }

    pub fn tier(&self) -> u8 {
        self.0
    }

    /// buckets a model year into an emission class. the class index is the
    /// position of the first boundary strictly greater than the model year.
    /// model years at or past every boundary fall into the final class.
    ///
    /// # Arguments
    ///
    /// * `model_year` - vehicle model year
    /// * `boundaries` - class boundary years in increasing order
    ///
    /// # Example
    ///
    /// ```
    /// use road_emissions_core::model::{EmissionClass, DEFAULT_EMISSION_CLASS_BOUNDARIES};
    /// let class = EmissionClass::from_model_year(1995, &DEFAULT_EMISSION_CLASS_BOUNDARIES);
    /// assert_eq!(class.to_string(), "EURO 1");
    /// ```
    pub fn from_model_year(model_year: i32, boundaries: &[i32]) -> EmissionClass {
        match boundaries.iter().position(|b| model_year < *b) {
            Some(idx) => EmissionClass(idx as u8),
            None => EmissionClass::final_class(boundaries),
        }
    }

    /// the most recent emission class for a set of boundaries.
    pub fn final_class(boundaries: &[i32]) -> EmissionClass {
        EmissionClass(boundaries.len().saturating_sub(1) as u8)
    }
}

impl Display for EmissionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EURO {}", self.0)
    }
}

impl FromStr for EmissionClass {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        let tier = normalized
            .strip_prefix("EURO")
            .map(|t| t.trim())
            .ok_or_else(|| {
                PipelineError::ConfigurationError(format!(
                    "emission class '{s}' must be in the format 'EURO n'"
                ))
            })?;
        let tier = tier.parse::<u8>().map_err(|e| {
            PipelineError::ConfigurationError(format!(
                "emission class '{s}' has invalid tier number: {e}"
            ))
        })?;
        Ok(EmissionClass(tier))
    }
}

impl TryFrom<String> for EmissionClass {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmissionClass::from_str(&value)
    }
}

impl From<EmissionClass> for String {
    fn from(value: EmissionClass) -> Self {
        value.to_string()
    }
}
