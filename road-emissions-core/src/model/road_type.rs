use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::PipelineError;

/// road category used to split vehicle mileage.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoadType {
    Highways,
    Urban,
}

impl RoadType {
    pub const ALL: [RoadType; 2] = [RoadType::Highways, RoadType::Urban];
}

impl Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadType::Highways => write!(f, "Highways"),
            RoadType::Urban => write!(f, "Urban"),
        }
    }
}

impl FromStr for RoadType {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "highways" | "highway" => Ok(RoadType::Highways),
            "urban" => Ok(RoadType::Urban),
            other => Err(PipelineError::ConfigurationError(format!(
                "unknown road type '{other}', expected one of 'Highways', 'Urban'"
            ))),
        }
    }
}
