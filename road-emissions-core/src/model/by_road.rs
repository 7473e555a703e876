use serde::{Deserialize, Serialize};

use super::RoadType;

/// one value per road type.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ByRoad<T> {
    pub highways: T,
    pub urban: T,
}

impl<T> ByRoad<T> {
    pub fn new(highways: T, urban: T) -> ByRoad<T> {
        ByRoad { highways, urban }
    }

    pub fn get(&self, road: RoadType) -> &T {
        match road {
            RoadType::Highways => &self.highways,
            RoadType::Urban => &self.urban,
        }
    }

    pub fn map<U, F>(&self, f: F) -> ByRoad<U>
    where
        F: Fn(RoadType, &T) -> U,
    {
        ByRoad {
            highways: f(RoadType::Highways, &self.highways),
            urban: f(RoadType::Urban, &self.urban),
        }
    }

    pub fn try_map<U, E, F>(&self, f: F) -> Result<ByRoad<U>, E>
    where
        F: Fn(RoadType, &T) -> Result<U, E>,
    {
        Ok(ByRoad {
            highways: f(RoadType::Highways, &self.highways)?,
            urban: f(RoadType::Urban, &self.urban)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoadType, &T)> {
        [
            (RoadType::Highways, &self.highways),
            (RoadType::Urban, &self.urban),
        ]
        .into_iter()
    }
}

impl ByRoad<f64> {
    pub fn total(&self) -> f64 {
        self.highways + self.urban
    }
}
