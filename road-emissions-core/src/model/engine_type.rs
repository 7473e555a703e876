use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// canonical engine/fuel technology of a vehicle.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineType {
    #[serde(rename = "gasoline")]
    Gasoline,
    #[serde(rename = "diesel")]
    Diesel,
    #[serde(rename = "electric")]
    Electric,
    #[serde(rename = "PHEV (gasoline)")]
    PhevGasoline,
}

impl EngineType {
    pub const ALL: [EngineType; 4] = [
        EngineType::Gasoline,
        EngineType::Diesel,
        EngineType::Electric,
        EngineType::PhevGasoline,
    ];

    /// maps a raw registry engine label onto its canonical engine type.
    /// battery-electric and plug-in hybrid labels are recognized, "diesel" stays
    /// diesel, and every other label is treated as gasoline.
    pub fn from_raw_label(label: &str) -> EngineType {
        match label.trim().to_lowercase().as_str() {
            "bev" | "electric" => EngineType::Electric,
            "phev" | "phev (gasoline)" => EngineType::PhevGasoline,
            "diesel" => EngineType::Diesel,
            _ => EngineType::Gasoline,
        }
    }
}

impl Display for EngineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EngineType::Gasoline => "gasoline",
            EngineType::Diesel => "diesel",
            EngineType::Electric => "electric",
            EngineType::PhevGasoline => "PHEV (gasoline)",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::EngineType;

    #[test]
    fn test_raw_labels() {
        assert_eq!(EngineType::from_raw_label("BEV"), EngineType::Electric);
        assert_eq!(EngineType::from_raw_label("PHEV"), EngineType::PhevGasoline);
        assert_eq!(EngineType::from_raw_label("diesel"), EngineType::Diesel);
        assert_eq!(EngineType::from_raw_label("other"), EngineType::Gasoline);
        assert_eq!(EngineType::from_raw_label("gasoline"), EngineType::Gasoline);
    }

    #[test]
    fn test_serde_name() {
        let s = serde_json::to_string(&EngineType::PhevGasoline).unwrap();
        assert_eq!(s, "\"PHEV (gasoline)\"");
    }
}
