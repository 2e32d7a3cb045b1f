use serde::{Deserialize, Serialize};

/// Relative operator-attention ranking, not a numeric SLA. Ordering
/// follows severity: Light < Medium < Heavy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningLevel {
    Light,
    Medium,
    Heavy,
}

impl WarningLevel {
    pub fn as_str(&self) -> &str {
        match self {
            WarningLevel::Light => "light",
            WarningLevel::Medium => "medium",
            WarningLevel::Heavy => "heavy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub level: WarningLevel,
    pub message: String,
}
