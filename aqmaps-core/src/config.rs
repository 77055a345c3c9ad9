use crate::geometry::Confinement;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MOVE_BUDGET: u32 = 150;
pub const DEFAULT_RECOVERY_ATTEMPTS: u32 = 1000;

/// Tunables for one simulated flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub confinement: Confinement,

    /// Moves available before the flight is cut short.
    #[serde(default = "default_move_budget")]
    pub move_budget: u32,

    /// Random draws allowed when escaping an oscillation.
    #[serde(default = "default_recovery_attempts")]
    pub max_recovery_attempts: u32,
}

fn default_move_budget() -> u32 {
    DEFAULT_MOVE_BUDGET
}

fn default_recovery_attempts() -> u32 {
    DEFAULT_RECOVERY_ATTEMPTS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            confinement: Confinement::default(),
            move_budget: DEFAULT_MOVE_BUDGET,
            max_recovery_attempts: DEFAULT_RECOVERY_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{ "move_budget": 20 }"#).unwrap();
        assert_eq!(config.move_budget, 20);
        assert_eq!(config.max_recovery_attempts, DEFAULT_RECOVERY_ATTEMPTS);
        assert_eq!(config.confinement, Confinement::default());
    }
}
