use crate::coordinates::Coordinate;
use serde::{Deserialize, Serialize};

/// A sensor to visit, already resolved to a position. `location` is its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: String,
    pub position: Coordinate,
    pub battery: f32,
    pub reading: Option<f64>,
}

impl Waypoint {
    pub fn new(
        location: impl Into<String>,
        position: Coordinate,
        battery: f32,
        reading: Option<f64>,
    ) -> Self {
        Self {
            location: location.into(),
            position,
            battery,
            reading,
        }
    }

    /// A waypoint with no sensor payload, for callers that only need a target.
    pub fn at(location: impl Into<String>, position: Coordinate) -> Self {
        Self::new(location, position, 100.0, None)
    }
}
