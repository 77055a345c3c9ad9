use crate::coordinates::{Coordinate, Heading};
use crate::flight::Termination;
use crate::obstacle::Airspace;
use crate::waypoint::Waypoint;
use serde::{Deserialize, Serialize};

/// One move of the flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step number.
    pub index: u32,
    pub from: Coordinate,
    pub heading: Heading,
    pub to: Coordinate,
    /// Locations of waypoints reached by this move, targeted one first.
    #[serde(default)]
    pub visited: Vec<String>,
}

impl StepRecord {
    pub fn first_visited(&self) -> Option<&str> {
        self.visited.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub all_visited: bool,
    pub returned: bool,
    pub moves_used: u32,
    pub moves_remaining: u32,
    pub termination: Termination,
}

impl MissionOutcome {
    pub fn is_success(&self) -> bool {
        self.all_visited && self.returned
    }
}

/// Everything a finished flight hands to output collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    pub start: Coordinate,
    pub airspace: Airspace,
    pub path: Vec<Coordinate>,
    pub steps: Vec<StepRecord>,
    pub visited: Vec<Waypoint>,
    pub pending: Vec<Waypoint>,
    pub outcome: MissionOutcome,
}

impl MissionReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn waypoint_count(&self) -> usize {
        self.visited.len() + self.pending.len()
    }
}
