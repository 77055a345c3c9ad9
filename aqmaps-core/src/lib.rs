pub mod config;
pub mod controller;
pub mod coordinates;
pub mod error;
pub mod flight;
pub mod geometry;
pub mod obstacle;
pub mod planner;
pub mod report;
pub mod selector;
pub mod stuck;
pub mod waypoint;

pub use config::{DEFAULT_MOVE_BUDGET, DEFAULT_RECOVERY_ATTEMPTS, SimulationConfig};
pub use controller::Controller;
pub use coordinates::{Coordinate, HEADING_COUNT, Heading};
pub use error::NavigationError;
pub use flight::{FlightState, Phase, PhaseEvent, Termination};
pub use geometry::{
    Confinement, MOVE_LENGTH, RETURN_RADIUS, VISIT_RADIUS, distance, heading, project, within,
};
pub use obstacle::{Airspace, Obstacle, segments_intersect};
pub use planner::plan_direction;
pub use report::{MissionOutcome, MissionReport, StepRecord};
pub use selector::nearest_pending;
pub use stuck::{is_stuck, recover};
pub use waypoint::Waypoint;
