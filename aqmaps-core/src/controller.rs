use crate::config::SimulationConfig;
use crate::coordinates::Coordinate;
use crate::error::{NavigationError, Result};
use crate::flight::{FlightState, Phase, PhaseEvent, Termination};
use crate::geometry::{RETURN_RADIUS, VISIT_RADIUS, project, within};
use crate::obstacle::{Airspace, Obstacle};
use crate::planner::plan_direction;
use crate::report::{MissionOutcome, MissionReport, StepRecord};
use crate::selector::nearest_pending;
use crate::stuck::{is_stuck, recover};
use crate::waypoint::Waypoint;
use fastrand::Rng;
use tracing::{debug, info, warn};

/// Drives the drone one move at a time: pick a target, plan a heading,
/// break oscillations, move, then check visits and termination.
pub struct Controller {
    start: Coordinate,
    airspace: Airspace,
    state: FlightState,
    phase: Phase,
    rng: Rng,
    max_recovery_attempts: u32,
    steps: Vec<StepRecord>,
}

impl Controller {
    /// `rng` is the only source of randomness for the whole flight.
    pub fn new(
        start: Coordinate,
        waypoints: Vec<Waypoint>,
        obstacles: Vec<Obstacle>,
        config: &SimulationConfig,
        rng: Rng,
    ) -> Self {
        let airspace = Airspace::new(config.confinement, obstacles);
        Self::with_airspace(start, waypoints, airspace, config, rng)
    }

    pub fn with_airspace(
        start: Coordinate,
        waypoints: Vec<Waypoint>,
        airspace: Airspace,
        config: &SimulationConfig,
        rng: Rng,
    ) -> Self {
        let mut phase = Phase::initial(&waypoints);
        let state = FlightState::new(start, waypoints, config.move_budget);
        if !state.has_moves() {
            phase = phase.on(PhaseEvent::BudgetSpent);
        }

        Self {
            start,
            airspace,
            state,
            phase,
            rng,
            max_recovery_attempts: config.max_recovery_attempts,
            steps: Vec::new(),
        }
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn airspace(&self) -> &Airspace {
        &self.airspace
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Performs one move. Returns `Ok(None)` once the flight is over.
    ///
    /// A navigation error ends the flight: the phase becomes
    /// `Done(Stranded)` and the error is also returned to the caller.
    pub fn step(&mut self) -> Result<Option<StepRecord>> {
        let seeking = match self.phase {
            Phase::Done(_) => return Ok(None),
            Phase::Seeking => true,
            Phase::Returning => false,
        };

        let pos = self.state.position();
        let target_index = if seeking {
            nearest_pending(pos, self.state.pending())
        } else {
            None
        };
        let target = target_index
            .and_then(|index| self.state.pending().get(index))
            .map_or(self.start, |waypoint| waypoint.position);

        let mut heading = match plan_direction(pos, target, &self.airspace) {
            Ok(heading) => heading,
            Err(err) => return Err(self.strand(err)),
        };

        if is_stuck(self.state.headings(), heading) {
            let rejected = heading;
            heading = match recover(
                pos,
                rejected,
                &self.airspace,
                &mut self.rng,
                self.max_recovery_attempts,
            ) {
                Ok(heading) => heading,
                Err(err) => return Err(self.strand(err)),
            };
            warn!(
                step = self.steps.len() + 1,
                rejected = rejected.degrees(),
                chosen = heading.degrees(),
                "oscillation detected, changing heading"
            );
        }

        let next = project(pos, heading);
        self.state.record_move(heading, next);

        let mut visited = Vec::new();
        if seeking {
            if let Some(index) = target_index {
                self.visit_if_close(index, next, &mut visited);
            }
            // The move may also have brought another waypoint into range.
            if let Some(index) = nearest_pending(next, self.state.pending()) {
                self.visit_if_close(index, next, &mut visited);
            }
        }

        let record = StepRecord {
            index: self.steps.len() as u32 + 1,
            from: pos,
            heading,
            to: next,
            visited,
        };
        debug!(
            step = record.index,
            heading = heading.degrees(),
            lng = next.lng,
            lat = next.lat,
            remaining = self.state.moves_remaining(),
            "moved"
        );
        self.steps.push(record.clone());

        if seeking && self.state.pending().is_empty() {
            info!(step = record.index, "all waypoints visited, returning to start");
            self.transition(PhaseEvent::PendingCleared);
        } else if !seeking && within(next, self.start, RETURN_RADIUS) {
            info!(step = record.index, "returned to start");
            self.transition(PhaseEvent::ReachedStart);
        }

        if !self.state.has_moves() && !self.phase.is_done() {
            warn!(
                pending = self.state.pending().len(),
                "move budget exhausted"
            );
            self.transition(PhaseEvent::BudgetSpent);
        }

        Ok(Some(record))
    }

    /// Flies until the flight terminates and returns the full report.
    pub fn run(mut self) -> MissionReport {
        loop {
            if let Phase::Done(termination) = &self.phase {
                let termination = termination.clone();
                return self.finish(termination);
            }
            if let Err(err) = self.step() {
                debug!(%err, "flight stopped early");
            }
        }
    }

    fn visit_if_close(&mut self, index: usize, pos: Coordinate, visited: &mut Vec<String>) {
        let in_range = self
            .state
            .pending()
            .get(index)
            .is_some_and(|waypoint| within(pos, waypoint.position, VISIT_RADIUS));
        if !in_range {
            return;
        }

        if let Some(waypoint) = self.state.mark_visited(index) {
            info!(location = %waypoint.location, "visited waypoint");
            visited.push(waypoint.location.clone());
        }
    }

    fn strand(&mut self, err: NavigationError) -> NavigationError {
        warn!(%err, "drone stranded");
        self.transition(PhaseEvent::Failed(err.clone()));
        err
    }

    fn transition(&mut self, event: PhaseEvent) {
        let current = std::mem::replace(&mut self.phase, Phase::Seeking);
        self.phase = current.on(event);
    }

    fn finish(self, termination: Termination) -> MissionReport {
        let returned = within(self.state.position(), self.start, RETURN_RADIUS);
        let moves_remaining = self.state.moves_remaining();
        let moves_used = self.steps.len() as u32;
        let (path, visited, pending) = self.state.into_parts();

        MissionReport {
            start: self.start,
            airspace: self.airspace,
            path,
            steps: self.steps,
            outcome: MissionOutcome {
                all_visited: pending.is_empty(),
                returned,
                moves_used,
                moves_remaining,
                termination,
            },
            visited,
            pending,
        }
    }
}
