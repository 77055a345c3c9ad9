use crate::coordinates::{Coordinate, Heading};
use crate::error::NavigationError;
use crate::waypoint::Waypoint;
use serde::{Deserialize, Serialize};

/// Why a flight stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    Returned,
    BudgetExhausted,
    Stranded { error: NavigationError },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Pending waypoints remain.
    Seeking,
    /// Every waypoint is visited; heading back to the start.
    Returning,
    Done(Termination),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PhaseEvent {
    PendingCleared,
    ReachedStart,
    BudgetSpent,
    Failed(NavigationError),
}

impl Phase {
    pub fn initial(pending: &[Waypoint]) -> Self {
        if pending.is_empty() {
            Phase::Returning
        } else {
            Phase::Seeking
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Phase::Done(_))
    }

    /// Next phase after `event`. A finished flight ignores further events.
    pub fn on(self, event: PhaseEvent) -> Phase {
        match (self, event) {
            (Phase::Done(termination), _) => Phase::Done(termination),
            (_, PhaseEvent::Failed(error)) => Phase::Done(Termination::Stranded { error }),
            (_, PhaseEvent::BudgetSpent) => Phase::Done(Termination::BudgetExhausted),
            (Phase::Seeking, PhaseEvent::PendingCleared) => Phase::Returning,
            (Phase::Returning, PhaseEvent::ReachedStart) => Phase::Done(Termination::Returned),
            (phase, _) => phase,
        }
    }
}

/// The drone's mutable state. Only the controller writes to it.
#[derive(Debug, Clone)]
pub struct FlightState {
    position: Coordinate,
    moves_remaining: u32,
    path: Vec<Coordinate>,
    headings: Vec<Heading>,
    pending: Vec<Waypoint>,
    visited: Vec<Waypoint>,
}

impl FlightState {
    pub fn new(start: Coordinate, waypoints: Vec<Waypoint>, move_budget: u32) -> Self {
        Self {
            position: start,
            moves_remaining: move_budget,
            path: vec![start],
            headings: Vec::new(),
            pending: waypoints,
            visited: Vec::new(),
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn has_moves(&self) -> bool {
        self.moves_remaining > 0
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn pending(&self) -> &[Waypoint] {
        &self.pending
    }

    pub fn visited(&self) -> &[Waypoint] {
        &self.visited
    }

    /// Applies one move. Callers must check `has_moves` first.
    pub fn record_move(&mut self, heading: Heading, next: Coordinate) {
        debug_assert!(self.has_moves(), "move budget already spent");
        self.headings.push(heading);
        self.path.push(next);
        self.position = next;
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
    }

    /// Moves the pending waypoint at `index` to the visited list.
    pub fn mark_visited(&mut self, index: usize) -> Option<&Waypoint> {
        if index >= self.pending.len() {
            return None;
        }
        // `remove` keeps the remaining pending waypoints in insertion order.
        let waypoint = self.pending.remove(index);
        self.visited.push(waypoint);
        self.visited.last()
    }

    pub fn into_parts(self) -> (Vec<Coordinate>, Vec<Waypoint>, Vec<Waypoint>) {
        (self.path, self.visited, self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint::at("a.b.c", Coordinate::new(1.0, 0.0)),
            Waypoint::at("d.e.f", Coordinate::new(2.0, 0.0)),
            Waypoint::at("g.h.i", Coordinate::new(3.0, 0.0)),
        ]
    }

    #[test]
    fn record_move_keeps_path_and_headings_parallel() {
        let mut state = FlightState::new(Coordinate::new(0.0, 0.0), waypoints(), 2);
        state.record_move(Heading::NORTH, Coordinate::new(0.0, 0.0003));

        assert_eq!(state.path().len(), 2);
        assert_eq!(state.headings().len(), 1);
        assert_eq!(state.position(), Coordinate::new(0.0, 0.0003));
        assert_eq!(state.moves_remaining(), 1);
    }

    #[test]
    fn mark_visited_transfers_and_preserves_order() {
        let mut state = FlightState::new(Coordinate::new(0.0, 0.0), waypoints(), 10);
        let visited = state.mark_visited(1).map(|w| w.location.clone());

        assert_eq!(visited.as_deref(), Some("d.e.f"));
        let pending: Vec<&str> = state.pending().iter().map(|w| w.location.as_str()).collect();
        assert_eq!(pending, ["a.b.c", "g.h.i"]);
        assert_eq!(state.visited().len(), 1);
        assert!(state.mark_visited(5).is_none());
    }

    #[test]
    fn phase_transitions() {
        assert_eq!(Phase::initial(&waypoints()), Phase::Seeking);
        assert_eq!(Phase::initial(&[]), Phase::Returning);

        assert_eq!(Phase::Seeking.on(PhaseEvent::PendingCleared), Phase::Returning);
        // Reaching the start only matters once every waypoint is visited.
        assert_eq!(Phase::Seeking.on(PhaseEvent::ReachedStart), Phase::Seeking);
        assert_eq!(
            Phase::Returning.on(PhaseEvent::ReachedStart),
            Phase::Done(Termination::Returned)
        );
        assert_eq!(
            Phase::Seeking.on(PhaseEvent::BudgetSpent),
            Phase::Done(Termination::BudgetExhausted)
        );

        let done = Phase::Done(Termination::Returned);
        assert_eq!(done.clone().on(PhaseEvent::BudgetSpent), done);
    }
}
