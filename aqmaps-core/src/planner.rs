use crate::coordinates::{Coordinate, Heading};
use crate::error::{NavigationError, Result};
use crate::geometry::{distance, heading, project};
use crate::obstacle::Airspace;

/// Chooses the heading for the next move towards `target`.
///
/// The direct heading is used when its move is clear. Otherwise every one of
/// the 36 headings is tried and the clear one landing closest to `target`
/// wins, ties going to the smaller angle. There is no lookahead past one move.
pub fn plan_direction(pos: Coordinate, target: Coordinate, airspace: &Airspace) -> Result<Heading> {
    let direct = heading(pos, target);
    if airspace.is_clear_move(pos, project(pos, direct)) {
        return Ok(direct);
    }

    fallback_scan(pos, target, airspace).ok_or(NavigationError::NoFeasibleHeading { from: pos })
}

fn fallback_scan(pos: Coordinate, target: Coordinate, airspace: &Airspace) -> Option<Heading> {
    let mut best: Option<(Heading, f64)> = None;

    for candidate in Heading::all() {
        let next = project(pos, candidate);
        if !airspace.is_clear_move(pos, next) {
            continue;
        }

        let d = distance(next, target);
        if best.map_or(true, |(_, best_distance)| d < best_distance) {
            best = Some((candidate, d));
        }
    }

    best.map(|(candidate, _)| candidate)
}
