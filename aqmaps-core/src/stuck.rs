use crate::coordinates::{Coordinate, HEADING_COUNT, Heading};
use crate::error::{NavigationError, Result};
use crate::geometry::project;
use crate::obstacle::Airspace;
use fastrand::Rng;

/// Detects a two-heading oscillation: the last three headings `[h0, h1, h2]`
/// alternate between a heading and its opposite and `proposed` would continue
/// the pattern. Histories shorter than three never count as stuck.
pub fn is_stuck(history: &[Heading], proposed: Heading) -> bool {
    let [h0, h1, h2] = match history {
        [.., h0, h1, h2] => [*h0, *h1, *h2],
        _ => return false,
    };

    h0 == h2 && h1 == proposed && h0.opposite() == h1 && h2.opposite() == proposed
}

/// Picks an escape heading after `rejected` was found to oscillate.
///
/// The opposite heading is tried first; after that headings are drawn
/// uniformly from `rng` until one is clear and differs from `rejected`.
/// Each draw counts as an attempt.
pub fn recover(
    pos: Coordinate,
    rejected: Heading,
    airspace: &Airspace,
    rng: &mut Rng,
    max_attempts: u32,
) -> Result<Heading> {
    let acceptable =
        |candidate: Heading| candidate != rejected && airspace.is_clear_move(pos, project(pos, candidate));

    let opposite = rejected.opposite();
    if acceptable(opposite) {
        return Ok(opposite);
    }

    for _ in 0..max_attempts {
        let Some(candidate) = Heading::from_index(rng.usize(0..HEADING_COUNT)) else {
            continue;
        };
        if acceptable(candidate) {
            return Ok(candidate);
        }
    }

    Err(NavigationError::RecoveryFailed {
        from: pos,
        rejected,
        attempts: max_attempts,
    })
}
