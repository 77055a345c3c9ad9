use crate::coordinates::Coordinate;
use crate::geometry::distance;
use crate::waypoint::Waypoint;

/// Index of the pending waypoint closest to `pos`.
///
/// Ties go to the earliest waypoint in slice order, so the result is
/// reproducible as long as the pending list keeps its insertion order.
pub fn nearest_pending(pos: Coordinate, pending: &[Waypoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, waypoint) in pending.iter().enumerate() {
        let d = distance(pos, waypoint.position);
        let replace = best.map_or(true, |(_, best_distance)| d < best_distance);
        if replace {
            best = Some((index, d));
        }
    }

    best.map(|(index, _)| index)
}
