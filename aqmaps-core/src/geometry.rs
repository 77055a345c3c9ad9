//! Planar geometry in degree-space. No geodesic correction is applied:
//! longitude and latitude are treated as Euclidean axes.

use crate::coordinates::{Coordinate, HEADING_STEP, Heading};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Length of every move.
pub const MOVE_LENGTH: f64 = 0.0003;
/// A waypoint counts as reached when closer than this after a move.
pub const VISIT_RADIUS: f64 = 0.0002;
/// The drone counts as home when closer than this to its start.
pub const RETURN_RADIUS: f64 = 0.0003;

/// Quantised direction from `from` towards `to`.
pub fn heading(from: Coordinate, to: Coordinate) -> Heading {
    let mut radians = (to.lat - from.lat).atan2(to.lng - from.lng);
    if radians < 0.0 {
        radians += TAU;
    }

    let step = f64::from(HEADING_STEP);
    let rounded = (radians.to_degrees() / step).round() as u16 * HEADING_STEP;
    Heading::new(rounded % 360).unwrap_or(Heading::EAST)
}

/// Position after one move of `MOVE_LENGTH` along `heading`.
pub fn project(pos: Coordinate, heading: Heading) -> Coordinate {
    let radians = heading.radians();
    pos.offset(MOVE_LENGTH * radians.cos(), MOVE_LENGTH * radians.sin())
}

pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    (b.lng - a.lng).hypot(b.lat - a.lat)
}

pub fn within(a: Coordinate, b: Coordinate, threshold: f64) -> bool {
    distance(a, b) < threshold
}

/// The open rectangle the drone must stay inside. Points on the boundary are outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confinement {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Confinement {
    pub fn new(min_lng: f64, max_lng: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            max_lng,
            min_lat,
            max_lat,
        }
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        pos.lng > self.min_lng
            && pos.lng < self.max_lng
            && pos.lat > self.min_lat
            && pos.lat < self.max_lat
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Corners clockwise from the north-west one.
    pub fn corners(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.min_lng, self.max_lat),
            Coordinate::new(self.max_lng, self.max_lat),
            Coordinate::new(self.max_lng, self.min_lat),
            Coordinate::new(self.min_lng, self.min_lat),
        ]
    }
}

impl Default for Confinement {
    fn default() -> Self {
        Self::new(-3.192473, -3.184319, 55.942617, 55.946233)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn origin() -> Coordinate {
        Coordinate::new(-3.188396, 55.944425)
    }

    #[test]
    fn heading_rounds_to_nearest_ten() {
        let from = origin();
        assert_eq!(heading(from, from.offset(1.0, 0.0)).degrees(), 0);
        assert_eq!(heading(from, from.offset(0.0, 1.0)).degrees(), 90);
        assert_eq!(heading(from, from.offset(-1.0, 0.0)).degrees(), 180);
        assert_eq!(heading(from, from.offset(0.0, -1.0)).degrees(), 270);
        assert_eq!(heading(from, from.offset(1.0, 0.8)).degrees(), 40);
        assert_eq!(heading(from, from.offset(-1.0, -0.2)).degrees(), 190);
    }

    #[test]
    fn heading_never_returns_full_turn() {
        let from = origin();
        // Just below east: 359.x degrees rounds up to 360 and wraps.
        let to = from.offset(1.0, -0.001);
        assert_eq!(heading(from, to), Heading::EAST);

        for step in 0..720 {
            let angle = f64::from(step) * 0.5_f64.to_radians();
            let to = from.offset(angle.cos(), angle.sin());
            let degrees = heading(from, to).degrees();
            assert!(degrees < 360);
            assert_eq!(degrees % 10, 0);
        }
    }

    #[test]
    fn project_moves_exactly_one_step() {
        for h in Heading::all() {
            let next = project(origin(), h);
            assert_abs_diff_eq!(distance(origin(), next), MOVE_LENGTH, epsilon = 1e-12);
        }
        let north = project(origin(), Heading::NORTH);
        assert_abs_diff_eq!(north.lng, origin().lng, epsilon = 1e-12);
        assert_abs_diff_eq!(north.lat, origin().lat + MOVE_LENGTH, epsilon = 1e-12);
    }

    #[test]
    fn move_then_opposite_returns_home() {
        for h in Heading::all() {
            let back = project(project(origin(), h), h.opposite());
            assert_abs_diff_eq!(back.lng, origin().lng, epsilon = 1e-9);
            assert_abs_diff_eq!(back.lat, origin().lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn within_is_strict() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.5);
        assert!(within(a, b, 0.6));
        assert!(!within(a, b, 0.5));
    }

    #[test]
    fn confinement_excludes_boundary_and_includes_center() {
        let zone = Confinement::default();
        assert!(zone.contains(zone.center()));
        assert!(zone.contains(origin()));
        for corner in zone.corners() {
            assert!(!zone.contains(corner));
        }
        assert!(!zone.contains(Coordinate::new(zone.min_lng, zone.center().lat)));
        assert!(!zone.contains(Coordinate::new(-3.192, 55.942)));
    }
}
