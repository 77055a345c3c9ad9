use crate::coordinates::Coordinate;
use crate::geometry::Confinement;
use serde::{Deserialize, Serialize};

/// A no-fly zone: a closed polygon boundary whose first vertex is repeated last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    boundary: Vec<Coordinate>,
}

impl Obstacle {
    /// Builds an obstacle from a ring, closing it if the last vertex does not
    /// already repeat the first.
    pub fn new(name: Option<String>, mut boundary: Vec<Coordinate>) -> Self {
        if let (Some(&first), Some(&last)) = (boundary.first(), boundary.last()) {
            if first != last {
                boundary.push(first);
            }
        }
        Self { name, boundary }
    }

    pub fn boundary(&self) -> &[Coordinate] {
        &self.boundary
    }

    pub fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.boundary.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Whether the segment `from`-`to` touches any edge of this boundary.
    pub fn crosses(&self, from: Coordinate, to: Coordinate) -> bool {
        self.edges()
            .any(|(start, end)| segments_intersect(from, to, start, end))
    }
}

/// The static world the drone flies through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airspace {
    pub confinement: Confinement,
    pub obstacles: Vec<Obstacle>,
}

impl Airspace {
    pub fn new(confinement: Confinement, obstacles: Vec<Obstacle>) -> Self {
        Self {
            confinement,
            obstacles,
        }
    }

    /// True if the move segment intersects an edge of any obstacle.
    pub fn blocked(&self, from: Coordinate, to: Coordinate) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| obstacle.crosses(from, to))
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        self.confinement.contains(pos)
    }

    /// A move is allowed when it crosses no obstacle and lands inside the confinement zone.
    pub fn is_clear_move(&self, from: Coordinate, to: Coordinate) -> bool {
        !self.blocked(from, to) && self.contains(to)
    }
}

fn orientation(a: Coordinate, b: Coordinate, c: Coordinate) -> i8 {
    let cross = (b.lat - a.lat) * (c.lng - b.lng) - (b.lng - a.lng) * (c.lat - b.lat);
    if cross > 0.0 {
        1
    } else if cross < 0.0 {
        -1
    } else {
        0
    }
}

// `b` lies within the bounding box of `a`-`c`; only meaningful when collinear.
fn on_segment(a: Coordinate, b: Coordinate, c: Coordinate) -> bool {
    b.lng >= a.lng.min(c.lng)
        && b.lng <= a.lng.max(c.lng)
        && b.lat >= a.lat.min(c.lat)
        && b.lat <= a.lat.max(c.lat)
}

/// Closed segment intersection: proper crossings, touching endpoints and
/// collinear overlap all count.
pub fn segments_intersect(p1: Coordinate, q1: Coordinate, p2: Coordinate, q2: Coordinate) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == 0 && on_segment(p1, p2, q1))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
}
