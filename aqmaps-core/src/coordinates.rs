use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in degree-space: longitude first, latitude second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn offset(self, d_lng: f64, d_lat: f64) -> Self {
        Self::new(self.lng + d_lng, self.lat + d_lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lng, self.lat)
    }
}

pub const HEADING_STEP: u16 = 10;
pub const HEADING_COUNT: usize = 36;

/// Direction of travel in degrees, counter-clockwise from east.
/// Always a multiple of 10 in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Heading(u16);

impl Heading {
    pub const EAST: Heading = Heading(0);
    pub const NORTH: Heading = Heading(90);
    pub const WEST: Heading = Heading(180);
    pub const SOUTH: Heading = Heading(270);

    pub fn new(degrees: u16) -> Option<Self> {
        (degrees < 360 && degrees % HEADING_STEP == 0).then_some(Self(degrees))
    }

    /// Maps an index in `0..36` onto its heading.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < HEADING_COUNT).then(|| Self(index as u16 * HEADING_STEP))
    }

    /// Every candidate heading in ascending order.
    pub fn all() -> impl Iterator<Item = Heading> {
        (0..HEADING_COUNT).map(|index| Self(index as u16 * HEADING_STEP))
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    pub fn radians(self) -> f64 {
        f64::from(self.0).to_radians()
    }

    pub fn opposite(self) -> Self {
        if self.0 < 180 {
            Self(self.0 + 180)
        } else {
            Self(self.0 - 180)
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Heading> for u16 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}

impl TryFrom<u16> for Heading {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Heading::new(degrees)
            .ok_or_else(|| format!("heading must be a multiple of 10 below 360, got {degrees}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_off_grid_and_full_turn() {
        assert!(Heading::new(0).is_some());
        assert!(Heading::new(350).is_some());
        assert!(Heading::new(360).is_none());
        assert!(Heading::new(45).is_none());
    }

    #[test]
    fn all_yields_thirty_six_ascending_headings() {
        let headings: Vec<u16> = Heading::all().map(Heading::degrees).collect();
        assert_eq!(headings.len(), HEADING_COUNT);
        assert_eq!(headings.first(), Some(&0));
        assert_eq!(headings.last(), Some(&350));
        assert!(headings.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn opposite_is_an_involution() {
        for heading in Heading::all() {
            assert_eq!(heading.opposite().opposite(), heading);
            assert_ne!(heading.opposite(), heading);
        }
        assert_eq!(Heading::new(30).unwrap().opposite().degrees(), 210);
        assert_eq!(Heading::new(180).unwrap().opposite(), Heading::EAST);
    }

    #[test]
    fn heading_serializes_as_plain_degrees() {
        let json = serde_json::to_string(&Heading::new(250).unwrap()).unwrap();
        assert_eq!(json, "250");
        assert!(serde_json::from_str::<Heading>("255").is_err());
    }
}
