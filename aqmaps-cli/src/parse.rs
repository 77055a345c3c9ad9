//! Decoding of the map server's documents.

use crate::error::Result;
use aqmaps_core::{Coordinate, Obstacle};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of a day's `air-quality-data.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorRecord {
    pub location: String,
    pub battery: f32,
    #[serde(default)]
    pub reading: Value,
}

impl SensorRecord {
    /// Readings arrive as strings; `"null"`, `"NaN"` and anything
    /// unparseable mean there is no usable value.
    pub fn reading(&self) -> Option<f64> {
        let value = match &self.reading {
            Value::String(text) => text.trim().parse::<f64>().ok(),
            Value::Number(number) => number.as_f64(),
            _ => None,
        };
        value.filter(|reading| !reading.is_nan())
    }
}

#[derive(Debug, Deserialize)]
struct Details {
    coordinates: LngLat,
}

#[derive(Debug, Deserialize)]
struct LngLat {
    lng: f64,
    lat: f64,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    #[serde(other)]
    Unsupported,
}

pub fn parse_sensors(json: &str) -> Result<Vec<SensorRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Position from a what3words `details.json`; only `coordinates` is read.
pub fn parse_details(json: &str) -> Result<Coordinate> {
    let details: Details = serde_json::from_str(json)?;
    Ok(Coordinate::new(details.coordinates.lng, details.coordinates.lat))
}

/// Polygon features become obstacles built from their outer ring; other
/// geometries are skipped.
pub fn parse_no_fly_zones(json: &str) -> Result<Vec<Obstacle>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;

    let obstacles = collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let Geometry::Polygon { coordinates } = feature.geometry else {
                return None;
            };
            let ring = coordinates.into_iter().next()?;
            let name = feature
                .properties
                .as_ref()
                .and_then(|properties| properties.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string);
            let boundary = ring
                .into_iter()
                .map(|[lng, lat]| Coordinate::new(lng, lat))
                .collect();
            Some(Obstacle::new(name, boundary))
        })
        .collect();

    Ok(obstacles)
}
