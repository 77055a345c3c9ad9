use crate::palette::MarkerStyle;
use aqmaps_core::{Coordinate, MissionReport, Waypoint};
use serde_json::{Map, Value, json};

pub const MARKER_SIZE: &str = "medium";

/// GeoJSON position order is `[lng, lat]`.
pub fn ring_coordinates(points: &[Coordinate]) -> Vec<[f64; 2]> {
    points.iter().map(|point| [point.lng, point.lat]).collect()
}

fn sensor_feature(waypoint: &Waypoint, style: MarkerStyle) -> Value {
    let color = style.color.map(|rgb| rgb.hex()).unwrap_or_default();

    let mut properties = Map::new();
    properties.insert("marker-size".into(), MARKER_SIZE.into());
    properties.insert("location".into(), waypoint.location.clone().into());
    properties.insert("rgb-string".into(), color.clone().into());
    properties.insert("marker-color".into(), color.into());
    if let Some(symbol) = style.symbol {
        properties.insert("marker-symbol".into(), symbol.as_str().into());
    }

    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Point",
            "coordinates": [waypoint.position.lng, waypoint.position.lat],
        },
    })
}

/// Every sensor of the mission as a styled marker, plus the flight path.
pub fn readings_collection(report: &MissionReport) -> Value {
    let visited = report
        .visited
        .iter()
        .map(|waypoint| sensor_feature(waypoint, MarkerStyle::for_visited(waypoint)));
    let pending = report
        .pending
        .iter()
        .map(|waypoint| sensor_feature(waypoint, MarkerStyle::unvisited()));

    let mut features: Vec<Value> = visited.chain(pending).collect();
    features.push(json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "LineString",
            "coordinates": ring_coordinates(&report.path),
        },
    }));

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
