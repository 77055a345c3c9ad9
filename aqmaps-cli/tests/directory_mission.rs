use aqmaps_cli::{
    AppConfig, AppError, DirectorySource, MissionDate, MissionRequest, load_mission_data,
    run_mission, summary,
};
use aqmaps_core::{Confinement, Coordinate, MissionReport, Termination};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

const STEP: f64 = 0.0007;

fn write(root: &Path, relative: &str, value: &Value) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn centre() -> Coordinate {
    Confinement::default().center()
}

/// Three sensors north and east of the centre and one building in the
/// far south-west corner.
fn build_mirror(root: &Path) {
    write(
        root,
        "maps/2020/06/15/air-quality-data.json",
        &json!([
            {"location": "east.side.sensor", "battery": 93.1, "reading": "40.2"},
            {"location": "north.east.sensor", "battery": 4.0, "reading": "200.0"},
            {"location": "north.side.sensor", "battery": 70.0, "reading": "null"},
        ]),
    );

    let positions = [
        ("east/side/sensor", centre().offset(STEP, 0.0)),
        ("north/east/sensor", centre().offset(STEP, STEP)),
        ("north/side/sensor", centre().offset(0.0, STEP + 0.0001)),
    ];
    for (words, position) in positions {
        write(
            root,
            &format!("words/{words}/details.json"),
            &json!({
                "words": words.replace('/', "."),
                "coordinates": {"lng": position.lng, "lat": position.lat},
            }),
        );
    }

    let corner = Confinement::default().corners()[3];
    let building: Vec<[f64; 2]> = [(0.0002, 0.0002), (0.0008, 0.0002), (0.0008, 0.0008), (0.0002, 0.0002)]
        .iter()
        .map(|&(d_lng, d_lat)| {
            let point = corner.offset(d_lng, d_lat);
            [point.lng, point.lat]
        })
        .collect();
    write(
        root,
        "buildings/no-fly-zones.geojson",
        &json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "Corner Building"},
                "geometry": {"type": "Polygon", "coordinates": [building]},
            }],
        }),
    );
}

fn request() -> MissionRequest {
    MissionRequest {
        date: MissionDate::new(15, 6, 2020).unwrap(),
        start: centre(),
        seed: 5678,
    }
}

#[test]
fn mission_from_local_mirror_writes_all_outputs() {
    let data_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    build_mirror(data_dir.path());

    let mut config = AppConfig::default();
    config.output.dir = output_dir.path().to_path_buf();
    config.output.png = true;
    config.output.png_width = 300;

    let source = DirectorySource::new(data_dir.path());
    let (report, paths) = run_mission(&source, &request(), &config).unwrap();

    assert_eq!(report.outcome.termination, Termination::Returned);
    assert!(report.outcome.is_success());
    assert_eq!(summary(&report), "0 of 3 sensors unvisited, 8 moves used, returned to start");

    assert!(paths.readings.ends_with("readings-15-06-2020.geojson"));
    assert!(paths.flightpath.ends_with("flightpath-15-06-2020.txt"));

    let log = fs::read_to_string(&paths.flightpath).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), report.steps.len());
    assert!(lines[1].starts_with("2,"));
    assert!(lines[1].ends_with(",east.side.sensor"));
    assert!(lines[0].ends_with(",null"));

    let readings: Value = serde_json::from_str(&fs::read_to_string(&paths.readings).unwrap()).unwrap();
    let features = readings["features"].as_array().unwrap();
    assert_eq!(features.len(), 4);
    let flat = features
        .iter()
        .find(|feature| feature["properties"]["location"] == "north.east.sensor")
        .unwrap();
    assert_eq!(flat["properties"]["marker-symbol"], "cross");

    let stored = MissionReport::from_json(&fs::read_to_string(&paths.report).unwrap()).unwrap();
    assert_eq!(stored, report);
    assert_eq!(stored.airspace.obstacles[0].name.as_deref(), Some("Corner Building"));

    let flight_map = paths.flight_map.expect("png requested");
    assert!(fs::metadata(flight_map).unwrap().len() > 0);
}

#[test]
fn readings_are_resolved_from_strings() {
    let data_dir = tempfile::tempdir().unwrap();
    build_mirror(data_dir.path());

    let data = load_mission_data(&DirectorySource::new(data_dir.path()), &request().date).unwrap();
    let readings: Vec<Option<f64>> = data.waypoints.iter().map(|w| w.reading).collect();
    assert_eq!(readings, [Some(40.2), Some(200.0), None]);
    assert_eq!(data.obstacles.len(), 1);
}

#[test]
fn missing_day_is_reported() {
    let data_dir = tempfile::tempdir().unwrap();
    build_mirror(data_dir.path());

    let other_day = MissionDate::new(16, 6, 2020).unwrap();
    let err = load_mission_data(&DirectorySource::new(data_dir.path()), &other_day).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
