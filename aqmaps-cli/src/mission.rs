use crate::config::{AppConfig, OutputConfig};
use crate::date::MissionDate;
use crate::error::Result;
use crate::parse::{parse_details, parse_no_fly_zones, parse_sensors};
use crate::source::{MapSource, NO_FLY_ZONES_PATH, details_path, sensors_path};
use aqmaps_core::{Controller, Coordinate, MissionReport, Obstacle, SimulationConfig, Waypoint};
use aqmaps_render::{flight_log, readings_collection, write_json, write_text};
use fastrand::Rng;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything the command line supplies about one flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionRequest {
    pub date: MissionDate,
    pub start: Coordinate,
    pub seed: u64,
}

/// Sensors resolved to positions, and the no-fly zones.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionData {
    pub waypoints: Vec<Waypoint>,
    pub obstacles: Vec<Obstacle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub readings: PathBuf,
    pub flightpath: PathBuf,
    pub report: PathBuf,
    pub flight_map: Option<PathBuf>,
}

pub fn load_mission_data(source: &dyn MapSource, date: &MissionDate) -> Result<MissionData> {
    let sensors = parse_sensors(&source.fetch(&sensors_path(date))?)?;

    let mut waypoints = Vec::with_capacity(sensors.len());
    for sensor in &sensors {
        let position = parse_details(&source.fetch(&details_path(&sensor.location)?)?)?;
        waypoints.push(Waypoint::new(
            sensor.location.clone(),
            position,
            sensor.battery,
            sensor.reading(),
        ));
    }

    let obstacles = parse_no_fly_zones(&source.fetch(NO_FLY_ZONES_PATH)?)?;
    info!(
        sensors = waypoints.len(),
        no_fly_zones = obstacles.len(),
        %date,
        "map data loaded"
    );

    Ok(MissionData {
        waypoints,
        obstacles,
    })
}

pub fn fly(request: &MissionRequest, data: MissionData, config: &SimulationConfig) -> MissionReport {
    if !config.confinement.contains(request.start) {
        warn!(start = %request.start, "start position lies outside the confinement zone");
    }

    let controller = Controller::new(
        request.start,
        data.waypoints,
        data.obstacles,
        config,
        Rng::with_seed(request.seed),
    );
    controller.run()
}

pub fn output_paths(date: &MissionDate, output: &OutputConfig) -> OutputPaths {
    OutputPaths {
        readings: output.dir.join(format!("readings-{date}.geojson")),
        flightpath: output.dir.join(format!("flightpath-{date}.txt")),
        report: output.dir.join(format!("report-{date}.json")),
        flight_map: output
            .png
            .then(|| output.dir.join(format!("flightmap-{date}.png"))),
    }
}

pub fn write_outputs(
    report: &MissionReport,
    date: &MissionDate,
    output: &OutputConfig,
) -> Result<OutputPaths> {
    let paths = output_paths(date, output);

    write_json(&paths.readings, &readings_collection(report))?;
    write_text(&paths.flightpath, &flight_log(&report.steps))?;
    write_text(&paths.report, &report.to_json_pretty()?)?;

    if let Some(path) = &paths.flight_map {
        let image = aqmaps_render::flight_map_image(report, output.png_width);
        aqmaps_render::write_png(path, &image)?;
    }

    Ok(paths)
}

/// One line for the console: unvisited count, moves used, and whether the
/// drone made it home.
pub fn summary(report: &MissionReport) -> String {
    let outcome = &report.outcome;
    format!(
        "{} of {} sensors unvisited, {} moves used, {}",
        report.pending.len(),
        report.waypoint_count(),
        outcome.moves_used,
        if outcome.returned {
            "returned to start"
        } else {
            "did not return to start"
        }
    )
}

/// Loads the day's data, flies it and writes every output file.
pub fn run_mission(
    source: &dyn MapSource,
    request: &MissionRequest,
    config: &AppConfig,
) -> Result<(MissionReport, OutputPaths)> {
    let data = load_mission_data(source, &request.date)?;
    let report = fly(request, data, &config.simulation);
    info!(
        termination = ?report.outcome.termination,
        moves = report.outcome.moves_used,
        "flight finished"
    );

    let paths = write_outputs(&report, &request.date, &config.output)?;
    Ok((report, paths))
}
