use aqmaps_core::{Confinement, Coordinate, MissionReport, Termination};
use aqmaps_render::MarkerStyle;
use macroquad::prelude::*;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;

use crate::drone::{DroneDrawConfig, draw_drone};
use crate::markers::{draw_sensor, draw_start_marker, to_color};

mod drone;
mod markers;

pub const DEFAULT_REPORT_PATH: &str = "report.json";

const STEP_SECONDS: f32 = 0.2;
const VIEW_MARGIN_PX: f32 = 24.0;
const HUD_HEIGHT_PX: f32 = 56.0;
const SENSOR_RADIUS_PX: f32 = 6.0;
const START_MARKER_PX: f32 = 14.0;

const BACKGROUND: Color = Color::from_rgba(242, 242, 236, 255);
const ZONE_BORDER: Color = Color::from_rgba(90, 90, 90, 255);
const NO_FLY_EDGE: Color = Color::from_rgba(200, 40, 40, 255);
const PATH_AHEAD: Color = Color::from_rgba(30, 90, 220, 50);
const PATH_FLOWN: Color = Color::from_rgba(30, 90, 220, 255);
const HUD_TEXT: Color = Color::from_rgba(20, 20, 20, 255);

pub fn load_report(path: &Path) -> Result<MissionReport, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(MissionReport::from_json(&json)?)
}

/// Maps coordinates into a screen rectangle, keeping the aspect ratio and
/// putting north at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    min_lng: f64,
    max_lat: f64,
    scale: f32,
    offset: Vec2,
}

impl ViewTransform {
    pub fn fit(confinement: &Confinement, area: Rect) -> Self {
        let width = confinement.width() as f32;
        let height = confinement.height() as f32;
        let scale = (area.w / width).min(area.h / height);
        let offset = vec2(
            area.x + (area.w - width * scale) * 0.5,
            area.y + (area.h - height * scale) * 0.5,
        );

        Self {
            min_lng: confinement.min_lng,
            max_lat: confinement.max_lat,
            scale,
            offset,
        }
    }

    /// Pixels per degree.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, point: Coordinate) -> Vec2 {
        // Subtract in f64 first; the absolute coordinates do not fit f32 precision.
        let dx = (point.lng - self.min_lng) as f32;
        let dy = (self.max_lat - point.lat) as f32;
        self.offset + vec2(dx, dy) * self.scale
    }
}

/// Reveals one recorded step per fixed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    total: usize,
    shown: usize,
    accumulator: f32,
    step_seconds: f32,
    paused: bool,
}

impl Playback {
    pub fn new(total: usize, step_seconds: f32) -> Self {
        Self {
            total,
            shown: 0,
            accumulator: 0.0,
            step_seconds: step_seconds.max(f32::EPSILON),
            paused: false,
        }
    }

    pub fn advance(&mut self, delta_seconds: f32) {
        if self.paused || self.is_finished() {
            return;
        }

        self.accumulator += delta_seconds;
        while self.accumulator >= self.step_seconds && self.shown < self.total {
            self.shown += 1;
            self.accumulator -= self.step_seconds;
        }
        if self.is_finished() {
            self.accumulator = 0.0;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn restart(&mut self) {
        self.shown = 0;
        self.accumulator = 0.0;
        self.paused = false;
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.total
    }
}

/// Locations visited within the first `shown` steps.
pub fn visited_after(report: &MissionReport, shown: usize) -> HashSet<&str> {
    report
        .steps
        .iter()
        .take(shown)
        .flat_map(|step| step.visited.iter().map(String::as_str))
        .collect()
}

/// Position after `shown` steps and the heading of the last of them.
pub fn drone_pose(report: &MissionReport, shown: usize) -> (Coordinate, Option<u16>) {
    let position = report.path.get(shown).copied().unwrap_or(report.start);
    let heading = shown
        .checked_sub(1)
        .and_then(|index| report.steps.get(index))
        .map(|step| step.heading.degrees());
    (position, heading)
}

pub fn status_line(report: &MissionReport, playback: &Playback) -> String {
    let mut line = format!(
        "step {}/{}  visited {}/{}",
        playback.shown(),
        report.steps.len(),
        visited_after(report, playback.shown()).len(),
        report.waypoint_count(),
    );
    if playback.is_paused() {
        line.push_str("  [paused]");
    } else if playback.is_finished() {
        line.push_str("  ");
        line.push_str(&outcome_text(report));
    }
    line
}

fn outcome_text(report: &MissionReport) -> String {
    match &report.outcome.termination {
        Termination::Returned => "returned to start".to_string(),
        Termination::BudgetExhausted => "move budget exhausted".to_string(),
        Termination::Stranded { error } => format!("stranded: {}", error),
    }
}

struct ViewerState {
    report: MissionReport,
    playback: Playback,
    drone_config: DroneDrawConfig,
}

impl ViewerState {
    fn new(report: MissionReport) -> Self {
        let playback = Playback::new(report.steps.len(), STEP_SECONDS);
        Self {
            report,
            playback,
            drone_config: DroneDrawConfig::default(),
        }
    }

    fn handle_input(&mut self) {
        if is_key_pressed(KeyCode::Space) {
            self.playback.toggle_pause();
        }
        if is_key_pressed(KeyCode::R) {
            self.playback.restart();
        }
    }

    fn view(&self) -> ViewTransform {
        let area = Rect::new(
            VIEW_MARGIN_PX,
            VIEW_MARGIN_PX + HUD_HEIGHT_PX,
            (screen_width() - 2.0 * VIEW_MARGIN_PX).max(1.0),
            (screen_height() - 2.0 * VIEW_MARGIN_PX - HUD_HEIGHT_PX).max(1.0),
        );
        ViewTransform::fit(&self.report.airspace.confinement, area)
    }

    fn render(&self) {
        clear_background(BACKGROUND);
        let view = self.view();
        let shown = self.playback.shown();

        let corners = self.report.airspace.confinement.corners();
        draw_polyline(&view, &[corners[0], corners[1], corners[2], corners[3], corners[0]], 2.0, ZONE_BORDER);

        for obstacle in &self.report.airspace.obstacles {
            draw_polyline(&view, obstacle.boundary(), 2.0, NO_FLY_EDGE);
        }

        draw_polyline(&view, &self.report.path, 1.5, PATH_AHEAD);
        let flown = &self.report.path[..(shown + 1).min(self.report.path.len())];
        draw_polyline(&view, flown, 2.5, PATH_FLOWN);

        let visited = visited_after(&self.report, shown);
        for waypoint in self.report.visited.iter().chain(&self.report.pending) {
            let style = if visited.contains(waypoint.location.as_str()) {
                MarkerStyle::for_visited(waypoint)
            } else {
                MarkerStyle::unvisited()
            };
            let color = style.color.map_or(LIGHTGRAY, to_color);
            draw_sensor(view.to_screen(waypoint.position), SENSOR_RADIUS_PX, color, style.symbol);
        }

        draw_start_marker(view.to_screen(self.report.start), START_MARKER_PX);

        let (position, heading) = drone_pose(&self.report, shown);
        let move_length_px = (aqmaps_core::MOVE_LENGTH as f32 * view.scale()).max(8.0);
        draw_drone(
            heading.unwrap_or(0),
            view.to_screen(position),
            move_length_px,
            &self.drone_config,
        );

        draw_text(&status_line(&self.report, &self.playback), 20.0, 32.0, 24.0, HUD_TEXT);
        draw_text("space: pause   r: restart", 20.0, 56.0, 18.0, HUD_TEXT);
    }
}

fn draw_polyline(view: &ViewTransform, points: &[Coordinate], thickness: f32, color: Color) {
    for pair in points.windows(2) {
        let from = view.to_screen(pair[0]);
        let to = view.to_screen(pair[1]);
        draw_line(from.x, from.y, to.x, to.y, thickness, color);
    }
}

pub async fn run(report: MissionReport) {
    let mut viewer = ViewerState::new(report);

    loop {
        viewer.handle_input();
        viewer.playback.advance(get_frame_time());
        viewer.render();

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqmaps_core::{Controller, SimulationConfig, Waypoint};
    use fastrand::Rng;

    fn report() -> MissionReport {
        let centre = Confinement::default().center();
        Controller::new(
            centre,
            vec![
                Waypoint::at("a", centre.offset(0.0006, 0.0)),
                Waypoint::at("b", centre.offset(0.0006, 0.0009)),
            ],
            Vec::new(),
            &SimulationConfig::default(),
            Rng::with_seed(4),
        )
        .run()
    }

    #[test]
    fn view_fits_and_keeps_north_up() {
        let zone = Confinement::new(0.0, 2.0, 0.0, 1.0);
        let view = ViewTransform::fit(&zone, Rect::new(0.0, 0.0, 400.0, 400.0));

        assert_eq!(view.scale(), 200.0);
        assert_eq!(view.to_screen(Coordinate::new(0.0, 1.0)), vec2(0.0, 100.0));
        assert_eq!(view.to_screen(Coordinate::new(2.0, 0.0)), vec2(400.0, 300.0));
    }

    #[test]
    fn playback_reveals_steps_at_fixed_interval() {
        let mut playback = Playback::new(3, 0.5);
        playback.advance(0.4);
        assert_eq!(playback.shown(), 0);
        playback.advance(0.2);
        assert_eq!(playback.shown(), 1);
        playback.advance(5.0);
        assert_eq!(playback.shown(), 3);
        assert!(playback.is_finished());
    }

    #[test]
    fn pause_and_restart() {
        let mut playback = Playback::new(4, 0.25);
        playback.advance(0.5);
        assert_eq!(playback.shown(), 2);

        playback.toggle_pause();
        playback.advance(1.0);
        assert_eq!(playback.shown(), 2);

        playback.restart();
        assert_eq!(playback.shown(), 0);
        assert!(!playback.is_paused());
    }

    #[test]
    fn pose_and_visits_follow_playback() {
        let report = report();
        assert!(visited_after(&report, 0).is_empty());
        assert_eq!(drone_pose(&report, 0), (report.start, None));

        let all = visited_after(&report, report.steps.len());
        assert_eq!(all.len(), report.visited.len());

        let (position, heading) = drone_pose(&report, 1);
        assert_eq!(position, report.path[1]);
        assert_eq!(heading, Some(report.steps[0].heading.degrees()));
    }

    #[test]
    fn status_mentions_pause_and_outcome() {
        let report = report();
        let mut playback = Playback::new(report.steps.len(), 0.1);
        assert!(status_line(&report, &playback).starts_with("step 0/"));

        playback.toggle_pause();
        assert!(status_line(&report, &playback).ends_with("[paused]"));

        playback.toggle_pause();
        playback.advance(1000.0);
        assert!(status_line(&report, &playback).ends_with("returned to start"));
    }
}
