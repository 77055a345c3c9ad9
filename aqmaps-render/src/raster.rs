use image::{Rgba, RgbaImage};

use crate::heatmap::PredictionGrid;
use crate::layout::{GRID_SIZE, cell_position_for_index};
use crate::linecast::supercover_line;
use crate::palette::{MarkerStyle, Rgb, band_color};
use aqmaps_core::{Confinement, Coordinate, MissionReport};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OBSTACLE_EDGE: Rgba<u8> = Rgba([60, 60, 60, 255]);
const PATH: Rgba<u8> = Rgba([30, 90, 220, 255]);
const START: Rgba<u8> = Rgba([220, 0, 180, 255]);
const UNCOLOURED: Rgba<u8> = Rgba([255, 255, 255, 0]);
const HEATMAP_ALPHA: u8 = 191;

fn rgb_to_rgba(color: Rgb, alpha: u8) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, alpha])
}

fn put_pixel_clipped(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}

fn fill_rect(image: &mut RgbaImage, start_x: i32, start_y: i32, width: u32, height: u32, color: Rgba<u8>) {
    for dy in 0..height as i32 {
        for dx in 0..width as i32 {
            put_pixel_clipped(image, start_x + dx, start_y + dy, color);
        }
    }
}

fn draw_line(image: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    supercover_line(from, to, |x, y| put_pixel_clipped(image, x, y, color));
}

/// Maps the confinement zone onto an image, north up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelFrame {
    pub confinement: Confinement,
    pub width: u32,
    pub height: u32,
}

impl PixelFrame {
    /// Keeps the zone's aspect ratio for the given pixel width.
    pub fn fit_width(confinement: Confinement, width: u32) -> Self {
        let aspect = confinement.height() / confinement.width();
        let height = ((f64::from(width) * aspect).round() as u32).max(1);
        Self {
            confinement,
            width: width.max(1),
            height,
        }
    }

    pub fn to_pixel(&self, point: Coordinate) -> (i32, i32) {
        let fx = (point.lng - self.confinement.min_lng) / self.confinement.width();
        let fy = (self.confinement.max_lat - point.lat) / self.confinement.height();
        let x = (fx * f64::from(self.width - 1)).round() as i32;
        let y = (fy * f64::from(self.height - 1)).round() as i32;
        (x, y)
    }
}

/// One square of `cell_pixels` per prediction, coloured by reading band.
pub fn heatmap_image(grid: &PredictionGrid, cell_pixels: u32) -> RgbaImage {
    let cell_pixels = cell_pixels.max(1);
    let side = GRID_SIZE as u32 * cell_pixels;
    let mut image = RgbaImage::new(side, side);

    for (index, value) in grid.iter().enumerate() {
        let cell = cell_position_for_index(index);
        let color = band_color(f64::from(value))
            .map(|rgb| rgb_to_rgba(rgb, HEATMAP_ALPHA))
            .unwrap_or(UNCOLOURED);
        fill_rect(
            &mut image,
            (cell.column as u32 * cell_pixels) as i32,
            (cell.row as u32 * cell_pixels) as i32,
            cell_pixels,
            cell_pixels,
            color,
        );
    }

    image
}

/// No-fly zone outlines, the flight path and a square per sensor.
pub fn flight_map_image(report: &MissionReport, width: u32) -> RgbaImage {
    let frame = PixelFrame::fit_width(report.airspace.confinement, width);
    let mut image = RgbaImage::from_pixel(frame.width, frame.height, BACKGROUND);
    let marker = (frame.width / 120).max(3);
    let half = (marker / 2) as i32;

    for obstacle in &report.airspace.obstacles {
        for (from, to) in obstacle.edges() {
            draw_line(&mut image, frame.to_pixel(from), frame.to_pixel(to), OBSTACLE_EDGE);
        }
    }

    for pair in report.path.windows(2) {
        draw_line(&mut image, frame.to_pixel(pair[0]), frame.to_pixel(pair[1]), PATH);
    }

    let sensors = report
        .visited
        .iter()
        .map(|waypoint| (waypoint, MarkerStyle::for_visited(waypoint)))
        .chain(report.pending.iter().map(|waypoint| (waypoint, MarkerStyle::unvisited())));
    for (waypoint, style) in sensors {
        let Some(color) = style.color else {
            continue;
        };
        let (x, y) = frame.to_pixel(waypoint.position);
        fill_rect(&mut image, x - half, y - half, marker, marker, rgb_to_rgba(color, 255));
    }

    let (x, y) = frame.to_pixel(report.start);
    fill_rect(&mut image, x - half, y - half, marker, marker, START);

    image
}
