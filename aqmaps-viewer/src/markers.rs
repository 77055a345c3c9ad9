use aqmaps_render::{MarkerSymbol, Rgb};
use macroquad::prelude::{
    Color, Vec2, WHITE, draw_circle, draw_circle_lines, draw_line, draw_poly,
};
use std::f32::consts::FRAC_PI_4;

pub const START_COLOR: Color = Color::from_rgba(0, 53, 146, 255);
pub const OUTLINE_COLOR: Color = Color::from_rgba(40, 40, 40, 255);

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Diamond marking where the flight starts and should end.
pub fn draw_start_marker(center: Vec2, size: f32) {
    let radius = (size * 0.5).max(1.0);
    draw_poly(center.x, center.y, 4, radius, FRAC_PI_4, START_COLOR);
}

pub fn draw_sensor(center: Vec2, radius: f32, color: Color, symbol: Option<MarkerSymbol>) {
    draw_circle(center.x, center.y, radius, color);
    draw_circle_lines(center.x, center.y, radius, 1.0, OUTLINE_COLOR);

    if symbol == Some(MarkerSymbol::Cross) {
        let arm = radius * 0.6;
        draw_line(center.x - arm, center.y - arm, center.x + arm, center.y + arm, 2.0, WHITE);
        draw_line(center.x - arm, center.y + arm, center.x + arm, center.y - arm, 2.0, WHITE);
    }
}
