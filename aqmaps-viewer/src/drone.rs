use macroquad::prelude::*;

#[derive(Debug, Clone)]
pub struct DroneDrawConfig {
    pub radius: f32,              // inner radius before stroke, in move lengths
    pub stroke_ratio: f32,        // stroke width as a fraction of radius
    pub line_start_ratio: f32,    // where the line begins, fraction of radius
    pub line_length_ratio: f32,   // line length as a fraction of radius
    pub line_thickness_ratio: f32, // line thickness as a fraction of radius
    pub stroke_color: Color,
    pub fill_color: Color,
}

impl Default for DroneDrawConfig {
    fn default() -> Self {
        Self {
            radius: 0.4,
            stroke_ratio: 0.4,
            line_start_ratio: 1.0 / 3.0,
            line_length_ratio: 2.0 / 3.0,
            line_thickness_ratio: 0.4,
            stroke_color: BLACK,
            fill_color: WHITE,
        }
    }
}

/// Screen-space unit vector for a compass heading; screen y grows downwards.
pub fn screen_direction(heading_degrees: u16) -> Vec2 {
    let radians = f32::from(heading_degrees).to_radians();
    vec2(radians.cos(), -radians.sin())
}

/// Stroked circle with a heading line, scaled so `radius` is in move lengths.
pub fn draw_drone(heading_degrees: u16, center: Vec2, scale: f32, config: &DroneDrawConfig) {
    let radius = config.radius * scale;
    let stroke = (radius * config.stroke_ratio).max(1.0);
    let direction = screen_direction(heading_degrees);

    draw_circle(center.x, center.y, radius + stroke * 0.5, config.stroke_color);
    let inner = radius - stroke * 0.5;
    if inner > 0.0 {
        draw_circle(center.x, center.y, inner, config.fill_color);
    }

    let start = center + direction * (radius * config.line_start_ratio);
    let end = start + direction * (radius * config.line_length_ratio);
    let thickness = (radius * config.line_thickness_ratio).max(1.0);
    draw_line(start.x, start.y, end.x, end.y, thickness, config.stroke_color);
    for cap in [start, end] {
        draw_circle(cap.x, cap.y, thickness * 0.5, config.stroke_color);
    }
}
