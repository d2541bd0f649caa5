use macroquad::prelude::*;

use crate::constants::{X_GRID_LINES, Y_GRID_LINES};

/// Screen rectangle of the chart plus the world extents it shows.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl PlotArea {
    pub(crate) fn to_screen(&self, world: (f64, f64)) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (world.0 as f32 / self.world_max_x.max(1.0)) * plot_w;
        let y = self.bottom - (world.1 as f32 / self.world_max_y.max(1.0)) * plot_h;
        vec2(x, y)
    }
}

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_axes(area: &PlotArea, grid_color: Color, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, grid_color);

        let label = format_axis_value(t * area.world_max_x, area.world_max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, grid_color);

        let label = format_axis_value(t * area.world_max_y, area.world_max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
    draw_ui_text(
        "Distance (m)",
        area.right - 130.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_path(area: &PlotArea, points: &[(f64, f64)], thickness: f32, color: Color) {
    for pair in points.windows(2) {
        let a = area.to_screen(pair[0]);
        let b = area.to_screen(pair[1]);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

pub(crate) fn draw_projectile(area: &PlotArea, position: (f64, f64), radius_px: f32) {
    let p = area.to_screen(position);
    draw_circle(p.x, p.y, radius_px, RED);
    draw_circle_lines(p.x, p.y, radius_px, 2.0, MAROON);
}

/// Short arrow along the current velocity; length scales with speed.
pub(crate) fn draw_velocity_arrow(
    area: &PlotArea,
    position: (f64, f64),
    angle_rad: f64,
    speed: f64,
) {
    let start = area.to_screen(position);
    let length = (speed as f32 * 2.0).clamp(12.0, 80.0);
    let dir = vec2(angle_rad.cos() as f32, -(angle_rad.sin() as f32));
    let end = start + dir * length;
    draw_line(start.x, start.y, end.x, end.y, 2.0, Color::from_rgba(37, 99, 235, 220));
}
