use ballistic_rust::core::analytical::{flight_time, max_height, max_range};
use ballistic_rust::core::{Prediction, ProjectileState, SolverMode};
use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::controls::phase_text;
use crate::render::{PlotArea, draw_ui_text};
use crate::state::AppRuntime;

pub(crate) fn draw_hud(
    state: &AppRuntime,
    prediction: Option<&Prediction>,
    area: &PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_header_block(state, area, font);
    draw_theory_block(state, prediction, area, screen_h, font);
    if let Some(flight) = &state.flight {
        draw_flight_block(state, flight, area, screen_h, font);
        if let Some(range) = flight.range_m() {
            draw_range_label(area, range, font);
        }
    }
}

fn draw_header_block(state: &AppRuntime, area: &PlotArea, font: Option<&Font>) {
    draw_ui_text(
        "BallisticRust - Projectile Motion With Air Resistance",
        area.left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        &format!(
            "Space launch | R reset | edit settings while aiming | {} | {}",
            phase_text(state.flight.as_ref().map(ProjectileState::phase)),
            state.status_line
        ),
        area.left + 12.0,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn draw_theory_block(
    state: &AppRuntime,
    prediction: Option<&Prediction>,
    area: &PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    let params = state.controls.params();
    let (v0, angle, g) = (params.speed_mps, params.angle_deg, params.gravity_mps2);
    let preview = match prediction {
        Some(p) if p.landed => format!("{:.2} m", p.range_m),
        Some(_) => "beyond horizon".to_string(),
        None => "-".to_string(),
    };
    draw_ui_text(
        &format!(
            "Theory (no resistance) -> range {:.2} m, height {:.2} m, flight {:.2} s | Preview range {}",
            max_range(v0, angle, g),
            max_height(v0, angle, g),
            flight_time(v0, angle, g),
            preview
        ),
        area.left,
        screen_h - 76.0,
        18,
        DARKGRAY,
        font,
    );
}

fn draw_flight_block(
    state: &AppRuntime,
    flight: &ProjectileState,
    area: &PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    let s = flight.state();
    let mode = match flight.solver_mode() {
        SolverMode::Analytical => "closed form",
        SolverMode::Numerical => "Euler",
    };
    draw_ui_text(
        &format!(
            "t = {:.2} s | x = {:.2} m | y = {:.2} m | v = {:.2} m/s at {:.1} deg",
            flight.time_s(),
            s.x,
            s.y,
            flight.speed(),
            flight.velocity_angle_deg()
        ),
        area.left,
        screen_h - 45.0,
        24,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        &format!(
            "Max height {:.2} m | Range {} | Solver {} | Playback x{:.2}",
            flight.max_height_m(),
            flight
                .range_m()
                .map_or_else(|| "-".to_string(), |r| format!("{r:.2} m")),
            mode,
            state.sim_speed
        ),
        area.left,
        screen_h - 14.0,
        20,
        BLUE,
        font,
    );
}

fn draw_range_label(area: &PlotArea, range_m: f64, font: Option<&Font>) {
    let label = format!("{range_m:.2} m");
    let size = measure_text(&label, font, 18, 1.0);
    let landing = area.to_screen((range_m, 0.0));
    let x = (landing.x - (size.width * 0.5)).clamp(area.left + 4.0, area.right - size.width - 4.0);
    let y = (area.bottom - 12.0).max(area.top + 20.0);
    draw_ui_text(&label, x, y, 18, DARKGRAY, font);
}
