use ballistic_rust::core::{CelestialBody, FlightPhase};
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let mut picked_body = None;
    let controls = &mut state.controls;

    widgets::Window::new(hash!(), vec2(18.0, 110.0), vec2(370.0, 400.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.label(
                None,
                &format!(
                    "Body: {} | g = {:.2} m/s^2",
                    controls.body.name(),
                    controls.body.gravity_mps2()
                ),
            );
            for body in CelestialBody::ALL {
                if ui.button(None, body.name()) {
                    picked_body = Some(body);
                }
            }
            ui.separator();
            ui.slider(hash!(), "Velocity (m/s)", 1.0..80.0, &mut controls.speed_mps);
            ui.slider(hash!(), "Angle (deg)", 0.0..90.0, &mut controls.angle_deg);
            ui.slider(hash!(), "Mass (kg)", 0.01..10.0, &mut controls.mass_kg);
            ui.slider(hash!(), "Diameter (m)", 0.01..1.0, &mut controls.diameter_m);
            ui.slider(hash!(), "Wind (m/s)", -20.0..20.0, &mut controls.wind_mps);
            ui.checkbox(hash!(), "Air drag", &mut controls.drag_enabled);
            ui.slider(hash!(), "Playback speed", 0.25..4.0, &mut state.sim_speed);
            ui.separator();
            if ui.button(None, "Launch (Space)") {
                actions.launch = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Toggle Preview") {
                state.show_preview = !state.show_preview;
            }
        });

    if let Some(body) = picked_body {
        state.select_body(body);
    }
    actions
}

pub(crate) fn phase_text(phase: Option<FlightPhase>) -> &'static str {
    match phase {
        None => "Invalid settings",
        Some(FlightPhase::Idle) => "Aiming",
        Some(FlightPhase::Flying) => "Flying",
        Some(FlightPhase::Landed) => "Landed",
    }
}
