use ballistic_rust::core::{BodyParameters, CelestialBody, ProjectileState, SimConfig};
use tracing::warn;

/// Slider-backed launch settings. macroquad sliders edit `f32`.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct LaunchControls {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) mass_kg: f32,
    pub(crate) diameter_m: f32,
    pub(crate) wind_mps: f32,
    pub(crate) drag_enabled: bool,
    pub(crate) body: CelestialBody,
}

impl LaunchControls {
    fn new() -> Self {
        let defaults = BodyParameters::default();
        Self {
            speed_mps: defaults.speed_mps as f32,
            angle_deg: defaults.angle_deg as f32,
            mass_kg: defaults.mass_kg as f32,
            diameter_m: defaults.diameter_m as f32,
            wind_mps: 0.0,
            drag_enabled: true,
            body: CelestialBody::Earth,
        }
    }

    pub(crate) fn params(&self) -> BodyParameters {
        BodyParameters {
            speed_mps: f64::from(self.speed_mps),
            angle_deg: f64::from(self.angle_deg),
            mass_kg: f64::from(self.mass_kg),
            diameter_m: f64::from(self.diameter_m),
            gravity_mps2: self.body.gravity_mps2(),
            drag_enabled: self.drag_enabled,
            wind_speed_mps: f64::from(self.wind_mps),
        }
    }

    pub(crate) fn config(&self) -> SimConfig {
        SimConfig::for_body(self.body)
    }
}

pub(crate) struct AppRuntime {
    pub(crate) controls: LaunchControls,
    pub(crate) flight: Option<ProjectileState>,
    pub(crate) show_preview: bool,
    pub(crate) sim_speed: f32,
    pub(crate) tick_backlog_s: f32,
    pub(crate) status_line: String,
    applied: Option<LaunchControls>,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let mut state = Self {
            controls: LaunchControls::new(),
            flight: None,
            show_preview: true,
            sim_speed: 1.0,
            tick_backlog_s: 0.0,
            status_line: "Ready".to_string(),
            applied: None,
        };
        state.sync_controls();
        state
    }

    pub(crate) fn is_flying(&self) -> bool {
        self.flight.as_ref().is_some_and(ProjectileState::is_flying)
    }

    /// Rebuilds the idle flight when the controls changed since it was made.
    pub(crate) fn sync_controls(&mut self) {
        if self.is_flying() || self.applied == Some(self.controls) {
            return;
        }

        self.applied = Some(self.controls);
        match ProjectileState::new(self.controls.params(), self.controls.config()) {
            Ok(flight) => self.flight = Some(flight),
            Err(err) => {
                warn!(%err, "launch settings rejected");
                self.flight = None;
                self.status_line = err.to_string();
            }
        }
    }

    pub(crate) fn launch(&mut self) {
        self.sync_controls();
        self.tick_backlog_s = 0.0;
        if let Some(flight) = self.flight.as_mut() {
            flight.launch();
            self.status_line = "Shot launched".to_string();
        }
    }

    pub(crate) fn reset(&mut self) {
        if let Some(flight) = self.flight.as_mut() {
            flight.reset();
        }
        self.tick_backlog_s = 0.0;
        self.status_line = "Reset".to_string();
    }

    pub(crate) fn select_body(&mut self, body: CelestialBody) {
        if self.is_flying() {
            return;
        }
        self.controls.body = body;
        self.status_line = format!("Switched to {}", body.name());
    }
}
