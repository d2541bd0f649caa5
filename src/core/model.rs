use serde::{Deserialize, Serialize};

use crate::core::error::{SimError, SimResult};

/// Position (m) and velocity (m/s) in the launch frame: origin at the launch
/// point, +x downrange, +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl KinematicState {
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Launch parameters; fixed for the lifetime of a flight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub mass_kg: f64,
    pub diameter_m: f64,
    pub gravity_mps2: f64,
    pub drag_enabled: bool,
    #[serde(default)]
    pub wind_speed_mps: f64,
}

impl Default for BodyParameters {
    fn default() -> Self {
        // Regulation baseball thrown on Earth.
        Self {
            speed_mps: 20.0,
            angle_deg: 45.0,
            mass_kg: 0.145,
            diameter_m: 0.074,
            gravity_mps2: 9.81,
            drag_enabled: false,
            wind_speed_mps: 0.0,
        }
    }
}

impl BodyParameters {
    pub fn validate(&self) -> SimResult<()> {
        let finite = [
            ("speed", self.speed_mps),
            ("angle", self.angle_deg),
            ("mass", self.mass_kg),
            ("diameter", self.diameter_m),
            ("gravity", self.gravity_mps2),
            ("wind speed", self.wind_speed_mps),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(name, value, "must be a finite number"));
            }
        }

        if self.speed_mps <= 0.0 {
            return Err(invalid("speed", self.speed_mps, "must be greater than zero"));
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(invalid(
                "angle",
                self.angle_deg,
                "must be between 0 and 90 degrees",
            ));
        }

        let positive = [
            ("mass", self.mass_kg),
            ("diameter", self.diameter_m),
            ("gravity", self.gravity_mps2),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(invalid(name, value, "must be greater than zero"));
            }
        }

        Ok(())
    }

    pub fn resistance_active(&self) -> bool {
        self.drag_enabled || self.wind_speed_mps != 0.0
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> SimError {
    SimError::InvalidParameter {
        name,
        value,
        reason,
    }
}

/// How a flight advances from one tick to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverMode {
    /// Closed-form kinematics evaluated at the elapsed time.
    Analytical,
    /// Forward Euler over the full force model.
    Numerical,
}

impl SolverMode {
    pub fn for_params(params: &BodyParameters) -> Self {
        if params.resistance_active() {
            Self::Numerical
        } else {
            Self::Analytical
        }
    }
}
