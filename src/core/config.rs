use serde::{Deserialize, Serialize};

use crate::core::error::{SimError, SimResult};

pub const AIR_DENSITY_KG_M3: f64 = 1.225;
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;
pub const TICK_S: f64 = 0.016;
pub const TRAJECTORY_CAPACITY: usize = 500;
pub const PREDICTION_STEP_S: f64 = 0.05;
pub const PREDICTION_MAX_TIME_S: f64 = 30.0;

// Fraction of a tick used when no explicit landing guard is configured.
const LANDING_GUARD_TICK_FRACTION: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Earth,
    Moon,
    Mars,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 3] = [Self::Earth, Self::Moon, Self::Mars];

    pub fn name(self) -> &'static str {
        match self {
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
        }
    }

    pub fn gravity_mps2(self) -> f64 {
        match self {
            Self::Earth => 9.81,
            Self::Moon => 1.62,
            Self::Mars => 3.71,
        }
    }

    pub fn air_density_kg_m3(self) -> f64 {
        match self {
            Self::Earth => AIR_DENSITY_KG_M3,
            Self::Moon => 0.0,
            Self::Mars => 0.020,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Numerical constants for one simulation run.
///
/// Nothing in the core reads module-level state; every force, tick and cap
/// comes from the config handed to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub air_density_kg_m3: f64,
    pub drag_coefficient: f64,
    pub dt_s: f64,
    /// Minimum elapsed time before a landing may be detected.
    /// `None` derives it from `dt_s`.
    pub landing_guard_s: Option<f64>,
    pub trajectory_capacity: usize,
    pub prediction_dt_s: f64,
    pub prediction_max_time_s: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            air_density_kg_m3: AIR_DENSITY_KG_M3,
            drag_coefficient: SPHERE_DRAG_COEFFICIENT,
            dt_s: TICK_S,
            landing_guard_s: None,
            trajectory_capacity: TRAJECTORY_CAPACITY,
            prediction_dt_s: PREDICTION_STEP_S,
            prediction_max_time_s: PREDICTION_MAX_TIME_S,
        }
    }
}

impl SimConfig {
    pub fn for_body(body: CelestialBody) -> Self {
        Self {
            air_density_kg_m3: body.air_density_kg_m3(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> SimResult<Self> {
        Self::default().with_json_overrides(json)
    }

    /// Applies the keys present in `json` on top of `self`; omitted keys keep
    /// their current values.
    pub fn with_json_overrides(self, json: &str) -> SimResult<Self> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let merged = match (serde_json::to_value(self)?, overrides) {
            (serde_json::Value::Object(mut base), serde_json::Value::Object(fields)) => {
                base.extend(fields);
                serde_json::Value::Object(base)
            }
            (_, other) => other,
        };

        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn landing_guard_s(&self) -> f64 {
        self.landing_guard_s
            .unwrap_or(self.dt_s * LANDING_GUARD_TICK_FRACTION)
    }

    pub fn validate(&self) -> SimResult<()> {
        let positive = [
            ("dt_s", self.dt_s),
            ("prediction_dt_s", self.prediction_dt_s),
            ("prediction_max_time_s", self.prediction_max_time_s),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig { name, value });
            }
        }

        let non_negative = [
            ("air_density_kg_m3", self.air_density_kg_m3),
            ("drag_coefficient", self.drag_coefficient),
            ("landing_guard_s", self.landing_guard_s.unwrap_or(0.0)),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidConfig { name, value });
            }
        }

        if self.trajectory_capacity == 0 {
            return Err(SimError::InvalidConfig {
                name: "trajectory_capacity",
                value: 0.0,
            });
        }

        Ok(())
    }
}
