use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::analytical::position_at;
use crate::core::config::SimConfig;
use crate::core::error::SimResult;
use crate::core::integrator::euler_step;
use crate::core::model::{BodyParameters, KinematicState, SolverMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FlightPhase {
    Idle,
    Flying,
    Landed,
}

/// Read-only view of a flight for exporters and graph feeders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlightSnapshot {
    pub time_s: f64,
    pub phase: FlightPhase,
    pub state: KinematicState,
    pub speed_mps: f64,
    pub max_height_m: f64,
    pub range_m: Option<f64>,
}

/// One projectile from launch to landing.
///
/// Created per launch configuration; editing parameters means building a new
/// one. The solver mode is fixed at construction.
#[derive(Clone, Debug)]
pub struct ProjectileState {
    params: BodyParameters,
    config: SimConfig,
    mode: SolverMode,
    phase: FlightPhase,
    state: KinematicState,
    time_s: f64,
    trajectory: Vec<(f64, f64)>,
    max_height_m: f64,
    range_m: Option<f64>,
}

impl ProjectileState {
    pub fn new(params: BodyParameters, config: SimConfig) -> SimResult<Self> {
        params.validate()?;
        config.validate()?;

        let mut projectile = Self {
            params,
            config,
            mode: SolverMode::for_params(&params),
            phase: FlightPhase::Idle,
            state: KinematicState::default(),
            time_s: 0.0,
            trajectory: Vec::with_capacity(config.trajectory_capacity),
            max_height_m: 0.0,
            range_m: None,
        };
        projectile.reset();
        Ok(projectile)
    }

    /// Back to `Idle` at the launch point, from any phase.
    pub fn reset(&mut self) {
        self.phase = FlightPhase::Idle;
        self.state = self.analytical_state_at(0.0);
        self.time_s = 0.0;
        self.trajectory.clear();
        self.max_height_m = self.state.y;
        self.range_m = None;
    }

    pub fn launch(&mut self) {
        self.reset();
        self.phase = FlightPhase::Flying;
        debug!(
            mode = ?self.mode,
            speed_mps = self.params.speed_mps,
            angle_deg = self.params.angle_deg,
            "projectile launched"
        );
    }

    /// Advances one tick. Does nothing unless the projectile is flying.
    pub fn update(&mut self) {
        if self.phase != FlightPhase::Flying {
            return;
        }

        let capacity = self.config.trajectory_capacity;
        if self.trajectory.len() < capacity {
            self.trajectory.push(self.state.position());
            if self.trajectory.len() == capacity {
                warn!(capacity, "trajectory history full, sampling stopped");
            }
        }

        let dt = self.config.dt_s;
        let next_time_s = self.time_s + dt;
        self.state = match self.mode {
            SolverMode::Analytical => self.analytical_state_at(next_time_s),
            SolverMode::Numerical => euler_step(&self.state, &self.params, &self.config, dt),
        };
        self.time_s = next_time_s;
        self.max_height_m = self.max_height_m.max(self.state.y);

        if self.state.y <= 0.0 && self.time_s > self.config.landing_guard_s() {
            self.state.y = 0.0;
            self.phase = FlightPhase::Landed;
            self.range_m = Some(self.state.x);
            info!(
                range_m = self.state.x,
                time_s = self.time_s,
                max_height_m = self.max_height_m,
                "projectile landed"
            );
        }
    }

    fn analytical_state_at(&self, time_s: f64) -> KinematicState {
        position_at(
            self.params.speed_mps,
            self.params.angle_deg,
            self.params.gravity_mps2,
            time_s,
        )
    }

    pub fn params(&self) -> &BodyParameters {
        &self.params
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn solver_mode(&self) -> SolverMode {
        self.mode
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_flying(&self) -> bool {
        self.phase == FlightPhase::Flying
    }

    pub fn has_landed(&self) -> bool {
        self.phase == FlightPhase::Landed
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    pub fn trajectory(&self) -> &[(f64, f64)] {
        &self.trajectory
    }

    pub fn trajectory_full(&self) -> bool {
        self.trajectory.len() >= self.config.trajectory_capacity
    }

    pub fn max_height_m(&self) -> f64 {
        self.max_height_m
    }

    /// Horizontal distance at touchdown; `None` until landed.
    pub fn range_m(&self) -> Option<f64> {
        self.range_m
    }

    pub fn speed(&self) -> f64 {
        self.state.speed()
    }

    pub fn velocity_angle_rad(&self) -> f64 {
        self.state.vy.atan2(self.state.vx)
    }

    pub fn velocity_angle_deg(&self) -> f64 {
        self.velocity_angle_rad().to_degrees()
    }

    pub fn kinetic_energy_j(&self) -> f64 {
        let speed = self.speed();
        0.5 * self.params.mass_kg * speed * speed
    }

    pub fn potential_energy_j(&self) -> f64 {
        self.params.mass_kg * self.params.gravity_mps2 * self.state.y
    }

    pub fn mechanical_energy_j(&self) -> f64 {
        self.kinetic_energy_j() + self.potential_energy_j()
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            time_s: self.time_s,
            phase: self.phase,
            state: self.state,
            speed_mps: self.speed(),
            max_height_m: self.max_height_m,
            range_m: self.range_m,
        }
    }
}
