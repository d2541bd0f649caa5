//! Closed-form kinematics for a launch over flat ground with no drag or wind.
//!
//! These are the "theoretical" readouts: they stay meaningful as a
//! comparison even when the live flight runs the numerical solver.

use crate::core::model::KinematicState;

pub fn velocity_components(speed_mps: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (speed_mps * theta.cos(), speed_mps * theta.sin())
}

pub fn position_at(
    speed_mps: f64,
    angle_deg: f64,
    gravity_mps2: f64,
    time_s: f64,
) -> KinematicState {
    let (vx0, vy0) = velocity_components(speed_mps, angle_deg);
    KinematicState {
        x: vx0 * time_s,
        y: (vy0 * time_s) - (0.5 * gravity_mps2 * time_s * time_s),
        vx: vx0,
        vy: vy0 - gravity_mps2 * time_s,
    }
}

pub fn max_range(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    let theta = angle_deg.to_radians();
    speed_mps * speed_mps * (2.0 * theta).sin() / gravity_mps2
}

pub fn max_height(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    let (_, vy0) = velocity_components(speed_mps, angle_deg);
    (vy0 * vy0) / (2.0 * gravity_mps2)
}

pub fn flight_time(speed_mps: f64, angle_deg: f64, gravity_mps2: f64) -> f64 {
    let (_, vy0) = velocity_components(speed_mps, angle_deg);
    2.0 * vy0 / gravity_mps2
}

/// Evenly time-spaced points along the ideal arc, launch to landing.
pub fn sample_trajectory(
    speed_mps: f64,
    angle_deg: f64,
    gravity_mps2: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    let time_of_flight_s = flight_time(speed_mps, angle_deg, gravity_mps2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            let state = position_at(speed_mps, angle_deg, gravity_mps2, t);
            (state.x, state.y.max(0.0))
        })
        .collect()
}
