use serde::Serialize;
use tracing::debug;

use crate::core::analytical::position_at;
use crate::core::config::SimConfig;
use crate::core::error::SimResult;
use crate::core::integrator::euler_step;
use crate::core::model::{BodyParameters, KinematicState, SolverMode};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub points: Vec<(f64, f64)>,
    pub range_m: f64,
    pub flight_time_s: f64,
    pub max_height_m: f64,
    /// False when the horizon ran out before touchdown.
    pub landed: bool,
}

/// Dry-runs a whole flight at the coarse preview step.
///
/// Uses the same solver choice and landing guard as a live flight but works
/// on its own scratch state.
pub fn predict(params: &BodyParameters, config: &SimConfig) -> SimResult<Prediction> {
    params.validate()?;
    config.validate()?;

    let mode = SolverMode::for_params(params);
    let dt = config.prediction_dt_s;
    let guard_s = config.landing_guard_s();

    let mut state = position_at(params.speed_mps, params.angle_deg, params.gravity_mps2, 0.0);
    let mut time_s = 0.0;
    let mut max_height_m = state.y;
    let mut points = vec![state.position()];
    let mut landed = false;

    while time_s < config.prediction_max_time_s {
        let next_time_s = time_s + dt;
        state = advance(mode, &state, params, config, next_time_s, dt);
        time_s = next_time_s;
        max_height_m = max_height_m.max(state.y);

        if state.y < 0.0 && time_s > guard_s {
            points.push((state.x, 0.0));
            landed = true;
            break;
        }
        points.push(state.position());
    }

    debug!(
        ?mode,
        points = points.len(),
        range_m = state.x,
        landed,
        "trajectory predicted"
    );

    Ok(Prediction {
        points,
        range_m: state.x,
        flight_time_s: time_s,
        max_height_m,
        landed,
    })
}

pub fn predict_trajectory(
    params: &BodyParameters,
    config: &SimConfig,
) -> SimResult<Vec<(f64, f64)>> {
    predict(params, config).map(|prediction| prediction.points)
}

fn advance(
    mode: SolverMode,
    state: &KinematicState,
    params: &BodyParameters,
    config: &SimConfig,
    next_time_s: f64,
    dt_s: f64,
) -> KinematicState {
    match mode {
        SolverMode::Analytical => position_at(
            params.speed_mps,
            params.angle_deg,
            params.gravity_mps2,
            next_time_s,
        ),
        SolverMode::Numerical => euler_step(state, params, config, dt_s),
    }
}

#[cfg(test)]
mod tests {
    use super::{predict, predict_trajectory};
    use crate::core::analytical::max_range;
    use crate::core::config::SimConfig;
    use crate::core::model::BodyParameters;
    use crate::core::projectile::ProjectileState;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn live_range(params: BodyParameters) -> f64 {
        let mut projectile =
            ProjectileState::new(params, SimConfig::default()).expect("valid parameters");
        projectile.launch();
        while projectile.is_flying() {
            projectile.update();
        }
        projectile.range_m().expect("landed")
    }

    #[test]
    fn preview_without_resistance_lands_near_theory() {
        let prediction =
            predict(&BodyParameters::default(), &SimConfig::default()).expect("prediction");

        assert!(prediction.landed);
        assert_eq!(prediction.points[0], (0.0, 0.0));
        let (last_x, last_y) = prediction.points[prediction.points.len() - 1];
        assert_eq!(last_y, 0.0);
        assert_eq!(last_x, prediction.range_m);
        assert_close(prediction.range_m, max_range(20.0, 45.0, 9.81), 20.0 * 0.05);
        assert_close(prediction.max_height_m, 10.19, 0.05);
    }

    #[test]
    fn preview_with_drag_approximates_live_range() {
        let params = BodyParameters {
            speed_mps: 30.0,
            drag_enabled: true,
            ..BodyParameters::default()
        };
        let predicted = predict(&params, &SimConfig::default()).expect("prediction");
        let live = live_range(params);

        assert!(predicted.landed);
        assert_close(predicted.range_m, live, 0.05 * live);
    }

    #[test]
    fn preview_does_not_touch_live_state() {
        let params = BodyParameters::default();
        let mut projectile =
            ProjectileState::new(params, SimConfig::default()).expect("valid parameters");
        projectile.launch();
        for _ in 0..10 {
            projectile.update();
        }
        let before = projectile.snapshot();

        let _ = predict_trajectory(&params, projectile.config()).expect("prediction");
        assert_eq!(projectile.snapshot(), before);
    }

    #[test]
    fn horizon_bounds_long_flights() {
        let params = BodyParameters {
            speed_mps: 200.0,
            gravity_mps2: 1.62,
            ..BodyParameters::default()
        };
        let prediction = predict(&params, &SimConfig::default()).expect("prediction");

        assert!(!prediction.landed);
        assert!(prediction.flight_time_s >= 30.0);
        assert!(prediction.points.len() <= 30 * 20 + 2);
    }

    #[test]
    fn prediction_serializes_for_exporters() {
        let prediction =
            predict(&BodyParameters::default(), &SimConfig::default()).expect("prediction");
        let json = serde_json::to_value(&prediction).expect("prediction serializes");

        assert_eq!(json["landed"], true);
        assert_eq!(json["range_m"].as_f64(), Some(prediction.range_m));
        let points = json["points"].as_array().expect("points array");
        assert_eq!(points.len(), prediction.points.len());
        assert_eq!(points[0], serde_json::json!([0.0, 0.0]));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let params = BodyParameters {
            diameter_m: 0.0,
            ..BodyParameters::default()
        };
        assert!(predict_trajectory(&params, &SimConfig::default()).is_err());
    }
}
