use crate::core::config::SimConfig;
use crate::core::forces::acceleration;
use crate::core::model::{BodyParameters, KinematicState};

/// One forward-Euler step of length `dt_s`.
///
/// Acceleration is taken at the current velocity and the position advances
/// with the old velocity. Nothing is clamped: the body may end below ground.
pub fn euler_step(
    state: &KinematicState,
    params: &BodyParameters,
    config: &SimConfig,
    dt_s: f64,
) -> KinematicState {
    let (ax, ay) = acceleration(state.vx, state.vy, params, config);
    KinematicState {
        x: state.x + state.vx * dt_s,
        y: state.y + state.vy * dt_s,
        vx: state.vx + ax * dt_s,
        vy: state.vy + ay * dt_s,
    }
}

#[cfg(test)]
mod tests {
    use super::euler_step;
    use crate::core::config::SimConfig;
    use crate::core::model::{BodyParameters, KinematicState};

    #[test]
    fn advances_position_with_the_old_velocity() {
        let state = KinematicState {
            x: 1.0,
            y: 2.0,
            vx: 10.0,
            vy: 5.0,
        };
        let next = euler_step(&state, &BodyParameters::default(), &SimConfig::default(), 0.5);

        assert_eq!(next.x, 6.0);
        assert_eq!(next.y, 4.5);
        assert_eq!(next.vx, 10.0);
        assert_eq!(next.vy, 5.0 - 9.81 * 0.5);
    }

    #[test]
    fn does_not_clamp_below_ground() {
        let state = KinematicState {
            x: 0.0,
            y: 0.1,
            vx: 1.0,
            vy: -10.0,
        };
        let next = euler_step(&state, &BodyParameters::default(), &SimConfig::default(), 0.1);
        assert!(next.y < 0.0);
    }

    #[test]
    fn same_inputs_same_output() {
        let params = BodyParameters {
            drag_enabled: true,
            wind_speed_mps: 3.0,
            ..BodyParameters::default()
        };
        let state = KinematicState {
            x: 4.0,
            y: 3.0,
            vx: 12.0,
            vy: 7.5,
        };
        let config = SimConfig::default();
        assert_eq!(
            euler_step(&state, &params, &config, config.dt_s),
            euler_step(&state, &params, &config, config.dt_s)
        );
    }
}
