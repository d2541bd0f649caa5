use std::f64::consts::PI;

use crate::core::config::SimConfig;
use crate::core::model::BodyParameters;

pub fn cross_section_area(diameter_m: f64) -> f64 {
    let radius = diameter_m * 0.5;
    PI * radius * radius
}

/// Quadratic drag, opposing the velocity. Zero when the body is at rest.
pub fn drag_acceleration(
    vx: f64,
    vy: f64,
    params: &BodyParameters,
    config: &SimConfig,
) -> (f64, f64) {
    let speed = vx.hypot(vy);
    if speed == 0.0 {
        return (0.0, 0.0);
    }

    let force = 0.5
        * config.air_density_kg_m3
        * speed
        * speed
        * config.drag_coefficient
        * cross_section_area(params.diameter_m);
    let scale = force / (speed * params.mass_kg);
    (-vx * scale, -vy * scale)
}

/// Horizontal push from wind; positive wind speed is a tailwind.
pub fn wind_acceleration(params: &BodyParameters, config: &SimConfig) -> f64 {
    let wind = params.wind_speed_mps;
    if wind == 0.0 {
        return 0.0;
    }

    let force = 0.5
        * config.air_density_kg_m3
        * wind
        * wind.abs()
        * config.drag_coefficient
        * cross_section_area(params.diameter_m);
    force / params.mass_kg
}

/// Net acceleration on the body at velocity `(vx, vy)`.
///
/// `params` must already be validated: a non-positive mass makes the
/// resistance terms meaningless.
pub fn acceleration(
    vx: f64,
    vy: f64,
    params: &BodyParameters,
    config: &SimConfig,
) -> (f64, f64) {
    let mut ax = 0.0;
    let mut ay = -params.gravity_mps2;

    if params.drag_enabled {
        let (drag_x, drag_y) = drag_acceleration(vx, vy, params, config);
        ax += drag_x;
        ay += drag_y;
    }

    ax += wind_acceleration(params, config);

    (ax, ay)
}

#[cfg(test)]
mod tests {
    use super::{acceleration, cross_section_area, drag_acceleration, wind_acceleration};
    use crate::core::config::{CelestialBody, SimConfig};
    use crate::core::model::BodyParameters;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn ball() -> BodyParameters {
        BodyParameters {
            mass_kg: 1.0,
            diameter_m: 0.2,
            drag_enabled: true,
            ..BodyParameters::default()
        }
    }

    #[test]
    fn gravity_only_without_resistance() {
        let params = BodyParameters::default();
        let (ax, ay) = acceleration(12.0, -3.0, &params, &SimConfig::default());
        assert_eq!(ax, 0.0);
        assert_eq!(ay, -9.81);
    }

    #[test]
    fn drag_opposes_velocity_with_quadratic_magnitude() {
        let params = ball();
        let config = SimConfig::default();
        let (ax, ay) = drag_acceleration(3.0, 4.0, &params, &config);

        let expected = 0.5 * 1.225 * 25.0 * 0.47 * cross_section_area(0.2);
        assert_close(ax.hypot(ay), expected, 1e-12);
        assert_close(ax / ay, 3.0 / 4.0, 1e-12);
        assert!(ax < 0.0 && ay < 0.0);
    }

    #[test]
    fn drag_is_zero_at_rest() {
        let (ax, ay) = acceleration(0.0, 0.0, &ball(), &SimConfig::default());
        assert_eq!(ax, 0.0);
        assert_eq!(ay, -9.81);
    }

    #[test]
    fn wind_keeps_its_sign_and_stays_horizontal() {
        let config = SimConfig::default();
        let tail = BodyParameters {
            wind_speed_mps: 4.0,
            ..ball()
        };
        let head = BodyParameters {
            wind_speed_mps: -4.0,
            ..ball()
        };

        let push = wind_acceleration(&tail, &config);
        assert!(push > 0.0);
        assert_eq!(wind_acceleration(&head, &config), -push);

        let still_tail = BodyParameters {
            drag_enabled: false,
            ..tail
        };
        let (ax, ay) = acceleration(0.0, 0.0, &still_tail, &config);
        assert_eq!(ax, push);
        assert_eq!(ay, -9.81);
    }

    #[test]
    fn vacuum_removes_air_forces() {
        let config = SimConfig::for_body(CelestialBody::Moon);
        let params = BodyParameters {
            wind_speed_mps: 10.0,
            gravity_mps2: CelestialBody::Moon.gravity_mps2(),
            ..ball()
        };
        let (ax, ay) = acceleration(30.0, 10.0, &params, &config);
        assert_eq!(ax, 0.0);
        assert_eq!(ay, -1.62);
    }
}
