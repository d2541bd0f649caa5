use tracing::debug;

use crate::core::config::SimConfig;
use crate::core::error::SimResult;
use crate::core::model::BodyParameters;
use crate::core::projectile::ProjectileState;

/// Several independent shots ticked together.
///
/// Shots share the config but no mutable state, so update order within a
/// tick does not matter.
#[derive(Clone, Debug, Default)]
pub struct Volley {
    shots: Vec<ProjectileState>,
}

impl Volley {
    pub fn new(params: &[BodyParameters], config: SimConfig) -> SimResult<Self> {
        let shots = params
            .iter()
            .map(|p| ProjectileState::new(*p, config))
            .collect::<SimResult<Vec<_>>>()?;
        Ok(Self { shots })
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn launch_all(&mut self) {
        debug!(shots = self.shots.len(), "volley launched");
        self.shots.iter_mut().for_each(ProjectileState::launch);
    }

    pub fn update_all(&mut self) {
        self.shots.iter_mut().for_each(ProjectileState::update);
    }

    pub fn reset_all(&mut self) {
        self.shots.iter_mut().for_each(ProjectileState::reset);
    }

    pub fn any_flying(&self) -> bool {
        self.shots.iter().any(ProjectileState::is_flying)
    }

    pub fn all_landed(&self) -> bool {
        !self.shots.is_empty() && self.shots.iter().all(ProjectileState::has_landed)
    }

    /// Index and distance of the furthest landed shot.
    pub fn longest_range(&self) -> Option<(usize, f64)> {
        self.shots
            .iter()
            .enumerate()
            .filter_map(|(idx, shot)| shot.range_m().map(|range| (idx, range)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectileState> {
        self.shots.iter()
    }

    pub fn get(&self, idx: usize) -> Option<&ProjectileState> {
        self.shots.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::Volley;
    use crate::core::config::SimConfig;
    use crate::core::model::BodyParameters;
    use crate::core::projectile::ProjectileState;

    fn angles(angles: &[f64]) -> Vec<BodyParameters> {
        angles
            .iter()
            .map(|&angle_deg| BodyParameters {
                angle_deg,
                drag_enabled: true,
                ..BodyParameters::default()
            })
            .collect()
    }

    #[test]
    fn shots_fly_independently() {
        let params = angles(&[30.0, 45.0, 60.0]);
        let mut volley = Volley::new(&params, SimConfig::default()).expect("valid volley");
        volley.launch_all();
        while volley.any_flying() {
            volley.update_all();
        }
        assert!(volley.all_landed());

        for (shot, p) in volley.iter().zip(&params) {
            let mut solo = ProjectileState::new(*p, SimConfig::default()).expect("valid");
            solo.launch();
            while solo.is_flying() {
                solo.update();
            }
            assert_eq!(shot.range_m(), solo.range_m());
        }
    }

    #[test]
    fn longest_range_picks_the_furthest_landing() {
        let mut volley =
            Volley::new(&angles(&[15.0, 40.0, 75.0]), SimConfig::default()).expect("valid");
        assert_eq!(volley.longest_range(), None);

        volley.launch_all();
        while volley.any_flying() {
            volley.update_all();
        }
        let (idx, range) = volley.longest_range().expect("all landed");
        assert_eq!(idx, 1);
        assert_eq!(volley.get(idx).and_then(ProjectileState::range_m), Some(range));
    }

    #[test]
    fn one_bad_shot_rejects_the_volley() {
        let mut params = angles(&[30.0, 45.0]);
        params[1].mass_kg = -1.0;
        assert!(Volley::new(&params, SimConfig::default()).is_err());
    }

    #[test]
    fn reset_returns_every_shot_to_idle() {
        let mut volley = Volley::new(&angles(&[20.0, 50.0]), SimConfig::default()).expect("valid");
        volley.launch_all();
        volley.update_all();
        volley.reset_all();
        assert!(!volley.any_flying());
        assert!(!volley.all_landed());
        assert!(volley.iter().all(|shot| shot.time_s() == 0.0));
    }
}
