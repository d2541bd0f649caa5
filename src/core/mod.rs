pub mod analytical;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod model;
pub mod predictor;
pub mod projectile;
pub mod volley;
pub mod window;

pub use config::{CelestialBody, SimConfig};
pub use error::{SimError, SimResult};
pub use model::{BodyParameters, KinematicState, SolverMode};
pub use predictor::{Prediction, predict, predict_trajectory};
pub use projectile::{FlightPhase, FlightSnapshot, ProjectileState};
pub use volley::Volley;
