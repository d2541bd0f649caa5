use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid config value {name}: {value}")]
    InvalidConfig { name: &'static str, value: f64 },

    #[error("Could not parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
