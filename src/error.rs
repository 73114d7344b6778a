//! Crate error type

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid thrust {name}: {value} (must be finite and > 0)")]
    InvalidThrust { name: &'static str, value: f32 },

    #[error("invalid oscillator: period {period}, movement {movement} (must be finite)")]
    InvalidOscillator { period: f32, movement: glam::Vec3 },

    #[error("invalid scene index {current} of {count}")]
    InvalidScene { current: usize, count: usize },

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
