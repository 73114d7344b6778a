//! Rocket Boost - rocket flight controller and oscillating obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flight state machine, transitions, oscillator)
//! - `audio`: Audio and particle cue model
//! - `host`: Host engine services the simulation drives
//! - `settings`: Data-driven tuning loaded from JSON

pub mod audio;
pub mod error;
pub mod host;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Delay between reaching the finish pad and loading the next scene (seconds)
    pub const SUCCESS_DELAY: f64 = 2.0;
    /// Delay between a crash and reloading the current scene (seconds)
    pub const DEATH_DELAY: f64 = 2.5;

    /// Collider tag that never reacts
    pub const FRIENDLY_TAG: &str = "Friendly";
    /// Collider tag that completes the level
    pub const FINISH_TAG: &str = "Finish";

    /// Default main engine thrust
    pub const MAIN_THRUST: f32 = 1000.0;
    /// Default reaction-control (rotation) thrust, degrees per second
    pub const RCS_THRUST: f32 = 100.0;

    /// Default oscillator period (seconds)
    pub const OSCILLATOR_PERIOD: f32 = 2.0;
    /// Periods at or below this are treated as zero
    pub const PERIOD_EPSILON: f32 = f32::EPSILON;
}
