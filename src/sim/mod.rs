//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` the host passes in
//! - Host side effects are returned as [`Effect`] values, never performed
//! - No rendering, physics or platform dependencies

pub mod effect;
pub mod oscillator;
pub mod schedule;
pub mod scene;
pub mod state;
pub mod tick;

pub use effect::Effect;
pub use oscillator::{Oscillator, OscillatorConfig};
pub use schedule::{Schedule, Scheduled};
pub use scene::{SceneAction, SceneIndex};
pub use state::{CollisionTag, FlightState, Rocket, TagNames, ThrustConfig};
pub use tick::{FrameInput, advance, collide};
