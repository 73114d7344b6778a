//! Commands the simulation issues to the host engine

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioCue, ParticleEffect};

/// A single host-side side effect, applied in emission order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Add force to the physics body in its local frame
    ApplyRelativeForce(Vec3),
    /// Enable/disable the body's own rotational physics
    FreezeRotation(bool),
    /// Rotate the transform by euler angles (degrees)
    Rotate(Vec3),
    /// Start a clip on the rocket's audio source
    PlayAudio { cue: AudioCue, looping: bool },
    /// Stop whatever the audio source is playing
    StopAudio,
    PlayParticles(ParticleEffect),
    StopParticles(ParticleEffect),
    /// Load the scene with this build index
    LoadScene(usize),
}
