//! Host engine services
//!
//! The simulation only describes what should happen; an implementation of
//! [`Host`] binds those effects to a real physics body, audio source,
//! particle systems and scene loader.

use glam::Vec3;

use crate::audio::{AudioCue, ParticleEffect};
use crate::sim::Effect;

/// Services the rocket consumes from the engine
pub trait Host {
    fn apply_relative_force(&mut self, force: Vec3);
    fn set_freeze_rotation(&mut self, frozen: bool);
    /// Rotate by euler angles in degrees
    fn rotate(&mut self, euler: Vec3);
    fn play_audio(&mut self, cue: AudioCue, looping: bool);
    fn stop_audio(&mut self);
    fn play_particles(&mut self, effect: ParticleEffect);
    fn stop_particles(&mut self, effect: ParticleEffect);
    fn load_scene(&mut self, index: usize);
}

/// Apply effects to the host in emission order
pub fn apply_effects<H: Host + ?Sized>(host: &mut H, effects: &[Effect]) {
    for effect in effects {
        match *effect {
            Effect::ApplyRelativeForce(force) => host.apply_relative_force(force),
            Effect::FreezeRotation(frozen) => host.set_freeze_rotation(frozen),
            Effect::Rotate(euler) => host.rotate(euler),
            Effect::PlayAudio { cue, looping } => host.play_audio(cue, looping),
            Effect::StopAudio => host.stop_audio(),
            Effect::PlayParticles(p) => host.play_particles(p),
            Effect::StopParticles(p) => host.stop_particles(p),
            Effect::LoadScene(index) => host.load_scene(index),
        }
    }
}
