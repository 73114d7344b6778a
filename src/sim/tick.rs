//! Per-frame simulation step
//!
//! Advances the rocket one host frame and returns the effects the host must
//! apply, in order.

use glam::Vec3;

use super::effect::Effect;
use super::scene::SceneAction;
use super::state::{CollisionTag, FlightState, Rocket};
use crate::audio::{AudioCue, ParticleEffect};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Main engine key held
    pub thrust: bool,
    /// Rotate counter-clockwise key held
    pub rotate_left: bool,
    /// Rotate clockwise key held
    pub rotate_right: bool,
    /// Load the next level immediately (debug, key-down edge)
    pub advance_level: bool,
    /// Toggle collision invulnerability (debug, key-down edge)
    pub toggle_collision: bool,
    /// Collisions that began since the previous frame
    pub collisions: Vec<CollisionTag>,
}

/// Advance the rocket by one frame of `dt` real seconds
pub fn advance(rocket: &mut Rocket, input: &FrameInput, dt: f32) -> Vec<Effect> {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ignoring frame with invalid dt {}", dt);
        return Vec::new();
    }

    let mut effects = Vec::new();

    // Timers keep running in every state
    rocket.clock += f64::from(dt);
    for action in rocket.schedule.drain_due(rocket.clock) {
        load_scene(rocket, action, &mut effects);
    }

    for &tag in &input.collisions {
        effects.extend(collide(rocket, tag));
    }

    if rocket.state.is_alive() {
        respond_to_thrust(rocket, input.thrust, dt, &mut effects);
        respond_to_rotation(rocket, input, dt, &mut effects);
    }

    if rocket.debug_keys {
        if input.advance_level {
            load_scene(rocket, SceneAction::LoadNext, &mut effects);
        } else if input.toggle_collision {
            rocket.collision_disabled = !rocket.collision_disabled;
            log::info!(
                "Collisions {}",
                if rocket.collision_disabled { "disabled" } else { "enabled" }
            );
        }
    }

    effects
}

/// Handle the start of a collision with a classified collider
pub fn collide(rocket: &mut Rocket, tag: CollisionTag) -> Vec<Effect> {
    if !rocket.state.is_alive() || rocket.collision_disabled {
        return Vec::new();
    }

    match tag {
        CollisionTag::Friendly => Vec::new(),
        CollisionTag::Finish => begin_sequence(
            rocket,
            FlightState::Transcending,
            AudioCue::Success,
            ParticleEffect::Success,
            SUCCESS_DELAY,
            SceneAction::LoadNext,
        ),
        CollisionTag::Other => begin_sequence(
            rocket,
            FlightState::Dying,
            AudioCue::Death,
            ParticleEffect::Death,
            DEATH_DELAY,
            SceneAction::Reload,
        ),
    }
}

/// Enter a terminal state: stinger, burst, and a delayed scene change
fn begin_sequence(
    rocket: &mut Rocket,
    next: FlightState,
    cue: AudioCue,
    particles: ParticleEffect,
    delay: f64,
    action: SceneAction,
) -> Vec<Effect> {
    log::info!("Rocket {:?} -> {:?} at t={:.3}s", rocket.state, next, rocket.clock);
    rocket.state = next;

    rocket.audio.stop();
    rocket.audio.play(cue, false);
    rocket.schedule.push(rocket.clock, delay, action);
    log::debug!("Scheduled {:?} in {}s", action, delay);

    vec![
        Effect::StopAudio,
        Effect::PlayAudio {
            cue,
            looping: false,
        },
        Effect::PlayParticles(particles),
    ]
}

fn load_scene(rocket: &Rocket, action: SceneAction, effects: &mut Vec<Effect>) {
    let index = action.target(&rocket.scenes);
    log::info!("Loading scene {} ({:?})", index, action);
    effects.push(Effect::LoadScene(index));
}

fn respond_to_thrust(rocket: &mut Rocket, thrusting: bool, dt: f32, effects: &mut Vec<Effect>) {
    if thrusting {
        let force = Vec3::Y * rocket.thrust.main_thrust() * dt;
        effects.push(Effect::ApplyRelativeForce(force));
        if !rocket.audio.is_playing() {
            rocket.audio.play(AudioCue::MainEngine, true);
            effects.push(Effect::PlayAudio {
                cue: AudioCue::MainEngine,
                looping: true,
            });
        }
        effects.push(Effect::PlayParticles(ParticleEffect::MainEngine));
    } else {
        rocket.audio.stop();
        effects.push(Effect::StopAudio);
        effects.push(Effect::StopParticles(ParticleEffect::MainEngine));
    }
}

fn respond_to_rotation(rocket: &Rocket, input: &FrameInput, dt: f32, effects: &mut Vec<Effect>) {
    // Manual rotation overrides the body's angular physics for this frame only
    effects.push(Effect::FreezeRotation(true));

    let rotation = Vec3::Z * rocket.thrust.rcs_thrust() * dt;
    if input.rotate_left {
        effects.push(Effect::Rotate(rotation));
    } else if input.rotate_right {
        effects.push(Effect::Rotate(-rotation));
    }

    effects.push(Effect::FreezeRotation(false));
}
