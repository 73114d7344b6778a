//! Audio and particle cues
//!
//! The rocket has a single audio source shared by the engine loop and the
//! success/death stingers, plus one particle system per cue.

use serde::{Deserialize, Serialize};

/// Sound clips the rocket can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioCue {
    /// Main engine burn (looped while thrusting)
    MainEngine,
    /// Landed on the finish pad
    Success,
    /// Crashed
    Death,
}

impl AudioCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::MainEngine => "main_engine",
            AudioCue::Success => "success",
            AudioCue::Death => "death",
        }
    }
}

/// Particle systems attached to the rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleEffect {
    /// Exhaust plume
    MainEngine,
    /// Celebration burst
    Success,
    /// Explosion
    Death,
}

impl ParticleEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleEffect::MainEngine => "main_engine",
            ParticleEffect::Success => "success",
            ParticleEffect::Death => "death",
        }
    }
}

/// What the rocket's audio source is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Cue plays until stopped
    Looping(AudioCue),
    /// Cue plays once
    OneShot(AudioCue),
}

/// Model of the single audio source the host owns.
///
/// Mirrors the commands the simulation has issued so that "start the engine
/// loop unless already playing" can be decided without asking the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioChannel {
    playing: Option<Playback>,
}

impl AudioChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    pub fn playing(&self) -> Option<Playback> {
        self.playing
    }

    /// Record a play command
    pub fn play(&mut self, cue: AudioCue, looping: bool) {
        self.playing = Some(if looping {
            Playback::Looping(cue)
        } else {
            Playback::OneShot(cue)
        });
    }

    /// Record a stop command
    pub fn stop(&mut self) {
        self.playing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_tracks_commands() {
        let mut channel = AudioChannel::new();
        assert!(!channel.is_playing());

        channel.play(AudioCue::MainEngine, true);
        assert_eq!(channel.playing(), Some(Playback::Looping(AudioCue::MainEngine)));

        channel.stop();
        assert!(!channel.is_playing());

        channel.play(AudioCue::Death, false);
        assert_eq!(channel.playing(), Some(Playback::OneShot(AudioCue::Death)));
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(AudioCue::Success.as_str(), "success");
        assert_eq!(ParticleEffect::MainEngine.as_str(), "main_engine");
    }
}
