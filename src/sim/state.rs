//! Rocket state and core simulation types
//!
//! Everything the flight controller mutates lives on [`Rocket`].

use serde::{Deserialize, Serialize};

use super::schedule::Schedule;
use super::scene::SceneIndex;
use crate::audio::AudioChannel;
use crate::consts::*;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Life-cycle phase of the rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightState {
    /// Accepting input and collisions
    #[default]
    Alive,
    /// Crashed, waiting for the level to reload
    Dying,
    /// Reached the finish pad, waiting for the next level to load
    Transcending,
}

impl FlightState {
    pub fn is_alive(&self) -> bool {
        match self {
            FlightState::Alive => true,
            FlightState::Dying | FlightState::Transcending => false,
        }
    }
}

/// Engine tuning, fixed once constructed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThrustConfig")]
pub struct ThrustConfig {
    main_thrust: f32,
    rcs_thrust: f32,
}

impl Default for ThrustConfig {
    fn default() -> Self {
        Self {
            main_thrust: MAIN_THRUST,
            rcs_thrust: RCS_THRUST,
        }
    }
}

/// Unchecked wire form; missing fields take the defaults
#[derive(Deserialize)]
#[serde(default)]
struct RawThrustConfig {
    main_thrust: f32,
    rcs_thrust: f32,
}

impl Default for RawThrustConfig {
    fn default() -> Self {
        Self {
            main_thrust: MAIN_THRUST,
            rcs_thrust: RCS_THRUST,
        }
    }
}

impl TryFrom<RawThrustConfig> for ThrustConfig {
    type Error = Error;

    fn try_from(raw: RawThrustConfig) -> Result<Self> {
        Self::new(raw.main_thrust, raw.rcs_thrust)
    }
}

impl ThrustConfig {
    pub fn new(main_thrust: f32, rcs_thrust: f32) -> Result<Self> {
        let config = Self {
            main_thrust,
            rcs_thrust,
        };
        config.validate()?;
        Ok(config)
    }

    /// Both thrusts must be finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("main", self.main_thrust), ("rcs", self.rcs_thrust)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidThrust { name, value });
            }
        }
        Ok(())
    }

    pub fn main_thrust(&self) -> f32 {
        self.main_thrust
    }

    pub fn rcs_thrust(&self) -> f32 {
        self.rcs_thrust
    }
}

/// How the rocket reacts to a collider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionTag {
    /// Launch pads and other safe geometry
    Friendly,
    /// Landing pad that completes the level
    Finish,
    /// Anything else, including untagged colliders
    Other,
}

/// Tag strings the host assigns to colliders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagNames {
    pub friendly: String,
    pub finish: String,
}

impl Default for TagNames {
    fn default() -> Self {
        Self {
            friendly: FRIENDLY_TAG.to_string(),
            finish: FINISH_TAG.to_string(),
        }
    }
}

impl CollisionTag {
    /// Classify a raw collider tag (exact, case-sensitive match)
    pub fn classify(tag: &str, names: &TagNames) -> Self {
        if tag == names.friendly {
            CollisionTag::Friendly
        } else if tag == names.finish {
            CollisionTag::Finish
        } else {
            CollisionTag::Other
        }
    }
}

/// Complete rocket controller state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Engine tuning
    pub thrust: ThrustConfig,
    /// Collider tag names
    pub tags: TagNames,
    /// Whether the debug hotkeys are honoured
    pub debug_keys: bool,
    /// Scene this rocket lives in
    pub scenes: SceneIndex,
    /// Current life-cycle phase
    pub(crate) state: FlightState,
    /// Debug invulnerability toggle
    pub(crate) collision_disabled: bool,
    /// Elapsed real time (seconds) since the rocket was created
    pub(crate) clock: f64,
    /// Pending scene transitions
    pub(crate) schedule: Schedule,
    /// Model of the host audio source
    pub(crate) audio: AudioChannel,
}

impl Rocket {
    /// Create a live rocket with default tags; debug keys follow the build profile
    pub fn new(thrust: ThrustConfig, scenes: SceneIndex) -> Self {
        Self {
            thrust,
            tags: TagNames::default(),
            debug_keys: cfg!(debug_assertions),
            scenes,
            state: FlightState::Alive,
            collision_disabled: false,
            clock: 0.0,
            schedule: Schedule::new(),
            audio: AudioChannel::new(),
        }
    }

    /// Create a rocket from loaded settings
    pub fn from_settings(settings: &Settings, scenes: SceneIndex) -> Result<Self> {
        settings.thrust.validate()?;
        let mut rocket = Self::new(settings.thrust, scenes);
        rocket.tags = settings.tags.clone();
        rocket.debug_keys = settings.debug_keys;
        Ok(rocket)
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn collision_disabled(&self) -> bool {
        self.collision_disabled
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn audio(&self) -> &AudioChannel {
        &self.audio
    }

    /// Classify a raw collider tag using this rocket's tag names
    pub fn classify(&self, tag: &str) -> CollisionTag {
        CollisionTag::classify(tag, &self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rocket_is_alive() {
        let rocket = Rocket::new(ThrustConfig::default(), SceneIndex::new(0, 2).unwrap());
        assert_eq!(rocket.state(), FlightState::Alive);
        assert!(!rocket.collision_disabled());
        assert!(rocket.schedule().is_empty());
        assert!(!rocket.audio().is_playing());
    }

    #[test]
    fn test_thrust_validation() {
        assert!(ThrustConfig::new(1000.0, 100.0).is_ok());
        assert!(matches!(
            ThrustConfig::new(0.0, 100.0),
            Err(Error::InvalidThrust { name: "main", .. })
        ));
        assert!(matches!(
            ThrustConfig::new(1000.0, f32::NAN),
            Err(Error::InvalidThrust { name: "rcs", .. })
        ));
    }

    #[test]
    fn test_classify_tags() {
        let names = TagNames::default();
        assert_eq!(CollisionTag::classify("Friendly", &names), CollisionTag::Friendly);
        assert_eq!(CollisionTag::classify("Finish", &names), CollisionTag::Finish);
        assert_eq!(CollisionTag::classify("finish", &names), CollisionTag::Other);
        assert_eq!(CollisionTag::classify("", &names), CollisionTag::Other);
    }

    #[test]
    fn test_from_settings_uses_custom_tags() {
        let mut settings = Settings::default();
        settings.tags.finish = "Goal".to_string();
        settings.debug_keys = false;
        let rocket = Rocket::from_settings(&settings, SceneIndex::new(0, 1).unwrap()).unwrap();
        assert_eq!(rocket.classify("Goal"), CollisionTag::Finish);
        assert_eq!(rocket.classify("Finish"), CollisionTag::Other);
        assert!(!rocket.debug_keys);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut rocket = Rocket::new(ThrustConfig::default(), SceneIndex::new(1, 3).unwrap());
        rocket.collision_disabled = true;
        let json = serde_json::to_string(&rocket).unwrap();

        let restored: Rocket = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.scenes, rocket.scenes);
        assert_eq!(restored.thrust, rocket.thrust);
        assert!(restored.collision_disabled());
    }

    #[test]
    fn test_tampered_snapshot_is_rejected() {
        let rocket = Rocket::new(ThrustConfig::default(), SceneIndex::new(0, 2).unwrap());
        let json = serde_json::to_string(&rocket).unwrap();
        assert!(json.contains(r#""count":2"#));
        assert!(json.contains(r#""main_thrust":1000.0"#));

        let no_scenes = json.replace(r#""count":2"#, r#""count":0"#);
        assert!(serde_json::from_str::<Rocket>(&no_scenes).is_err());

        let reversed = json.replace(r#""main_thrust":1000.0"#, r#""main_thrust":-5.0"#);
        let err = serde_json::from_str::<Rocket>(&reversed).unwrap_err();
        assert!(err.to_string().contains("main"));
    }

    #[test]
    fn test_terminal_states_are_not_alive() {
        assert!(FlightState::Alive.is_alive());
        assert!(!FlightState::Dying.is_alive());
        assert!(!FlightState::Transcending.is_alive());
    }
}
