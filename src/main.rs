//! Rocket Boost entry point
//!
//! Headless demo: flies a scripted rocket against a logging host so the
//! simulation can be exercised without an engine.
//!
//! Usage: `rocket-boost [settings.json]`

use glam::Vec3;

use rocket_boost::Settings;
use rocket_boost::audio::{AudioCue, ParticleEffect};
use rocket_boost::host::{Host, apply_effects};
use rocket_boost::sim::{CollisionTag, FrameInput, Oscillator, Rocket, SceneIndex, advance};

/// Frame rate of the scripted run
const FRAME_DT: f32 = 1.0 / 60.0;

/// Host that integrates nothing and logs every command
#[derive(Default)]
struct LogHost {
    force: Vec3,
    rotation: Vec3,
    loaded_scene: Option<usize>,
}

impl Host for LogHost {
    fn apply_relative_force(&mut self, force: Vec3) {
        self.force += force;
    }

    fn set_freeze_rotation(&mut self, _frozen: bool) {}

    fn rotate(&mut self, euler: Vec3) {
        self.rotation += euler;
    }

    fn play_audio(&mut self, cue: AudioCue, looping: bool) {
        log::info!("audio: play {} (looping={})", cue.as_str(), looping);
    }

    fn stop_audio(&mut self) {
        log::debug!("audio: stop");
    }

    fn play_particles(&mut self, effect: ParticleEffect) {
        log::debug!("particles: play {}", effect.as_str());
    }

    fn stop_particles(&mut self, effect: ParticleEffect) {
        log::debug!("particles: stop {}", effect.as_str());
    }

    fn load_scene(&mut self, index: usize) {
        // The rocket is destroyed with its scene; only the first load counts
        if self.loaded_scene.is_none() {
            log::info!("scene: load {}", index);
            self.loaded_scene = Some(index);
        }
    }
}

/// Scripted input: burn and bank left, coast, touch the pad, then land
fn scripted_input(frame: u32) -> FrameInput {
    match frame {
        0..=59 => FrameInput {
            thrust: true,
            rotate_left: frame >= 30,
            ..Default::default()
        },
        60 => FrameInput {
            collisions: vec![CollisionTag::Friendly],
            ..Default::default()
        },
        120 => FrameInput {
            collisions: vec![CollisionTag::Finish],
            ..Default::default()
        },
        _ => FrameInput::default(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Rocket Boost (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let scenes = match SceneIndex::new(0, 3) {
        Ok(scenes) => scenes,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut rocket = match Rocket::from_settings(&settings, scenes) {
        Ok(rocket) => rocket,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let obstacle = Oscillator::new(Vec3::new(5.0, 0.0, 0.0), settings.oscillator);
    log::info!(
        "Scene {} of {}, obstacle period {}s movement {:?}",
        rocket.scenes.current(),
        rocket.scenes.count(),
        obstacle.config().period,
        obstacle.config().movement
    );
    let mut host = LogHost::default();

    let mut frame = 0;
    while host.loaded_scene.is_none() && frame < 600 {
        let effects = advance(&mut rocket, &scripted_input(frame), FRAME_DT);
        apply_effects(&mut host, &effects);

        if frame % 30 == 0 {
            let t = frame as f32 * FRAME_DT;
            log::info!(
                "t={:.2}s state={:?} obstacle={:?}",
                t,
                rocket.state(),
                obstacle.position_at(t)
            );
        }
        frame += 1;
    }

    log::info!(
        "Run finished after {} frames: state={:?} impulse={:?} rotation={:?}",
        frame,
        rocket.state(),
        host.force,
        host.rotation
    );
}
