pub mod audio;
pub mod core;
pub mod resources;
pub mod scene;
pub mod settings;

use std::io::BufRead;

use anyhow::{Context, Result};
use audio::AudioEngine;
use core::EngineConfig;
use resources::ResourceManager;
use scene::{SceneGraph, SceneNode};
use settings::FileSettings;

use crate::game::mute_toggle::{MuteToggle, WidgetServices};

const MUSIC_CLIP: &str = "music";
const CUE_CLIPS: [&str; 2] = ["turnon", "turnoff"];

pub struct EngineApp {
    config: EngineConfig,
    resources: ResourceManager,
    scene: SceneGraph,
    audio: AudioEngine,
    settings: FileSettings,
}

impl EngineApp {
    pub fn new(config: EngineConfig) -> Self {
        let settings = FileSettings::open(&config.settings_path);
        Self {
            resources: ResourceManager::default(),
            scene: SceneGraph::default(),
            audio: AudioEngine::new(),
            settings,
            config,
        }
    }

    /// Builds the demo scene and drives the sound toggle from stdin
    /// commands (`toggle` / `quit`), standing in for button clicks.
    pub fn run(mut self) -> Result<()> {
        tracing::info!(target: "engine", app = %self.config.app_name, "engine starting");

        self.load_assets();
        self.spawn_music();

        let mut toggle = MuteToggle::new(self.config.toggle.clone());
        {
            let mut services = WidgetServices {
                scene: &self.scene,
                settings: &mut self.settings,
                mixer: &mut self.audio,
                resources: &self.resources,
            };
            toggle.activate(&mut services);
        }
        toggle.start_target();
        tracing::info!(
            target: "engine",
            volume = toggle.current_volume(),
            bound = toggle.is_bound(),
            "sound toggle ready, type 'toggle' or 'quit'"
        );

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read command input")?;
            match line.trim() {
                "t" | "toggle" => {
                    let mut services = WidgetServices {
                        scene: &self.scene,
                        settings: &mut self.settings,
                        mixer: &mut self.audio,
                        resources: &self.resources,
                    };
                    toggle.toggle(&mut services);
                    tracing::info!(
                        target: "engine",
                        volume = toggle.current_volume(),
                        "sound toggled"
                    );
                }
                "q" | "quit" => break,
                "" => {}
                other => tracing::debug!(command = %other, "unknown command"),
            }
        }

        tracing::info!(target: "engine", "engine shutdown complete");
        Ok(())
    }

    fn load_assets(&mut self) {
        for name in CUE_CLIPS.into_iter().chain([MUSIC_CLIP]) {
            let path = self.config.assets_dir.join(format!("{name}.ogg"));
            if let Err(err) = self.resources.load_clip_file(name, &path) {
                tracing::debug!(%err, clip = name, "audio clip unavailable");
            }
        }
    }

    fn spawn_music(&mut self) {
        let Some(clip) = self.resources.clip(MUSIC_CLIP) else {
            return;
        };
        let emitter = self.audio.create_emitter(clip);
        let tag = self.config.toggle.sound_object_tag.clone();
        self.scene
            .add_node(SceneNode::new(MUSIC_CLIP).with_tag(tag).with_emitter(emitter));
    }
}
