//! A clickable sound toggle.
//!
//! Flips a background music source between its on and off volumes, records
//! the choice in the settings store, and swaps the button icon to match.
//! Wire the owning button's click event to [`MuteToggle::toggle`].

use serde::{Deserialize, Serialize};

use crate::engine::audio::{AudioMixer, EffectChannel, SharedEmitter};
use crate::engine::resources::ResourceManager;
use crate::engine::scene::SceneGraph;
use crate::engine::settings::SettingsStore;
use crate::ui::{IconImage, Sprite};

const CUE_ON: &str = "turnon";
const CUE_OFF: &str = "turnoff";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Scene tag of the music object. Empty disables the lookup.
    pub sound_object_tag: String,
    /// Settings key the volume is persisted under.
    pub player_pref: String,
    pub volume_on: f32,
    pub volume_off: f32,
    pub on_sprite: Sprite,
    pub off_sprite: Sprite,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            sound_object_tag: "Sound".to_string(),
            player_pref: "SoundVolume".to_string(),
            volume_on: 1.0,
            volume_off: 0.0,
            on_sprite: Sprite::new("sound-on"),
            off_sprite: Sprite::new("sound-off"),
        }
    }
}

/// Engine services the widget borrows for the duration of one operation.
pub struct WidgetServices<'a> {
    pub scene: &'a SceneGraph,
    pub settings: &'a mut dyn SettingsStore,
    pub mixer: &'a mut dyn AudioMixer,
    pub resources: &'a ResourceManager,
}

pub struct MuteToggle {
    config: ToggleConfig,
    target: Option<SharedEmitter>,
    effects: Option<Box<dyn EffectChannel>>,
    image: Option<IconImage>,
    current_volume: f32,
}

impl MuteToggle {
    pub fn new(config: ToggleConfig) -> Self {
        let image = IconImage::new(config.on_sprite.clone());
        Self {
            config,
            target: None,
            effects: None,
            image: Some(image),
            current_volume: 1.0,
        }
    }

    /// Pre-binds the audio target, skipping the tag lookup at activation.
    pub fn with_target(mut self, target: SharedEmitter) -> Self {
        self.target = Some(target);
        self
    }

    /// Detaches the icon image. The widget keeps working invisibly.
    pub fn take_image(&mut self) -> Option<IconImage> {
        self.image.take()
    }

    pub fn current_volume(&self) -> f32 {
        self.current_volume
    }

    pub fn image(&self) -> Option<&IconImage> {
        self.image.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Called once when the widget becomes active: binds the audio target,
    /// loads the persisted volume, and applies it.
    ///
    /// The loaded value falls back to the bound target's current volume,
    /// then to 1.0 (on). That order is load-bearing: the store always wins
    /// over whatever the target happens to be set to.
    pub fn activate(&mut self, services: &mut WidgetServices<'_>) {
        self.resolve_target(services.scene);
        if self.target.is_none() {
            tracing::info!(
                target: "game",
                tag = %self.config.sound_object_tag,
                "no music object bound, ignore if the scene has no music"
            );
        }

        self.current_volume = match &self.target {
            Some(target) => services
                .settings
                .get_float(&self.config.player_pref, target.borrow().volume()),
            None => services
                .settings
                .get_float(&self.config.player_pref, self.current_volume),
        };

        if self.effects.is_none() {
            self.effects = Some(services.mixer.create_effect_channel());
        }

        self.apply_state(services);
    }

    /// Synchronizes the persisted value, the icon, and the target's volume
    /// with the current state.
    pub fn apply_state(&mut self, services: &mut WidgetServices<'_>) {
        self.resolve_target(services.scene);

        services
            .settings
            .set_float(&self.config.player_pref, self.current_volume);

        if let Some(image) = self.image.as_mut() {
            // Exact match against the configured on volume; anything else
            // renders as off.
            if self.current_volume == self.config.volume_on {
                image.sprite = self.config.on_sprite.clone();
                image.color.a = 1.0;
            } else {
                image.sprite = self.config.off_sprite.clone();
                image.color.a = 0.5;
            }
        }

        if let Some(target) = &self.target {
            target.borrow_mut().set_volume(self.current_volume);
        }
    }

    /// Click handler: flips the state, plays the matching cue, and applies.
    pub fn toggle(&mut self, services: &mut WidgetServices<'_>) {
        if self.current_volume == self.config.volume_on {
            self.current_volume = self.config.volume_off;
            self.play_cue(services.resources, CUE_OFF);
        } else {
            self.current_volume = self.config.volume_on;
            self.play_cue(services.resources, CUE_ON);
        }

        self.apply_state(services);
    }

    /// Starts the bound target's looping playback, if any.
    pub fn start_target(&mut self) {
        if let Some(target) = &self.target {
            target.borrow_mut().play();
        }
    }

    fn resolve_target(&mut self, scene: &SceneGraph) {
        if self.target.is_none() && !self.config.sound_object_tag.is_empty() {
            self.target = scene.find_audio_by_tag(&self.config.sound_object_tag);
        }
    }

    fn play_cue(&mut self, resources: &ResourceManager, clip: &str) {
        if let Some(effects) = self.effects.as_mut() {
            effects.play_one_shot(resources, clip);
        }
    }
}
