use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::engine::resources::ResourceManager;

/// An audio-emitting scene object whose output volume the game can drive.
pub trait AudioEmitter {
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
    /// Starts (or resumes) looping playback.
    fn play(&mut self);
}

pub type SharedEmitter = Rc<RefCell<dyn AudioEmitter>>;

/// A per-widget channel for short effect cues, looked up by clip name.
pub trait EffectChannel {
    fn play_one_shot(&mut self, resources: &ResourceManager, clip: &str);
}

/// Hands out effect channels to widgets that need click feedback.
pub trait AudioMixer {
    fn create_effect_channel(&mut self) -> Box<dyn EffectChannel>;
}

/// Rodio-backed audio output. When no output device is available the engine
/// runs silent: emitters and channels are still handed out and keep
/// tracking volume, they just produce no sound.
pub struct AudioEngine {
    handle: Option<OutputStreamHandle>,
    _stream: Option<OutputStream>,
}

impl AudioEngine {
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                handle: Some(handle),
                _stream: Some(stream),
            },
            Err(err) => {
                tracing::warn!(%err, "no audio output device, running silent");
                Self {
                    handle: None,
                    _stream: None,
                }
            }
        }
    }

    /// Creates a looping emitter for `clip`. Decoding is deferred until the
    /// first `play` call.
    pub fn create_emitter(&self, clip: Arc<[u8]>) -> SharedEmitter {
        Rc::new(RefCell::new(StreamEmitter {
            sink: self.make_sink(),
            clip,
            started: false,
            volume: 1.0,
        }))
    }

    fn make_sink(&self) -> Option<Sink> {
        let handle = self.handle.as_ref()?;
        match Sink::try_new(handle) {
            Ok(sink) => Some(sink),
            Err(err) => {
                tracing::warn!(%err, "failed to open audio sink");
                None
            }
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioMixer for AudioEngine {
    fn create_effect_channel(&mut self) -> Box<dyn EffectChannel> {
        Box::new(EffectSink {
            sink: self.make_sink(),
        })
    }
}

struct StreamEmitter {
    sink: Option<Sink>,
    clip: Arc<[u8]>,
    started: bool,
    volume: f32,
}

impl AudioEmitter for StreamEmitter {
    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume);
        }
    }

    fn play(&mut self) {
        let Some(sink) = &self.sink else { return };
        if !self.started {
            match Decoder::new(Cursor::new(self.clip.clone())) {
                Ok(source) => {
                    sink.append(source.repeat_infinite());
                    self.started = true;
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to decode music clip");
                    return;
                }
            }
        }
        sink.play();
    }
}

struct EffectSink {
    sink: Option<Sink>,
}

impl EffectChannel for EffectSink {
    fn play_one_shot(&mut self, resources: &ResourceManager, clip: &str) {
        let Some(sink) = &self.sink else { return };
        let Some(bytes) = resources.clip(clip) else {
            tracing::debug!(clip, "cue clip not loaded, skipping");
            return;
        };
        match Decoder::new(Cursor::new(bytes)) {
            Ok(source) => sink.append(source),
            Err(err) => tracing::warn!(%err, clip, "failed to decode cue clip"),
        }
    }
}
