use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

/// Named audio clip bytes, loaded once and shared with the audio engine.
#[derive(Default, Debug)]
pub struct ResourceManager {
    clips: HashMap<String, Arc<[u8]>>,
}

impl ResourceManager {
    pub fn register_clip(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        let name = name.into();
        tracing::debug!(%name, bytes = bytes.len(), "registering audio clip");
        self.clips.insert(name, bytes.into());
    }

    pub fn load_clip_file(&mut self, name: impl Into<String>, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read audio clip {}", path.display()))?;
        self.register_clip(name, bytes);
        Ok(())
    }

    pub fn clip(&self, name: &str) -> Option<Arc<[u8]>> {
        self.clips.get(name).cloned()
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}
