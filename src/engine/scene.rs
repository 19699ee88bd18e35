use crate::engine::audio::SharedEmitter;

#[derive(Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn add_node(&mut self, node: SceneNode) {
        tracing::debug!(name = %node.name, tag = ?node.tag, "adding scene node");
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node carrying `tag` that also has an audio emitter attached.
    pub fn find_audio_by_tag(&self, tag: &str) -> Option<SharedEmitter> {
        self.nodes
            .iter()
            .filter(|node| node.tag.as_deref() == Some(tag))
            .find_map(|node| node.emitter.clone())
    }
}

pub struct SceneNode {
    pub name: String,
    pub tag: Option<String>,
    emitter: Option<SharedEmitter>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            emitter: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_emitter(mut self, emitter: SharedEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }
}
