// crates/plastic-core/src/description.rs
//! Serializable declaration of the nodes taking part in a layout pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PlasticError, Rect, Result};

fn default_multiplier() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDeclaration {
    pub key: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default = "default_multiplier")]
    pub multiplier: f32,
    /// Initial frame in the parent's coordinate system
    #[serde(default)]
    pub frame: Option<Rect>,
}

impl NodeDeclaration {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            parent: None,
            multiplier: 1.0,
            frame: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = Some(frame);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutDescription {
    pub nodes: Vec<NodeDeclaration>,
}

#[derive(Clone, Copy, PartialEq)]
enum Visit {
    Pending,
    InProgress,
    Done,
}

impl LayoutDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: NodeDeclaration) -> Self {
        self.nodes.push(node);
        self
    }

    /// Declarations sorted so every parent comes before its children.
    ///
    /// Siblings keep their relative declaration order. Fails on duplicate keys,
    /// parents that are never declared, and parent chains that loop.
    pub fn ordered(&self) -> Result<Vec<&NodeDeclaration>> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if index.insert(node.key.as_str(), i).is_some() {
                return Err(PlasticError::DuplicateKey(node.key.clone()));
            }
        }

        let mut parents = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let parent = match &node.parent {
                Some(parent) => Some(*index.get(parent.as_str()).ok_or_else(|| {
                    PlasticError::UnknownParent {
                        key: node.key.clone(),
                        parent: parent.clone(),
                    }
                })?),
                None => None,
            };
            parents.push(parent);
        }

        let mut state = vec![Visit::Pending; self.nodes.len()];
        let mut ordered = Vec::with_capacity(self.nodes.len());

        for start in 0..self.nodes.len() {
            // Walk up to the first ancestor that is already placed, then emit top-down.
            let mut chain = Vec::new();
            let mut current = Some(start);
            while let Some(i) = current {
                match state[i] {
                    Visit::Done => break,
                    Visit::InProgress => {
                        return Err(PlasticError::ParentCycle(self.nodes[i].key.clone()));
                    }
                    Visit::Pending => {
                        state[i] = Visit::InProgress;
                        chain.push(i);
                        current = parents[i];
                    }
                }
            }

            for &i in chain.iter().rev() {
                state[i] = Visit::Done;
                ordered.push(&self.nodes[i]);
            }
        }

        debug!("Ordered {} node declarations", ordered.len());
        Ok(ordered)
    }
}
