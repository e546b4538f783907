// crates/plastic-layout/src/lib.rs

use std::collections::HashMap;

use plastic_core::{LayoutDescription, Rect, Result};
use tracing::debug;

pub mod anchor;
pub mod constraints;
pub mod helpers;
pub mod hierarchy;
pub mod list;
pub mod plastic_view;

pub use anchor::*;
pub use constraints::*;
pub use hierarchy::*;
pub use list::*;
pub use plastic_view::*;

/// Index of a view inside its layout pass
pub type NodeId = usize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub frames: HashMap<String, Rect>,
}

impl LayoutResult {
    /// Parent-relative frame of `key`
    pub fn frame(&self, key: &str) -> Option<Rect> {
        self.frames.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Issues the constraints of a layout pass
pub trait PlasticLayout {
    fn layout(&self, views: &mut HierarchyManager);
}

impl<F> PlasticLayout for F
where
    F: Fn(&mut HierarchyManager),
{
    fn layout(&self, views: &mut HierarchyManager) {
        self(views)
    }
}

/// Run one complete pass: declare every node, apply `layout`, collect the frames
pub fn compute_layout(description: &LayoutDescription, layout: &impl PlasticLayout) -> Result<LayoutResult> {
    let mut views = HierarchyManager::from_description(description)?;
    debug!("Starting layout pass over {} views", views.len());

    layout.layout(&mut views);
    Ok(views.finish())
}
