// crates/plastic-layout/src/hierarchy.rs
//! Node registry and coordinate conversions for one layout pass.
//!
//! Anchors live in a single absolute space rooted at the tree's root while
//! frames are stored relative to the parent. Setters receive the conversion
//! as a [`CoordinateSpace`] built from the parent's current absolute origin,
//! so views never hold a pointer back into the manager.

use std::collections::HashMap;
use std::ops::Deref;

use glam::Vec2;
use plastic_core::{LayoutDescription, PlasticError, Rect, Result, Size, Value};
use tracing::debug;

use crate::anchor::Anchor;
use crate::plastic_view::PlasticView;
use crate::{LayoutResult, NodeId};

/// Converts absolute coordinates into the space a frame is stored in
pub trait CoordinateSpace {
    fn to_local_x(&self, absolute: f32) -> f32;
    fn to_local_y(&self, absolute: f32) -> f32;
}

/// Coordinate system of a node's parent, identified by the parent's absolute origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentSpace {
    origin: Vec2,
}

impl ParentSpace {
    pub fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn to_absolute(&self, local: Vec2) -> Vec2 {
        local + self.origin
    }
}

impl CoordinateSpace for ParentSpace {
    fn to_local_x(&self, absolute: f32) -> f32 {
        absolute - self.origin.x
    }

    fn to_local_y(&self, absolute: f32) -> f32 {
        absolute - self.origin.y
    }
}

#[derive(Debug, Default)]
pub struct HierarchyManager {
    index: HashMap<String, NodeId>,
    views: Vec<PlasticView>,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
}

impl HierarchyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a manager holding every node of `description`, parents first
    pub fn from_description(description: &LayoutDescription) -> Result<Self> {
        let mut manager = Self::new();
        for node in description.ordered()? {
            manager.declare(
                &node.key,
                node.parent.as_deref(),
                node.multiplier,
                node.frame.unwrap_or(Rect::ZERO),
            )?;
        }
        Ok(manager)
    }

    /// Register a node. `frame` is expressed in the parent's coordinate system.
    pub fn declare(&mut self, key: &str, parent: Option<&str>, multiplier: f32, frame: Rect) -> Result<NodeId> {
        if self.index.contains_key(key) {
            return Err(PlasticError::DuplicateKey(key.to_string()));
        }

        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(PlasticError::Description(format!(
                "multiplier of {} must be a positive number, got {}",
                key, multiplier
            )));
        }

        let parent_id = match parent {
            Some(parent) => Some(*self.index.get(parent).ok_or_else(|| PlasticError::UnknownParent {
                key: key.to_string(),
                parent: parent.to_string(),
            })?),
            None => None,
        };

        let parent_origin = parent_id
            .map(|p| self.views[p].absolute_origin())
            .unwrap_or(Vec2::ZERO);

        let id = self.views.len();
        self.views.push(PlasticView::new(
            id,
            key.to_string(),
            multiplier,
            frame,
            parent_origin + frame.origin(),
        ));
        self.parents.push(parent_id);
        self.children.push(Vec::new());
        if let Some(p) = parent_id {
            self.children[p].push(id);
        }
        self.index.insert(key.to_string(), id);

        debug!("Declared view {} (id={}, parent={:?}, multiplier={})", key, id, parent, multiplier);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn id_of(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    fn expect_id(&self, key: &str) -> NodeId {
        match self.index.get(key) {
            Some(&id) => id,
            None => panic!("view {} was never declared in this layout pass", key),
        }
    }

    /// Keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|view| view.key())
    }

    pub fn get(&self, key: &str) -> Option<&PlasticView> {
        self.index.get(key).map(|&id| &self.views[id])
    }

    /// Panics if `key` was never declared.
    pub fn view(&self, key: &str) -> &PlasticView {
        &self.views[self.expect_id(key)]
    }

    /// Mutable handle for applying constraints. Panics if `key` was never declared.
    pub fn view_mut(&mut self, key: &str) -> ViewMut<'_> {
        let id = self.expect_id(key);
        self.handle(id)
    }

    pub fn try_view_mut(&mut self, key: &str) -> Result<ViewMut<'_>> {
        let id = self
            .id_of(key)
            .ok_or_else(|| PlasticError::UnknownKey(key.to_string()))?;
        Ok(self.handle(id))
    }

    fn handle(&mut self, id: NodeId) -> ViewMut<'_> {
        // A view is never its own parent, so the snapshot stays valid while the view mutates.
        let space = self.space_of(id);
        let view = &mut self.views[id];
        view.follow_parent(&space);
        ViewMut { view, space }
    }

    pub fn parent_of(&self, key: &str) -> Option<&str> {
        self.parents[self.expect_id(key)].map(|p| self.views[p].key())
    }

    pub fn children_of(&self, key: &str) -> Vec<&str> {
        self.children[self.expect_id(key)]
            .iter()
            .map(|&c| self.views[c].key())
            .collect()
    }

    fn space_of(&self, id: NodeId) -> ParentSpace {
        let origin = self.parents[id]
            .map(|p| self.views[p].absolute_origin())
            .unwrap_or(Vec2::ZERO);
        ParentSpace::new(origin)
    }

    /// Coordinate system the frame of `key` is stored in
    pub fn parent_space(&self, key: &str) -> ParentSpace {
        self.space_of(self.expect_id(key))
    }

    pub fn absolute_to_parent_local_x(&self, value: f32, key: &str) -> f32 {
        self.parent_space(key).to_local_x(value)
    }

    pub fn absolute_to_parent_local_y(&self, value: f32, key: &str) -> f32 {
        self.parent_space(key).to_local_y(value)
    }

    pub fn parent_local_to_absolute(&self, local: Vec2, key: &str) -> Vec2 {
        self.parent_space(key).to_absolute(local)
    }

    /// End the pass, keeping only the parent-relative frame of every node
    pub fn finish(self) -> LayoutResult {
        let frames: HashMap<String, Rect> = self
            .views
            .into_iter()
            .map(|view| (view.key().to_string(), view.frame()))
            .collect();

        debug!("Layout pass finished with {} views", frames.len());
        LayoutResult { frames }
    }
}

/// A view borrowed for mutation together with its parent's coordinate space
pub struct ViewMut<'a> {
    view: &'a mut PlasticView,
    space: ParentSpace,
}

impl Deref for ViewMut<'_> {
    type Target = PlasticView;

    fn deref(&self) -> &PlasticView {
        &*self.view
    }
}

impl ViewMut<'_> {
    pub fn space(&self) -> ParentSpace {
        self.space
    }

    pub fn set_left(&mut self, anchor: Anchor, offset: Value) {
        self.view.set_left(anchor, offset, &self.space);
    }

    pub fn set_right(&mut self, anchor: Anchor, offset: Value) {
        self.view.set_right(anchor, offset, &self.space);
    }

    pub fn set_center_x(&mut self, anchor: Anchor, offset: Value) {
        self.view.set_center_x(anchor, offset, &self.space);
    }

    pub fn set_width(&mut self, value: Value) {
        self.view.set_width(value, &self.space);
    }

    pub fn set_top(&mut self, anchor: Anchor, offset: Value) {
        self.view.set_top(anchor, offset, &self.space);
    }

    pub fn set_bottom(&mut self, anchor: Anchor, offset: Value) {
        self.view.set_bottom(anchor, offset, &self.space);
    }

    pub fn set_center_y(&mut self, anchor: Anchor, offset: Value) {
        self.view.set_center_y(anchor, offset, &self.space);
    }

    pub fn set_height(&mut self, value: Value) {
        self.view.set_height(value, &self.space);
    }

    pub fn set_size(&mut self, size: Size) {
        self.view.set_size(size, &self.space);
    }
}
