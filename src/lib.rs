// src/lib.rs
//! Anchor-based layout for trees of rectangular regions.
//!
//! Declare the regions of a pass on a [`HierarchyManager`], pin their edges to
//! each other's anchors, then read back parent-relative frames.

pub use plastic_core::{
    multiplier_for_reference_size, EdgeInsets, LayoutDescription, NodeDeclaration, PlasticError, Rect, Result,
    Size, Value,
};
pub use plastic_layout::{
    compute_layout, Anchor, AnchorKind, Anchors, HierarchyManager, LayoutResult, ListDelegate, PlasticLayout,
    PlasticView, ViewMut,
};
