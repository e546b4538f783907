// crates/plastic-layout/src/anchor.rs
use glam::Vec2;
use plastic_core::Rect;

use crate::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    Left,
    Right,
    CenterX,
    Top,
    Bottom,
    CenterY,
}

impl AnchorKind {
    pub fn axis(&self) -> Axis {
        match self {
            AnchorKind::Left | AnchorKind::Right | AnchorKind::CenterX => Axis::Horizontal,
            AnchorKind::Top | AnchorKind::Bottom | AnchorKind::CenterY => Axis::Vertical,
        }
    }

    /// Coordinate of this edge for a node at `absolute_origin` with the given frame size
    fn resolve(&self, absolute_origin: Vec2, frame: &Rect) -> f32 {
        match self {
            AnchorKind::Left => absolute_origin.x,
            AnchorKind::Right => absolute_origin.x + frame.width,
            AnchorKind::CenterX => absolute_origin.x + frame.width / 2.0,
            AnchorKind::Top => absolute_origin.y,
            AnchorKind::Bottom => absolute_origin.y + frame.height,
            AnchorKind::CenterY => absolute_origin.y + frame.height / 2.0,
        }
    }
}

/// An edge or center line of a node, expressed in the shared absolute space.
///
/// Anchors are read from a node's geometry at the moment they are built and
/// keep only the node's id as a back-reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    kind: AnchorKind,
    node: Option<NodeId>,
    coordinate: f32,
}

impl Anchor {
    pub fn new(kind: AnchorKind, node: NodeId, absolute_origin: Vec2, frame: &Rect) -> Self {
        Self {
            kind,
            node: Some(node),
            coordinate: kind.resolve(absolute_origin, frame),
        }
    }

    /// Anchor at a raw absolute coordinate, not tied to any node
    pub fn absolute(kind: AnchorKind, coordinate: f32) -> Self {
        Self {
            kind,
            node: None,
            coordinate,
        }
    }

    pub fn zero(kind: AnchorKind) -> Self {
        Self::absolute(kind, 0.0)
    }

    pub fn kind(&self) -> AnchorKind {
        self.kind
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn coordinate(&self) -> f32 {
        self.coordinate
    }
}

/// All six anchors of a node captured at once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub left: Anchor,
    pub right: Anchor,
    pub center_x: Anchor,
    pub top: Anchor,
    pub bottom: Anchor,
    pub center_y: Anchor,
}

impl Anchors {
    pub fn new(node: NodeId, absolute_origin: Vec2, frame: &Rect) -> Self {
        let anchor = |kind| Anchor::new(kind, node, absolute_origin, frame);
        Self {
            left: anchor(AnchorKind::Left),
            right: anchor(AnchorKind::Right),
            center_x: anchor(AnchorKind::CenterX),
            top: anchor(AnchorKind::Top),
            bottom: anchor(AnchorKind::Bottom),
            center_y: anchor(AnchorKind::CenterY),
        }
    }
}
