// crates/plastic-layout/src/plastic_view.rs
//! Per-node layout state and the constraint setters that resolve it.
//!
//! Each setter resolves immediately. Along each axis the node remembers the
//! two most recent distinct constraint kinds; a new constraint is combined
//! with the older of the two to decide which edge stays put and whether the
//! size changes.

use glam::Vec2;
use plastic_core::{Rect, Size, Value};
use tracing::trace;

use crate::anchor::{Anchor, AnchorKind, Anchors};
use crate::constraints::{AxisHistory, ConstraintX, ConstraintY};
use crate::hierarchy::{CoordinateSpace, ParentSpace};
use crate::NodeId;

#[derive(Debug, Clone)]
pub struct PlasticView {
    id: NodeId,
    key: String,
    /// Stored in the parent's coordinate system
    frame: Rect,
    absolute_origin: Vec2,
    multiplier: f32,
    history_x: AxisHistory<ConstraintX>,
    history_y: AxisHistory<ConstraintY>,
}

impl PlasticView {
    pub(crate) fn new(id: NodeId, key: String, multiplier: f32, frame: Rect, absolute_origin: Vec2) -> Self {
        Self {
            id,
            key,
            frame,
            absolute_origin,
            multiplier,
            history_x: AxisHistory::new(),
            history_y: AxisHistory::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn absolute_origin(&self) -> Vec2 {
        self.absolute_origin
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn scale_value(&self, value: Value) -> f32 {
        value.scale(self.multiplier)
    }

    pub fn constraint_x(&self) -> AxisHistory<ConstraintX> {
        self.history_x
    }

    pub fn constraint_y(&self) -> AxisHistory<ConstraintY> {
        self.history_y
    }

    fn anchor(&self, kind: AnchorKind) -> Anchor {
        Anchor::new(kind, self.id, self.absolute_origin, &self.frame)
    }

    pub fn left(&self) -> Anchor {
        self.anchor(AnchorKind::Left)
    }

    pub fn right(&self) -> Anchor {
        self.anchor(AnchorKind::Right)
    }

    pub fn center_x(&self) -> Anchor {
        self.anchor(AnchorKind::CenterX)
    }

    pub fn top(&self) -> Anchor {
        self.anchor(AnchorKind::Top)
    }

    pub fn bottom(&self) -> Anchor {
        self.anchor(AnchorKind::Bottom)
    }

    pub fn center_y(&self) -> Anchor {
        self.anchor(AnchorKind::CenterY)
    }

    pub fn anchors(&self) -> Anchors {
        Anchors::new(self.id, self.absolute_origin, &self.frame)
    }

    pub fn width(&self) -> Value {
        Value::Fixed(self.frame.width)
    }

    pub fn height(&self) -> Value {
        Value::Fixed(self.frame.height)
    }

    pub fn size(&self) -> Size {
        Size::fixed(self.frame.width, self.frame.height)
    }

    /// Re-derive the absolute origin from the stored frame along every axis
    /// with no position constraint yet, so an unpositioned view follows its parent.
    pub(crate) fn follow_parent(&mut self, space: &ParentSpace) {
        let unpositioned_x = |kind: ConstraintX| matches!(kind, ConstraintX::None | ConstraintX::Width);
        if unpositioned_x(self.history_x.oldest()) && unpositioned_x(self.history_x.newest()) {
            self.absolute_origin.x = space.origin().x + self.frame.x;
        }

        let unpositioned_y = |kind: ConstraintY| matches!(kind, ConstraintY::None | ConstraintY::Height);
        if unpositioned_y(self.history_y.oldest()) && unpositioned_y(self.history_y.newest()) {
            self.absolute_origin.y = space.origin().y + self.frame.y;
        }
    }

    // Frame and absolute origin are only ever written together.
    fn update_x(&mut self, absolute_x: f32, space: &impl CoordinateSpace) {
        self.frame.x = space.to_local_x(absolute_x);
        self.absolute_origin.x = absolute_x;
    }

    fn update_y(&mut self, absolute_y: f32, space: &impl CoordinateSpace) {
        self.frame.y = space.to_local_y(absolute_y);
        self.absolute_origin.y = absolute_y;
    }

    fn trace_resolved(&self, constraint: &str) {
        trace!(
            "View {} resolved {}: frame=({}, {}, {}, {}), absolute={:?}",
            self.key,
            constraint,
            self.frame.x,
            self.frame.y,
            self.frame.width,
            self.frame.height,
            self.absolute_origin
        );
    }

    pub(crate) fn set_left(&mut self, anchor: Anchor, offset: Value, space: &impl CoordinateSpace) {
        self.history_x.record(ConstraintX::Left);

        let new_left = anchor.coordinate() + self.scale_value(offset);
        let new_width = match self.history_x.oldest() {
            ConstraintX::Right => (self.right().coordinate() - new_left).max(0.0),
            ConstraintX::CenterX => (2.0 * (self.center_x().coordinate() - new_left)).max(0.0),
            _ => self.frame.width,
        };

        self.update_x(new_left, space);
        self.frame.width = new_width;
        self.trace_resolved("left");
    }

    pub(crate) fn set_right(&mut self, anchor: Anchor, offset: Value, space: &impl CoordinateSpace) {
        self.history_x.record(ConstraintX::Right);

        let new_right = anchor.coordinate() + self.scale_value(offset);
        let new_width = match self.history_x.oldest() {
            ConstraintX::Left => (new_right - self.left().coordinate()).max(0.0),
            ConstraintX::CenterX => (2.0 * (new_right - self.center_x().coordinate())).max(0.0),
            _ => self.frame.width,
        };

        self.update_x(new_right - new_width, space);
        self.frame.width = new_width;
        self.trace_resolved("right");
    }

    pub(crate) fn set_center_x(&mut self, anchor: Anchor, offset: Value, space: &impl CoordinateSpace) {
        self.history_x.record(ConstraintX::CenterX);

        let new_center = anchor.coordinate() + self.scale_value(offset);
        let new_width = match self.history_x.oldest() {
            ConstraintX::Left => (2.0 * (new_center - self.left().coordinate())).max(0.0),
            ConstraintX::Right => (2.0 * (self.right().coordinate() - new_center)).max(0.0),
            _ => self.frame.width,
        };

        self.update_x(new_center - new_width / 2.0, space);
        self.frame.width = new_width;
        self.trace_resolved("center_x");
    }

    /// Sets the width, keeping fixed whichever horizontal edge the previous
    /// constraint pinned. With no previous position constraint the left edge holds.
    pub(crate) fn set_width(&mut self, value: Value, space: &impl CoordinateSpace) {
        self.history_x.record(ConstraintX::Width);

        let new_width = self.scale_value(value).max(0.0);
        let new_left = match self.history_x.oldest() {
            ConstraintX::Right => self.right().coordinate() - new_width,
            ConstraintX::CenterX => self.center_x().coordinate() - new_width / 2.0,
            _ => self.left().coordinate(),
        };

        self.update_x(new_left, space);
        self.frame.width = new_width;
        self.trace_resolved("width");
    }

    pub(crate) fn set_top(&mut self, anchor: Anchor, offset: Value, space: &impl CoordinateSpace) {
        self.history_y.record(ConstraintY::Top);

        let new_top = anchor.coordinate() + self.scale_value(offset);
        let new_height = match self.history_y.oldest() {
            ConstraintY::Bottom => (self.bottom().coordinate() - new_top).max(0.0),
            ConstraintY::CenterY => (2.0 * (self.center_y().coordinate() - new_top)).max(0.0),
            _ => self.frame.height,
        };

        self.update_y(new_top, space);
        self.frame.height = new_height;
        self.trace_resolved("top");
    }

    pub(crate) fn set_bottom(&mut self, anchor: Anchor, offset: Value, space: &impl CoordinateSpace) {
        self.history_y.record(ConstraintY::Bottom);

        let new_bottom = anchor.coordinate() + self.scale_value(offset);
        let new_height = match self.history_y.oldest() {
            ConstraintY::Top => (new_bottom - self.top().coordinate()).max(0.0),
            ConstraintY::CenterY => (2.0 * (new_bottom - self.center_y().coordinate())).max(0.0),
            _ => self.frame.height,
        };

        self.update_y(new_bottom - new_height, space);
        self.frame.height = new_height;
        self.trace_resolved("bottom");
    }

    pub(crate) fn set_center_y(&mut self, anchor: Anchor, offset: Value, space: &impl CoordinateSpace) {
        self.history_y.record(ConstraintY::CenterY);

        let new_center = anchor.coordinate() + self.scale_value(offset);
        let new_height = match self.history_y.oldest() {
            ConstraintY::Top => (2.0 * (new_center - self.top().coordinate())).max(0.0),
            ConstraintY::Bottom => (2.0 * (self.bottom().coordinate() - new_center)).max(0.0),
            _ => self.frame.height,
        };

        self.update_y(new_center - new_height / 2.0, space);
        self.frame.height = new_height;
        self.trace_resolved("center_y");
    }

    /// Vertical counterpart of [`PlasticView::set_width`]; the top edge holds by default.
    pub(crate) fn set_height(&mut self, value: Value, space: &impl CoordinateSpace) {
        self.history_y.record(ConstraintY::Height);

        let new_height = self.scale_value(value).max(0.0);
        let new_top = match self.history_y.oldest() {
            ConstraintY::Bottom => self.bottom().coordinate() - new_height,
            ConstraintY::CenterY => self.center_y().coordinate() - new_height / 2.0,
            _ => self.top().coordinate(),
        };

        self.update_y(new_top, space);
        self.frame.height = new_height;
        self.trace_resolved("height");
    }

    pub(crate) fn set_size(&mut self, size: Size, space: &impl CoordinateSpace) {
        self.set_height(size.height, space);
        self.set_width(size.width, space);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(parent_origin: Vec2) -> (PlasticView, ParentSpace) {
        let view = PlasticView::new(1, "view".to_string(), 1.0, Rect::ZERO, parent_origin);
        (view, ParentSpace::new(parent_origin))
    }

    #[test]
    fn test_first_edge_keeps_default_size() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_left(Anchor::absolute(AnchorKind::Left, 30.0), Value::ZERO, &space);

        assert_eq!(view.frame(), Rect::new(30.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_right_after_left_stretches() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_left(Anchor::absolute(AnchorKind::Left, 10.0), Value::ZERO, &space);
        view.set_right(Anchor::absolute(AnchorKind::Right, 70.0), Value::ZERO, &space);

        assert_eq!(view.frame(), Rect::new(10.0, 0.0, 60.0, 0.0));
    }

    #[test]
    fn test_center_after_right_mirrors_left_edge() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_right(Anchor::absolute(AnchorKind::Right, 100.0), Value::ZERO, &space);
        view.set_center_x(Anchor::absolute(AnchorKind::CenterX, 80.0), Value::ZERO, &space);

        assert_eq!(view.frame().x, 60.0);
        assert_eq!(view.frame().width, 40.0);
    }

    #[test]
    fn test_width_after_right_keeps_right_edge() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_right(Anchor::absolute(AnchorKind::Right, 100.0), Value::ZERO, &space);
        view.set_width(Value::fixed(30.0), &space);

        assert_eq!(view.right().coordinate(), 100.0);
        assert_eq!(view.frame().x, 70.0);
    }

    #[test]
    fn test_left_after_center_x_mirrors_right_edge() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_center_x(Anchor::absolute(AnchorKind::CenterX, 100.0), Value::ZERO, &space);
        view.set_left(Anchor::absolute(AnchorKind::Left, 60.0), Value::ZERO, &space);

        assert_eq!(view.frame().x, 60.0);
        assert_eq!(view.frame().width, 80.0);
    }

    #[test]
    fn test_right_after_center_x_mirrors_left_edge() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_center_x(Anchor::absolute(AnchorKind::CenterX, 100.0), Value::ZERO, &space);
        view.set_right(Anchor::absolute(AnchorKind::Right, 130.0), Value::ZERO, &space);

        assert_eq!(view.frame().x, 70.0);
        assert_eq!(view.frame().width, 60.0);
    }

    #[test]
    fn test_top_after_center_y_then_center_again() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_center_y(Anchor::absolute(AnchorKind::CenterY, 50.0), Value::ZERO, &space);
        view.set_top(Anchor::absolute(AnchorKind::Top, 30.0), Value::ZERO, &space);

        assert_eq!(view.frame().y, 30.0);
        assert_eq!(view.frame().height, 40.0);

        view.set_center_y(Anchor::absolute(AnchorKind::CenterY, 40.0), Value::ZERO, &space);

        assert_eq!(view.frame().y, 30.0);
        assert_eq!(view.frame().height, 20.0);
    }

    #[test]
    fn test_center_y_after_bottom_keeps_bottom_edge() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_bottom(Anchor::absolute(AnchorKind::Bottom, 90.0), Value::ZERO, &space);
        view.set_center_y(Anchor::absolute(AnchorKind::CenterY, 70.0), Value::ZERO, &space);

        assert_eq!(view.frame().y, 50.0);
        assert_eq!(view.frame().height, 40.0);
    }

    #[test]
    fn test_unconstrained_axes_follow_parent() {
        let mut view = PlasticView::new(1, "view".to_string(), 1.0, Rect::new(5.0, 5.0, 10.0, 10.0), Vec2::new(5.0, 5.0));
        let space = ParentSpace::new(Vec2::ZERO);
        view.set_left(Anchor::absolute(AnchorKind::Left, 30.0), Value::ZERO, &space);
        view.set_height(Value::fixed(10.0), &space);

        view.follow_parent(&ParentSpace::new(Vec2::new(20.0, 40.0)));

        // x is pinned in absolute space; a height alone does not pin y.
        assert_eq!(view.absolute_origin(), Vec2::new(30.0, 45.0));
        assert_eq!(view.frame().origin(), Vec2::new(30.0, 5.0));
    }

    #[test]
    fn test_height_without_position_keeps_top_edge() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_height(Value::fixed(25.0), &space);

        assert_eq!(view.frame(), Rect::new(0.0, 0.0, 0.0, 25.0));
    }

    #[test]
    fn test_bottom_after_center_y() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_center_y(Anchor::absolute(AnchorKind::CenterY, 50.0), Value::ZERO, &space);
        view.set_bottom(Anchor::absolute(AnchorKind::Bottom, 60.0), Value::ZERO, &space);

        assert_eq!(view.frame().y, 40.0);
        assert_eq!(view.frame().height, 20.0);
    }

    #[test]
    fn test_top_after_bottom_stretches() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_bottom(Anchor::absolute(AnchorKind::Bottom, 90.0), Value::ZERO, &space);
        view.set_top(Anchor::absolute(AnchorKind::Top, 30.0), Value::ZERO, &space);

        assert_eq!(view.frame().y, 30.0);
        assert_eq!(view.frame().height, 60.0);
    }

    #[test]
    fn test_scalable_offsets_use_multiplier() {
        let mut view = PlasticView::new(1, "view".to_string(), 2.0, Rect::ZERO, Vec2::ZERO);
        let space = ParentSpace::new(Vec2::ZERO);
        view.set_top(Anchor::zero(AnchorKind::Top), Value::scalable(5.0), &space);
        view.set_height(Value::scalable(10.0), &space);
        view.set_left(Anchor::zero(AnchorKind::Left), Value::fixed(5.0), &space);

        assert_eq!(view.frame(), Rect::new(5.0, 10.0, 0.0, 20.0));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_width(Value::fixed(-10.0), &space);
        view.set_height(Value::scalable(-3.0), &space);

        assert_eq!(view.frame().width, 0.0);
        assert_eq!(view.frame().height, 0.0);
    }

    #[test]
    fn test_frame_is_stored_parent_relative() {
        let (mut view, space) = view_at(Vec2::new(100.0, 40.0));
        view.set_left(Anchor::absolute(AnchorKind::Left, 130.0), Value::ZERO, &space);
        view.set_top(Anchor::absolute(AnchorKind::Top, 45.0), Value::ZERO, &space);

        assert_eq!(view.absolute_origin(), Vec2::new(130.0, 45.0));
        assert_eq!(view.frame().origin(), Vec2::new(30.0, 5.0));
        assert_eq!(view.left().coordinate(), 130.0);
    }

    #[test]
    fn test_size_getters_report_fixed_values() {
        let (mut view, space) = view_at(Vec2::ZERO);
        view.set_size(Size::fixed(12.0, 8.0), &space);

        assert_eq!(view.width(), Value::Fixed(12.0));
        assert_eq!(view.height(), Value::Fixed(8.0));
        assert_eq!(view.size(), Size::fixed(12.0, 8.0));
        assert_eq!(view.constraint_x().newest(), ConstraintX::Width);
        assert_eq!(view.constraint_y().newest(), ConstraintY::Height);
    }
}
