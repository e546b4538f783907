// crates/plastic-layout/src/helpers.rs
//! Common placements built from the primitive setters.
//!
//! Each helper is a fixed sequence of setter calls, so it interacts with
//! earlier constraints through the same two-slot history.

use plastic_core::{EdgeInsets, Value};

use crate::anchor::{Anchor, AnchorKind, Anchors, Axis};
use crate::hierarchy::ViewMut;

impl ViewMut<'_> {
    /// Pin all four edges inside `target`
    pub fn fill(&mut self, target: &Anchors, insets: EdgeInsets) {
        self.fill_vertically(target, insets);
        self.fill_horizontally(target, insets);
    }

    pub fn fill_horizontally(&mut self, target: &Anchors, insets: EdgeInsets) {
        self.set_left(target.left, insets.left);
        self.set_right(target.right, -insets.right);
    }

    pub fn fill_vertically(&mut self, target: &Anchors, insets: EdgeInsets) {
        self.set_top(target.top, insets.top);
        self.set_bottom(target.bottom, -insets.bottom);
    }

    /// Full height of `target`, hugging its left edge. Width is left as is.
    pub fn cover_left(&mut self, target: &Anchors, insets: EdgeInsets) {
        self.fill_vertically(target, insets);
        self.set_left(target.left, insets.left);
    }

    pub fn cover_right(&mut self, target: &Anchors, insets: EdgeInsets) {
        self.fill_vertically(target, insets);
        self.set_right(target.right, -insets.right);
    }

    /// Full width of `target`, hugging its top edge. Height is left as is.
    pub fn as_header(&mut self, target: &Anchors, insets: EdgeInsets) {
        self.fill_horizontally(target, insets);
        self.set_top(target.top, insets.top);
    }

    pub fn as_footer(&mut self, target: &Anchors, insets: EdgeInsets) {
        self.fill_horizontally(target, insets);
        self.set_bottom(target.bottom, -insets.bottom);
    }

    /// Center on the midpoint of two anchors of the same axis
    pub fn center_between(&mut self, first: Anchor, second: Anchor) {
        debug_assert_eq!(
            first.kind().axis(),
            second.kind().axis(),
            "center_between needs anchors on one axis"
        );

        let middle = (first.coordinate() + second.coordinate()) / 2.0;
        match first.kind().axis() {
            Axis::Horizontal => self.set_center_x(Anchor::absolute(AnchorKind::CenterX, middle), Value::ZERO),
            Axis::Vertical => self.set_center_y(Anchor::absolute(AnchorKind::CenterY, middle), Value::ZERO),
        }
    }
}
