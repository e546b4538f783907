// crates/plastic-layout/src/constraints.rs

/// Constraint kinds remembered along the horizontal axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstraintX {
    #[default]
    None,
    Left,
    Right,
    CenterX,
    Width,
}

/// Constraint kinds remembered along the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstraintY {
    #[default]
    None,
    Top,
    Bottom,
    CenterY,
    Height,
}

/// The two most recent distinct constraint kinds applied along one axis.
///
/// Recording a kind equal to `newest` leaves the window untouched, so `oldest`
/// is always the last *different* kind seen before the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisHistory<K> {
    oldest: K,
    newest: K,
}

impl<K: Copy + PartialEq + Default> AxisHistory<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: K) {
        if self.newest != kind {
            self.oldest = self.newest;
            self.newest = kind;
        }
    }

    pub fn oldest(&self) -> K {
        self.oldest
    }

    pub fn newest(&self) -> K {
        self.newest
    }
}
