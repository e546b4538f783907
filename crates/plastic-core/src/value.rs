// crates/plastic-core/src/value.rs
use std::ops::{Div, Mul, Neg};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{PlasticError, Result};

/// A length that is either absolute or scaled by a node's multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// Absolute length, never scaled
    Fixed(f32),
    /// Length multiplied by the node's multiplier on resolution
    Scalable(f32),
}

impl Value {
    pub const ZERO: Value = Value::Fixed(0.0);

    pub fn fixed(value: f32) -> Self {
        Value::Fixed(value)
    }

    pub fn scalable(value: f32) -> Self {
        Value::Scalable(value)
    }

    /// Resolve to an absolute length for the given multiplier
    pub fn scale(&self, multiplier: f32) -> f32 {
        match self {
            Value::Fixed(v) => *v,
            Value::Scalable(v) => v * multiplier,
        }
    }

    pub fn is_scalable(&self) -> bool {
        matches!(self, Value::Scalable(_))
    }

    fn map(self, f: impl FnOnce(f32) -> f32) -> Self {
        match self {
            Value::Fixed(v) => Value::Fixed(f(v)),
            Value::Scalable(v) => Value::Scalable(f(v)),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        self.map(|v| -v)
    }
}

impl Mul<f32> for Value {
    type Output = Value;

    fn mul(self, rhs: f32) -> Value {
        self.map(|v| v * rhs)
    }
}

impl Div<f32> for Value {
    type Output = Value;

    fn div(self, rhs: f32) -> Value {
        self.map(|v| v / rhs)
    }
}

/// A width/height pair of scalable values
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: Value,
    pub height: Value,
}

impl Size {
    pub const ZERO: Size = Size {
        width: Value::ZERO,
        height: Value::ZERO,
    };

    pub fn new(width: Value, height: Value) -> Self {
        Self { width, height }
    }

    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            width: Value::Fixed(width),
            height: Value::Fixed(height),
        }
    }

    pub fn scalable(width: f32, height: f32) -> Self {
        Self {
            width: Value::Scalable(width),
            height: Value::Scalable(height),
        }
    }

    pub fn scale(&self, multiplier: f32) -> Vec2 {
        Vec2::new(self.width.scale(multiplier), self.height.scale(multiplier))
    }
}

impl Mul<f32> for Size {
    type Output = Size;

    fn mul(self, rhs: f32) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

/// Insets applied when pinning a node inside another one
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: Value,
    pub left: Value,
    pub bottom: Value,
    pub right: Value,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        top: Value::ZERO,
        left: Value::ZERO,
        bottom: Value::ZERO,
        right: Value::ZERO,
    };

    pub fn fixed(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top: Value::Fixed(top),
            left: Value::Fixed(left),
            bottom: Value::Fixed(bottom),
            right: Value::Fixed(right),
        }
    }

    pub fn scalable(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top: Value::Scalable(top),
            left: Value::Scalable(left),
            bottom: Value::Scalable(bottom),
            right: Value::Scalable(right),
        }
    }
}

/// Uniform multiplier that fits a layout designed at `reference` into `actual`.
///
/// Uses the smaller of the two axis ratios so the design keeps its aspect ratio.
pub fn multiplier_for_reference_size(reference: Vec2, actual: Vec2) -> Result<f32> {
    if reference.x <= 0.0 || reference.y <= 0.0 {
        return Err(PlasticError::InvalidReferenceSize {
            width: reference.x,
            height: reference.y,
        });
    }

    if !(actual.x > 0.0 && actual.y > 0.0 && actual.is_finite()) {
        return Err(PlasticError::InvalidTargetSize {
            width: actual.x,
            height: actual.y,
        });
    }

    let scale_x = actual.x / reference.x;
    let scale_y = actual.y / reference.y;
    Ok(scale_x.min(scale_y))
}
