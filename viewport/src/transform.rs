//! 2D affine transforms.
//!
//! A [`Transform`] maps a point `(x, y)` to
//!
//! ```text
//! x' = scale_x * x + skew_x  * y + translate_x
//! y' = skew_y  * x + scale_y * y + translate_y
//! ```
//!
//! Composition uses `*`: `a * b` applies `b` first, then `a`. It is
//! associative but not commutative, so the order of a chain matters.

use std::ops::Mul;

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// A point in either scene or window space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Immutable 2x3 affine matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale_x: f64,
    pub skew_x: f64,
    pub skew_y: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        skew_x: 0.0,
        skew_y: 0.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Build a transform from its six matrix entries.
    #[must_use]
    pub const fn new(scale_x: f64, skew_x: f64, skew_y: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self { scale_x, skew_x, skew_y, scale_y, translate_x, translate_y }
    }

    /// Pure translation by `(dx, dy)`.
    #[must_use]
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self { translate_x: dx, translate_y: dy, ..Self::IDENTITY }
    }

    /// Pure scale about the origin.
    #[must_use]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self { scale_x: sx, scale_y: sy, ..Self::IDENTITY }
    }

    /// Uniform scale about the origin.
    #[must_use]
    pub const fn uniform_scale(s: f64) -> Self {
        Self::scale(s, s)
    }

    /// The transform equivalent to applying `inner` first, then `self`.
    #[must_use]
    pub fn compose(self, inner: Self) -> Self {
        Self {
            scale_x: self.scale_x * inner.scale_x + self.skew_x * inner.skew_y,
            skew_x: self.scale_x * inner.skew_x + self.skew_x * inner.scale_y,
            skew_y: self.skew_y * inner.scale_x + self.scale_y * inner.skew_y,
            scale_y: self.skew_y * inner.skew_x + self.scale_y * inner.scale_y,
            translate_x: self.scale_x * inner.translate_x + self.skew_x * inner.translate_y + self.translate_x,
            translate_y: self.skew_y * inner.translate_x + self.scale_y * inner.translate_y + self.translate_y,
        }
    }

    /// Map a point through this transform.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.scale_x * p.x + self.skew_x * p.y + self.translate_x,
            y: self.skew_y * p.x + self.scale_y * p.y + self.translate_y,
        }
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.scale_x * self.scale_y - self.skew_x * self.skew_y
    }

    /// The inverse transform, or `None` when the matrix is singular or not finite.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        let scale_x = self.scale_y * inv;
        let skew_x = -self.skew_x * inv;
        let skew_y = -self.skew_y * inv;
        let scale_y = self.scale_x * inv;
        Some(Self {
            scale_x,
            skew_x,
            skew_y,
            scale_y,
            translate_x: -(scale_x * self.translate_x + skew_x * self.translate_y),
            translate_y: -(skew_y * self.translate_x + scale_y * self.translate_y),
        })
    }

    /// Whether every entry is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.scale_x, self.skew_x, self.skew_y, self.scale_y, self.translate_x, self.translate_y]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.compose(rhs)
    }
}

impl Mul<Point> for Transform {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.apply(rhs)
    }
}
