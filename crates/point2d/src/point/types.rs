use std::fmt;

use nalgebra::{Point2, Vector2};

use crate::cfg::Tolerance;

/// A point in the plane with non-NaN `f64` coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// The point (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point with the given coordinates. A NaN coordinate is dropped and
    /// stays at 0.
    pub fn new(x: f64, y: f64) -> Self {
        let mut p = Self::origin();
        p.set_x(x);
        p.set_y(y);
        p
    }

    /// Copy of `other`, or the origin when it is absent.
    pub fn from_point(other: Option<&Point2D>) -> Self {
        let mut p = Self::origin();
        if let Some(other) = other {
            p.set_x(other.x);
            p.set_y(other.y);
        }
        p
    }

    /// Sets x unless `value` is NaN.
    pub fn set_x(&mut self, value: f64) {
        if value.is_nan() {
            tracing::trace!(current = self.x, "ignoring NaN x");
            return;
        }
        self.x = value;
    }

    /// Sets y unless `value` is NaN.
    pub fn set_y(&mut self, value: f64) {
        if value.is_nan() {
            tracing::trace!(current = self.y, "ignoring NaN y");
            return;
        }
        self.y = value;
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Max-abs comparison with the default tolerance.
    pub fn approx_eq(&self, other: &Point2D) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }

    pub fn approx_eq_with(&self, other: &Point2D, tol: Tolerance) -> bool {
        tol.close(self.x, other.x) && tol.close(self.y, other.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2<f64>> for Point2D {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D> for Vector2<f64> {
    fn from(p: Point2D) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Point2D> for Point2<f64> {
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}
