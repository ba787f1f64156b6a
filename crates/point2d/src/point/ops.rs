//! Planar operations on `Point2D`.
//!
//! Derived points are always built through `Point2D::new` or the setters, so a
//! NaN produced by the arithmetic (e.g. `∞ · 0`) never reaches a coordinate.

use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::types::Point2D;
use crate::capability::{RandomSource, Translation};
use crate::error::PointError;

impl Point2D {
    /// Both coordinates multiplied by `factor`. A NaN factor returns the
    /// point unchanged.
    pub fn scale(&self, factor: f64) -> Point2D {
        if factor.is_nan() {
            tracing::trace!("ignoring NaN scale factor");
            return *self;
        }
        Point2D::new(self.x() * factor, self.y() * factor)
    }

    /// Reflection across the horizontal line `y = origin.y`.
    pub fn horizontal_symmetry(&self, origin: Option<&Point2D>) -> Result<Point2D, PointError> {
        let origin = origin.ok_or_else(|| PointError::missing("origin"))?;
        Ok(Point2D::new(self.x(), 2.0 * origin.y() - self.y()))
    }

    /// Angle in radians of the vector from `self` to `other`. NaN when
    /// `other` is absent.
    ///
    /// Not a four-quadrant `atan2`:
    /// - `dx == +0.0` (total order, so `-0.0` and NaN fall through): π/2, or
    ///   3π/2 when `dy < 0`.
    /// - `dx < 0`: π − atan(−dy/dx).
    /// - otherwise: atan(dy/dx), which is negative below the horizontal.
    pub fn compute_angle(&self, other: Option<&Point2D>) -> f64 {
        let Some(other) = other else {
            return f64::NAN;
        };
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();

        if dx.total_cmp(&0.0) == Ordering::Equal {
            if dy < 0.0 {
                TAU - FRAC_PI_2
            } else {
                FRAC_PI_2
            }
        } else if dx < 0.0 {
            PI - (-dy / dx).atan()
        } else {
            (dy / dx).atan()
        }
    }

    /// Rotation by `theta` radians about `center`; `None` when the center is
    /// absent.
    ///
    /// A negative `theta` is shifted by 2π before reducing modulo 2π.
    pub fn rotate_point(&self, center: Option<&Point2D>, theta: f64) -> Option<Point2D> {
        let Some(center) = center else {
            tracing::trace!(theta, "no rotation center");
            return None;
        };
        let (cx, cy) = (center.x(), center.y());

        let mut angle = theta;
        if angle < 0.0 {
            angle += TAU;
        }
        angle %= TAU;
        let (sin, cos) = angle.sin_cos();

        let dx = self.x() - cx;
        let dy = self.y() - cy;
        let mut rotated = Point2D::origin();
        rotated.set_x(cos * dx - sin * dy + cx);
        rotated.set_y(sin * dx + cos * dy + cy);
        Some(rotated)
    }

    /// Point reflection through `center` (rotation by π).
    pub fn central_symmetry(&self, center: Option<&Point2D>) -> Result<Point2D, PointError> {
        let center = center.ok_or_else(|| PointError::missing("center"))?;
        self.rotate_point(Some(center), PI)
            .ok_or_else(|| PointError::missing("center"))
    }

    /// Midpoint of `self` and `other`.
    pub fn middle_point(&self, other: Option<&Point2D>) -> Result<Point2D, PointError> {
        let other = other.ok_or_else(|| PointError::missing("other"))?;
        Ok(Point2D::new(
            (self.x() + other.x()) / 2.0,
            (self.y() + other.y()) / 2.0,
        ))
    }

    /// Moves the point by `(tx, ty)`.
    ///
    /// The outer gate never closes: NaN compares unequal to everything,
    /// itself included. Filtering happens per axis in the setters, so a NaN
    /// delta on one axis still lets the other one move.
    #[allow(invalid_nan_comparisons)]
    pub fn translate(&mut self, tx: f64, ty: f64) {
        if f64::NAN != tx || f64::NAN != ty {
            self.set_x(self.x() + tx);
            self.set_y(self.y() + ty);
        }
    }

    /// Moves the point by a translation vector; no-op when absent.
    pub fn translate_by<T: Translation + ?Sized>(&mut self, vector: Option<&T>) {
        match vector {
            Some(v) => self.translate(v.tx(), v.ty()),
            None => tracing::trace!("no translation vector"),
        }
    }

    /// Sets x from one draw of `random_x`, then y from one draw of `random_y`.
    pub fn set_point<RX, RY>(&mut self, random_x: &mut RX, random_y: &mut RY)
    where
        RX: RandomSource + ?Sized,
        RY: RandomSource + ?Sized,
    {
        self.set_x(f64::from(random_x.next_int()));
        self.set_y(f64::from(random_y.next_int()));
    }
}
