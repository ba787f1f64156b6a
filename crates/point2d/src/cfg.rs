//! Tolerance defaults for approximate point comparison.
//!
//! Policy
//! - A single fixed constant covers normal use. Callers that compare results
//!   of long transform chains can pass their own `Tolerance`.

/// Max-abs per-coordinate epsilon used by `Point2D::approx_eq`.
pub const APPROX_EPS: f64 = 1e-9;

/// Comparison tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub eps: f64,
}

impl Tolerance {
    #[inline]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// `|a - b| <= eps`. Always false when either side is NaN.
    #[inline]
    pub fn close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: APPROX_EPS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_approx_eps() {
        assert_eq!(Tolerance::default().eps, APPROX_EPS);
    }

    #[test]
    fn close_is_inclusive_and_rejects_nan() {
        let tol = Tolerance::new(0.5);
        assert!(tol.close(1.0, 1.5));
        assert!(!tol.close(1.0, 1.6));
        assert!(!tol.close(f64::NAN, 1.0));
    }
}
