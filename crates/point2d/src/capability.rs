//! Collaborator capabilities consumed by `Point2D`.
//!
//! - `Translation`: read-only X/Y deltas used by `Point2D::translate_by`.
//! - `RandomSource`: one `i32` per call, used once per axis by `Point2D::set_point`.

use nalgebra::Vector2;
use rand::Rng;

/// A translation vector: two read-only deltas.
pub trait Translation {
    fn tx(&self) -> f64;
    fn ty(&self) -> f64;
}

/// Plain translation vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation2 {
    pub tx: f64,
    pub ty: f64,
}

impl Translation2 {
    #[inline]
    pub fn new(tx: f64, ty: f64) -> Self {
        Self { tx, ty }
    }
}

impl Translation for Translation2 {
    #[inline]
    fn tx(&self) -> f64 {
        self.tx
    }
    #[inline]
    fn ty(&self) -> f64 {
        self.ty
    }
}

impl Translation for Vector2<f64> {
    #[inline]
    fn tx(&self) -> f64 {
        self.x
    }
    #[inline]
    fn ty(&self) -> f64 {
        self.y
    }
}

impl Translation for (f64, f64) {
    #[inline]
    fn tx(&self) -> f64 {
        self.0
    }
    #[inline]
    fn ty(&self) -> f64 {
        self.1
    }
}

/// Integer sample source.
pub trait RandomSource {
    /// Next sample, uniform over the whole `i32` range for `rand` generators.
    fn next_int(&mut self) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_int(&mut self) -> i32 {
        self.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn translation_impls_expose_deltas() {
        let t = Translation2::new(1.5, -2.0);
        assert_eq!((t.tx(), t.ty()), (1.5, -2.0));
        let v = vector![3.0, 4.0];
        assert_eq!((v.tx(), v.ty()), (3.0, 4.0));
        let pair = (-1.0, 0.25);
        assert_eq!((pair.tx(), pair.ty()), (-1.0, 0.25));
    }

    #[test]
    fn seeded_rng_is_a_reproducible_source() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let xs: Vec<i32> = (0..8).map(|_| a.next_int()).collect();
        let ys: Vec<i32> = (0..8).map(|_| b.next_int()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn source_works_through_trait_object() {
        let mut rng = StdRng::seed_from_u64(1);
        let src: &mut dyn RandomSource = &mut rng;
        let _ = src.next_int();
    }
}
