//! `Point2D` and its planar operations.
//!
//! - `types.rs`: the struct, constructors, NaN-guarded setters, accessors and
//!   nalgebra conversions.
//! - `ops.rs`: scale, symmetries, angle, rotation, midpoint, translation and
//!   random placement.
//!
//! Invariant
//! - No coordinate is ever NaN. Every write, including the ones made while
//!   building a derived point, goes through `set_x`/`set_y`.

mod ops;
mod types;

pub use types::Point2D;
