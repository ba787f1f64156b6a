//! Planar point value type with NaN-guarded coordinates.
//!
//! Purpose
//! - `Point2D` stores two `f64` coordinates that are never NaN: a NaN write is
//!   dropped and the previous value stays.
//! - Elementary planar operations: scale, rotate, horizontal and central
//!   symmetry, midpoint, translate, angle between two points.
//!
//! Absent arguments
//! - Parameters that may be absent are `Option<&_>`. Each operation keeps its
//!   own policy for `None`: an error (`horizontal_symmetry`, `central_symmetry`,
//!   `middle_point`), a silent fallback (`rotate_point` → `None`,
//!   `translate_by` → no-op, `compute_angle` → NaN) or a default
//!   (`from_point` → origin). The policies differ on purpose and callers rely
//!   on each one.
//!
//! Collaborators
//! - `Translation`: anything exposing an X and a Y delta.
//! - `RandomSource`: anything producing an `i32` sample; every `rand::Rng` is one.

pub mod capability;
pub mod cfg;
pub mod error;
pub mod point;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use capability::{RandomSource, Translation, Translation2};
pub use cfg::Tolerance;
pub use error::PointError;
pub use point::Point2D;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::capability::{RandomSource, Translation, Translation2};
    pub use crate::cfg::{Tolerance, APPROX_EPS};
    pub use crate::error::PointError;
    pub use crate::point::Point2D;
}
