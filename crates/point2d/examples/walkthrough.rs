//! Walk a point through every operation with trace logging enabled.
//!
//! Run with `cargo run -p point2d --example walkthrough`. Silent rejections
//! (NaN writes, absent centers or vectors) show up as TRACE events.

use std::f64::consts::FRAC_PI_2;

use point2d::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<(), PointError> {
    SubscriberBuilder::default()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .init();

    let origin = Point2D::origin();
    let mut p = Point2D::new(3.0, 4.0);
    tracing::info!(%p, "start");

    p.set_x(f64::NAN);
    tracing::info!(%p, "after set_x(NaN)");

    tracing::info!(scaled = %p.scale(2.0), same = %p.scale(f64::NAN), "scale");
    let mirrored = p.horizontal_symmetry(Some(&origin))?;
    tracing::info!(%mirrored, "horizontal_symmetry");
    tracing::info!(angle = p.compute_angle(Some(&origin)), "compute_angle");

    if let Some(r) = p.rotate_point(Some(&origin), -FRAC_PI_2) {
        tracing::info!(rotated = %r, "rotate_point");
    }
    tracing::info!(missing = ?p.rotate_point(None, FRAC_PI_2), "rotate_point without center");
    let central = p.central_symmetry(Some(&origin))?;
    let middle = p.middle_point(Some(&origin))?;
    tracing::info!(%central, %middle, "symmetries");

    p.translate(f64::NAN, 1.0);
    tracing::info!(%p, "translate(NaN, 1)");
    p.translate_by(Some(&Translation2::new(-1.0, -1.0)));
    p.translate_by(None::<&Translation2>);
    tracing::info!(%p, "translate_by");

    p.set_point(&mut StdRng::seed_from_u64(1), &mut StdRng::seed_from_u64(2));
    tracing::info!(%p, "set_point");

    if let Err(err) = p.middle_point(None) {
        tracing::warn!(%err, "middle_point without other");
    }
    Ok(())
}
