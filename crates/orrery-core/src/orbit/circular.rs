// orbit/circular.rs
//
// Circular orbit placement. Pure math, no scene dependencies.
//
// Time is accumulated in f64 seconds (a greeting page may stay open for hours).
// Only reduce to f32 at the final vector step.

use glam::Vec3;

/// Position on a circular orbit in the XZ plane.
///
/// `x = r·sin(t·ω)`, `z = r·cos(t·ω)`, `y = 0`. A zero radius always yields the origin.
#[inline]
pub fn orbit_position(time: f64, orbital_radius: f32, orbital_speed: f32) -> Vec3 {
    let mut out = Vec3::ZERO;
    write_orbit_position(&mut out, time, orbital_radius, orbital_speed);
    out
}

/// Same as [`orbit_position`], but fills the caller's buffer instead of returning a new vector.
#[inline]
pub fn write_orbit_position(
    out: &mut Vec3,
    time: f64,
    orbital_radius: f32,
    orbital_speed: f32,
) -> &mut Vec3 {
    let angle = time * orbital_speed as f64;
    let r = orbital_radius as f64;
    out.x = (r * angle.sin()) as f32;
    out.y = 0.0;
    out.z = (r * angle.cos()) as f32;
    out
}
