// orbit/mod.rs
//
// Orbit math: circular placement plus easing for camera interpolation.

pub mod circular;
pub mod easing;

pub use circular::{orbit_position, write_orbit_position};
pub use easing::{Easing, ease_in_out_cubic, lerp_vec3};
