// frame/mod.rs
//
// Per-frame update: scene clock plus the driver that ties orbits, selection
// and the focus camera together.

pub mod clock;
pub mod driver;

pub use clock::SceneClock;
pub use driver::{BodyPose, Orrery};
