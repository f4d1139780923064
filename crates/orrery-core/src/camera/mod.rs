pub mod focus;
pub mod rig;

pub use focus::{CameraPhase, FocusCamera, FocusTarget};
pub use rig::{CameraPose, CameraRig, PerspectiveCamera, current_target};
