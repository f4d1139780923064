pub mod a11y;
pub mod api;
pub mod camera;
pub mod config;
pub mod frame;
pub mod input;
pub mod orbit;
pub mod selection;

// Re-export key types at crate root for convenience
pub use a11y::{StatusLine, StatusMessage};
pub use api::types::{BodyRef, FocusInfo, SceneEvent};
pub use camera::{CameraPhase, CameraPose, CameraRig, FocusCamera, FocusTarget, PerspectiveCamera};
pub use config::{BodyDef, BodyName, CameraConfig, ConfigError, InputConfig, OrbitConfig, SceneConfig, TourConfig};
pub use frame::{BodyPose, Orrery, SceneClock};
pub use input::{InputEvent, InputQueue, keys};
pub use orbit::{Easing, orbit_position, write_orbit_position};
pub use selection::{ControlMode, NavigationHandle, SelectOutcome, SelectionMachine};

pub use glam;
