pub mod types;

pub use types::{BodyRef, FocusInfo, SceneEvent};
