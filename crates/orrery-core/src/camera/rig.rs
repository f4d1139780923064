use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Handle to the camera owned by the rendering collaborator.
///
/// The core reads position and facing, and writes position and look-at target.
/// It never creates or destroys the camera.
pub trait CameraRig {
    /// World-space camera position.
    fn position(&self) -> Vec3;
    /// Unit vector the camera is facing.
    fn world_direction(&self) -> Vec3;
    /// Move the camera without changing what it looks at.
    fn set_position(&mut self, position: Vec3);
    /// Orient the camera toward a world-space point.
    fn look_at(&mut self, target: Vec3);
}

/// Approximate the free-orbit target without access to the orbit controls:
/// walk forward from the camera by its distance to the origin.
pub fn current_target(rig: &impl CameraRig) -> Vec3 {
    let position = rig.position();
    position + rig.world_direction() * position.length()
}

/// Perspective camera described by an eye point and a look-at point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
}

/// Flat camera pose for the shared buffer: eye xyz then target xyz.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraPose {
    pub position: [f32; 3],
    pub target: [f32; 3],
}

impl CameraPose {
    pub const FLOATS: usize = 6;
}

impl PerspectiveCamera {
    /// Opening framing of the greeting scene: above and behind the sun.
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 15.0, 25.0);

    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position.to_array(),
            target: self.target.to_array(),
        }
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION, Vec3::ZERO)
    }
}

impl CameraRig for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn world_direction(&self) -> Vec3 {
        // Degenerate look-at falls back to the conventional -Z forward
        (self.target - self.position).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
}
