// camera/focus.rs
//
// Focus camera: eases the camera from wherever it is onto a body, then
// locks it at a fixed standoff while the body keeps orbiting.
//
// Usage (once per frame, after body positions are updated):
//   focus.begin_animation(&camera, now);           // on every focus change
//   focus.animate_to(&mut camera, target, now);    // while animating
//   focus.chase(&mut camera, target);              // once settled

use glam::Vec3;

use crate::config::CameraConfig;
use crate::orbit::lerp_vec3;

use super::rig::{CameraRig, current_target};

/// Which control mode the focus camera is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraPhase {
    /// No focus; free-orbit controls own the camera.
    #[default]
    Idle,
    /// Transition toward a focused body in progress.
    Animating,
    /// Transition finished; camera follows the body every frame.
    Chasing,
}

/// Where the focused body is this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    pub position: Vec3,
    pub size: f32,
}

impl FocusTarget {
    pub fn new(position: Vec3, size: f32) -> Self {
        Self { position, size }
    }
}

/// Camera transition state, snapshotted by [`FocusCamera::begin_animation`].
#[derive(Debug, Clone, Copy)]
struct Transition {
    start_time: f64,
    start_position: Vec3,
    start_target: Vec3,
}

#[derive(Debug, Clone)]
pub struct FocusCamera {
    settings: CameraConfig,
    phase: CameraPhase,
    transition: Transition,
}

impl FocusCamera {
    pub fn new(settings: CameraConfig) -> Self {
        Self {
            settings,
            phase: CameraPhase::Idle,
            transition: Transition {
                start_time: 0.0,
                start_position: Vec3::ZERO,
                start_target: Vec3::ZERO,
            },
        }
    }

    pub fn phase(&self) -> CameraPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == CameraPhase::Animating
    }

    pub fn settings(&self) -> &CameraConfig {
        &self.settings
    }

    /// Camera position that frames `target`: offset along world +Z, proportional to body size.
    pub fn standoff(&self, target: FocusTarget) -> Vec3 {
        target.position + Vec3::Z * (target.size * self.settings.offset_multiplier)
    }

    /// Start a transition from the camera's current pose.
    ///
    /// Called again mid-flight, the snapshot is the camera's in-between pose,
    /// so the new transition continues without a jump.
    pub fn begin_animation(&mut self, rig: &impl CameraRig, now: f64) {
        self.transition = Transition {
            start_time: now,
            start_position: rig.position(),
            start_target: current_target(rig),
        };
        self.phase = CameraPhase::Animating;
        log::debug!("focus transition started at t={now:.3}");
    }

    /// Normalized transition progress at `now`, in [0, 1].
    pub fn progress(&self, now: f64) -> f32 {
        let duration = self.settings.animation_duration as f64;
        if duration <= 0.0 {
            return 1.0;
        }
        ((now - self.transition.start_time) / duration).clamp(0.0, 1.0) as f32
    }

    /// Advance the transition toward `target` and write the camera pose.
    /// Returns the raw progress; at 1.0 the camera switches to chasing.
    pub fn animate_to(&mut self, rig: &mut impl CameraRig, target: FocusTarget, now: f64) -> f32 {
        let progress = self.progress(now);
        let eased = self.settings.easing.apply(progress);

        let position = lerp_vec3(self.transition.start_position, self.standoff(target), eased);
        let look = lerp_vec3(self.transition.start_target, target.position, eased);
        rig.set_position(position);
        rig.look_at(look);

        if progress >= 1.0 {
            self.phase = CameraPhase::Chasing;
            log::debug!("focus transition settled");
        }
        progress
    }

    /// Snap the camera to the standoff of the body's current position.
    pub fn chase(&mut self, rig: &mut impl CameraRig, target: FocusTarget) {
        rig.set_position(self.standoff(target));
        rig.look_at(target.position);
        self.phase = CameraPhase::Chasing;
    }

    /// Drop focus; free-orbit controls take the camera back.
    pub fn release(&mut self) {
        self.phase = CameraPhase::Idle;
    }
}
