// frame/driver.rs
//
// Frame driver: one tick per rendered frame.
//
// Tick order:
//   1. advance the scene clock
//   2. apply queued input and navigation commands
//   3. recompute every body position into its own buffer
//   4. auto-tour check
//   5. camera: animate while a transition runs, chase once settled,
//      leave it alone when nothing is focused
// Positions always update before the camera so the chase locks onto this
// frame's position, never the previous one.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::api::types::{BodyRef, SceneEvent};
use crate::camera::{CameraRig, FocusTarget};
use crate::config::{BodyDef, SceneConfig};
use crate::input::{InputEvent, InputQueue, keys};
use crate::orbit::write_orbit_position;
use crate::selection::{NavigationHandle, SelectionMachine};

use super::clock::SceneClock;

/// Self-rotation per 60 Hz frame, per unit of orbital speed (radians).
const SPIN_PER_FRAME: f32 = 0.1;
const REFERENCE_FPS: f32 = 60.0;

/// Flat per-body pose for the shared buffer: position xyz, then spin angle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyPose {
    pub position: [f32; 3],
    pub spin: f32,
}

impl BodyPose {
    pub const FLOATS: usize = 4;
}

/// The animated scene: bodies on their orbits plus selection and focus camera.
///
/// Slot 0 of the position and spin buffers is the central body (always at the
/// origin); slot `i + 1` is orbiting body `i`. Buffers are allocated once and
/// rewritten in place every frame.
pub struct Orrery {
    config: SceneConfig,
    clock: SceneClock,
    positions: Vec<Vec3>,
    spins: Vec<f32>,
    selection: SelectionMachine,
    input: InputQueue,
}

impl Orrery {
    /// Build the scene. The returned handle drives navigation from the page's UI.
    pub fn new(config: SceneConfig) -> (Self, NavigationHandle) {
        let slots = config.bodies.len() + 1;
        let (selection, handle) = SelectionMachine::new(&config);
        let mut input = InputQueue::new();
        // A tour that is on from the start steps to the first body on the first frame.
        if config.tour.enabled_at_start {
            input.push(InputEvent::SetAutoTour(true));
        }
        let mut orrery = Self {
            config,
            clock: SceneClock::new(),
            positions: vec![Vec3::ZERO; slots],
            spins: vec![0.0; slots],
            selection,
            input,
        };
        orrery.write_positions(0.0);
        log::info!("orrery ready: {} orbiting bodies", orrery.config.bodies.len());
        (orrery, handle)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Elapsed scene seconds.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn selection(&self) -> &SelectionMachine {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionMachine {
        &mut self.selection
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Positions of all bodies, central body first.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn position(&self, target: BodyRef) -> Option<Vec3> {
        self.positions.get(Self::slot(target)).copied()
    }

    /// Definition of a focusable body.
    pub fn body(&self, target: BodyRef) -> Option<&BodyDef> {
        match target {
            BodyRef::Central => Some(&self.config.central),
            BodyRef::Body(i) => self.config.bodies.get(i),
        }
    }

    /// Where the camera should frame `target` this frame.
    pub fn focus_target(&self, target: BodyRef) -> Option<FocusTarget> {
        let body = self.body(target)?;
        let position = self.position(target)?;
        Some(FocusTarget::new(position, body.size))
    }

    /// Events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.selection.drain_events()
    }

    /// Fill `out` with one pose per body, central body first.
    pub fn write_poses(&self, out: &mut Vec<BodyPose>) {
        out.clear();
        out.extend(self.positions.iter().zip(&self.spins).map(|(p, &spin)| BodyPose {
            position: p.to_array(),
            spin,
        }));
    }

    /// Run one frame.
    pub fn tick(&mut self, frame_dt: f32, rig: &mut impl CameraRig) {
        let dt = self.clock.advance(frame_dt);
        let now = self.clock.now();

        for event in self.input.drain() {
            self.handle_input(event, &*rig, now);
        }
        self.selection.apply_navigation(&*rig, now);

        self.write_positions(dt);
        self.selection.update_tour(&*rig, now);
        self.update_camera(rig, now);
    }

    fn handle_input(&mut self, event: InputEvent, rig: &impl CameraRig, now: f64) {
        match event {
            InputEvent::SelectBody(target) => {
                self.selection.select_or_toggle(target, rig, now);
            }
            InputEvent::PointerMissed => {
                self.selection.deselect_and_reset();
            }
            InputEvent::KeyDown { key_code } => match key_code {
                keys::ESCAPE => {
                    self.selection.deselect_and_reset();
                }
                keys::ARROW_LEFT => {
                    self.selection.focus_prev(rig, now);
                }
                keys::ARROW_RIGHT => {
                    self.selection.focus_next(rig, now);
                }
                code if Some(code) == self.config.input.photo_mode_key => {
                    self.selection.push_event(SceneEvent::PhotoModeToggled);
                }
                _ => {}
            },
            InputEvent::ControlsResetDone => self.selection.controls_reset_finished(),
            InputEvent::SetAutoTour(enabled) => self.selection.set_auto_tour(enabled, rig, now),
        }
    }

    fn write_positions(&mut self, dt: f32) {
        let time = self.clock.now();
        let frames = dt * REFERENCE_FPS;

        // Central body never orbits; it only spins.
        self.positions[0] = Vec3::ZERO;
        self.spins[0] = spin(self.spins[0], self.config.effective_speed(&self.config.central), frames);

        for (i, body) in self.config.bodies.iter().enumerate() {
            let speed = self.config.effective_speed(body);
            write_orbit_position(&mut self.positions[i + 1], time, body.orbital_radius, speed);
            self.spins[i + 1] = spin(self.spins[i + 1], speed, frames);
        }
    }

    fn update_camera(&mut self, rig: &mut impl CameraRig, now: f64) {
        let Some(target) = self.selection.selected() else {
            return;
        };
        let Some(focus_target) = self.focus_target(target) else {
            return;
        };
        let focus = self.selection.focus_mut();
        if focus.is_animating() {
            focus.animate_to(rig, focus_target, now);
        } else {
            focus.chase(rig, focus_target);
        }
    }

    fn slot(target: BodyRef) -> usize {
        match target {
            BodyRef::Central => 0,
            BodyRef::Body(i) => i + 1,
        }
    }
}

fn spin(angle: f32, speed: f32, frames: f32) -> f32 {
    (angle + SPIN_PER_FRAME * speed * frames).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PerspectiveCamera;
    use crate::config::{BodyName, CameraConfig, TourConfig};
    use crate::orbit::{Easing, orbit_position};
    use crate::selection::ControlMode;

    const DT: f32 = 0.1;

    fn config() -> SceneConfig {
        SceneConfig {
            camera: CameraConfig {
                offset_multiplier: 7.0,
                animation_duration: 1.0,
                easing: Easing::CubicInOut,
            },
            tour: TourConfig {
                dwell_seconds: 2.0,
                enabled_at_start: false,
            },
            bodies: vec![
                BodyDef::new("mercury", BodyName::new("Mercury", "Merkurius"), 0.4).with_orbit(3.0, 0.8),
                BodyDef::new("earth", BodyName::new("Earth", "Bumi"), 0.7)
                    .with_orbit(7.0, 0.5)
                    .with_axial_tilt(23.4),
            ],
            ..SceneConfig::default()
        }
    }

    fn scene() -> (Orrery, NavigationHandle, PerspectiveCamera) {
        let (orrery, handle) = Orrery::new(config());
        (orrery, handle, PerspectiveCamera::default())
    }

    fn run_until_settled(orrery: &mut Orrery, cam: &mut PerspectiveCamera) {
        for _ in 0..100 {
            orrery.tick(DT, cam);
            if orrery.selection().mode() != ControlMode::Animating {
                return;
            }
        }
        panic!("transition never settled");
    }

    #[test]
    fn positions_follow_circular_orbits() {
        let (mut orrery, _h, mut cam) = scene();
        for _ in 0..7 {
            orrery.tick(DT, &mut cam);
        }
        let t = orrery.now();
        assert_eq!(orrery.position(BodyRef::Central), Some(Vec3::ZERO));

        let expected = orbit_position(t, 7.0, 0.5);
        let got = orrery.position(BodyRef::Body(1)).unwrap();
        assert!((got - expected).length() < 1e-5);
        assert_eq!(got.y, 0.0);
    }

    #[test]
    fn speed_multiplier_scales_every_orbit() {
        let mut cfg = config();
        cfg.orbit.speed_multiplier = 2.0;
        let (mut orrery, _h) = Orrery::new(cfg);
        let mut cam = PerspectiveCamera::default();
        orrery.tick(DT, &mut cam);

        let expected = orbit_position(orrery.now(), 3.0, 1.6);
        assert!((orrery.position(BodyRef::Body(0)).unwrap() - expected).length() < 1e-5);
    }

    #[test]
    fn bodies_start_at_their_zero_phase() {
        let (orrery, _h, _cam) = scene();
        assert_eq!(orrery.positions()[1], Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(orrery.positions()[2], Vec3::new(0.0, 0.0, 7.0));
    }

    #[test]
    fn free_camera_is_left_alone() {
        let (mut orrery, _h, mut cam) = scene();
        let before = cam;
        for _ in 0..10 {
            orrery.tick(DT, &mut cam);
        }
        assert_eq!(cam, before);
    }

    #[test]
    fn click_animates_then_chases_current_frame_position() {
        let (mut orrery, _h, mut cam) = scene();
        orrery.push_input(InputEvent::SelectBody(BodyRef::Body(1)));
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.selection().mode(), ControlMode::Animating);

        run_until_settled(&mut orrery, &mut cam);
        assert_eq!(orrery.selection().mode(), ControlMode::Chasing);

        for _ in 0..5 {
            orrery.tick(DT, &mut cam);
            let body = orrery.position(BodyRef::Body(1)).unwrap();
            let expected = body + Vec3::Z * (0.7 * 7.0);
            assert!((cam.position - expected).length() < 1e-4);
            assert_eq!(cam.target, body);
        }
    }

    #[test]
    fn escape_deselects_and_reset_done_restores_controls() {
        let (mut orrery, _h, mut cam) = scene();
        orrery.push_input(InputEvent::SelectBody(BodyRef::Central));
        run_until_settled(&mut orrery, &mut cam);
        orrery.drain_events();

        orrery.push_input(InputEvent::KeyDown { key_code: keys::ESCAPE });
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.selection().mode(), ControlMode::Resetting);
        let events = orrery.drain_events();
        assert!(events.contains(&SceneEvent::FocusChanged(None)));
        assert!(events.contains(&SceneEvent::ResetControls));

        // Camera is no longer driven by the core.
        let parked = cam;
        orrery.tick(DT, &mut cam);
        assert_eq!(cam, parked);

        orrery.push_input(InputEvent::ControlsResetDone);
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.selection().mode(), ControlMode::Free);
        assert_eq!(orrery.drain_events(), vec![SceneEvent::ControlsEnabled(true)]);
    }

    #[test]
    fn pointer_missed_deselects() {
        let (mut orrery, _h, mut cam) = scene();
        orrery.push_input(InputEvent::SelectBody(BodyRef::Body(0)));
        run_until_settled(&mut orrery, &mut cam);

        orrery.push_input(InputEvent::PointerMissed);
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.selection().selected(), None);
    }

    #[test]
    fn arrow_keys_navigate() {
        let (mut orrery, _h, mut cam) = scene();
        orrery.push_input(InputEvent::KeyDown { key_code: keys::ARROW_RIGHT });
        run_until_settled(&mut orrery, &mut cam);
        assert_eq!(orrery.selection().selected(), Some(BodyRef::Central));

        orrery.push_input(InputEvent::KeyDown { key_code: keys::ARROW_LEFT });
        run_until_settled(&mut orrery, &mut cam);
        assert_eq!(orrery.selection().selected(), Some(BodyRef::Body(1)));
    }

    #[test]
    fn photo_mode_key_is_forwarded() {
        let (mut orrery, _h, mut cam) = scene();
        orrery.push_input(InputEvent::KeyDown { key_code: crate::config::DEFAULT_PHOTO_MODE_KEY });
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.drain_events(), vec![SceneEvent::PhotoModeToggled]);
        assert_eq!(orrery.selection().mode(), ControlMode::Free);
    }

    #[test]
    fn navigation_handle_drives_the_scene() {
        let (mut orrery, handle, mut cam) = scene();
        handle.focus_prev();
        run_until_settled(&mut orrery, &mut cam);
        assert_eq!(orrery.selection().selected(), Some(BodyRef::Body(1)));

        handle.deselect_planet();
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.selection().selected(), None);
    }

    #[test]
    fn auto_tour_steps_through_bodies() {
        let (mut orrery, _h, mut cam) = scene();
        orrery.push_input(InputEvent::SetAutoTour(true));
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.selection().selected(), Some(BodyRef::Body(0)));

        run_until_settled(&mut orrery, &mut cam);
        // Dwell is 2s: after ~2.5s of settled frames the tour has moved on.
        for _ in 0..25 {
            orrery.tick(DT, &mut cam);
        }
        assert_eq!(orrery.selection().selected(), Some(BodyRef::Body(1)));
    }

    #[test]
    fn tour_enabled_at_start_focuses_first_body_on_first_frame() {
        let mut cfg = config();
        cfg.tour.enabled_at_start = true;
        let (mut orrery, _h) = Orrery::new(cfg);
        let mut cam = PerspectiveCamera::default();
        orrery.tick(DT, &mut cam);
        assert_eq!(orrery.selection().selected(), Some(BodyRef::Body(0)));
    }

    #[test]
    fn poses_pack_position_and_spin() {
        let (mut orrery, _h, mut cam) = scene();
        orrery.tick(DT, &mut cam);
        let mut poses = Vec::new();
        orrery.write_poses(&mut poses);

        assert_eq!(poses.len(), 3);
        assert_eq!(poses[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(poses[0].spin, 0.0);
        assert_eq!(poses[2].position, orrery.positions()[2].to_array());
        // Earth spins 0.1 rad per 60 Hz frame per unit speed: 6 frames at speed 0.5.
        assert!((poses[2].spin - 0.3).abs() < 1e-4);

        let floats: &[f32] = bytemuck::cast_slice(&poses);
        assert_eq!(floats.len(), 3 * BodyPose::FLOATS);
    }
}
