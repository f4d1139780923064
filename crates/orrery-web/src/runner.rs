use orrery_core::glam::Vec3;
use orrery_core::{
    BodyDef, BodyPose, CameraPose, InputEvent, NavigationHandle, Orrery, PerspectiveCamera, SceneConfig,
    SceneEvent,
};
use serde::Serialize;

/// Scene runner that owns the orrery, the camera it drives and the flat
/// buffers the page reads every frame.
///
/// Each page creates a `thread_local!` SceneRunner and exports free functions
/// via `#[wasm_bindgen]` (see [`export_scene!`](crate::export_scene)).
pub struct SceneRunner {
    orrery: Orrery,
    camera: PerspectiveCamera,
    navigation: NavigationHandle,
    /// Camera pose after the last tick, read through `camera_ptr`.
    camera_pose: CameraPose,
    /// One pose per body, central body first.
    poses: Vec<BodyPose>,
    /// Events produced since the page last called `take_events_json`.
    pending: Vec<SceneEvent>,
}

/// Static body description handed to the page once at startup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BodyListing<'a> {
    index: i32,
    id: &'a str,
    name: &'a str,
    name_localized: &'a str,
    size: f32,
    orbital_radius: f32,
    /// Radians, ready for the renderer; `FocusInfo::axial_tilt` stays in degrees.
    axial_tilt_radians: f32,
    color: Option<&'a str>,
    has_ring: bool,
}

impl<'a> BodyListing<'a> {
    fn new(index: i32, body: &'a BodyDef) -> Self {
        Self {
            index,
            id: &body.id,
            name: &body.name.en,
            name_localized: &body.name.id,
            size: body.size,
            orbital_radius: body.orbital_radius,
            axial_tilt_radians: body.axial_tilt_radians(),
            color: body.color.as_deref(),
            has_ring: body.has_ring,
        }
    }
}

impl SceneRunner {
    pub fn new(config: SceneConfig) -> Self {
        let (orrery, navigation) = Orrery::new(config);
        let camera = PerspectiveCamera::default();
        let mut poses = Vec::with_capacity(orrery.positions().len());
        orrery.write_poses(&mut poses);

        Self {
            orrery,
            camera_pose: camera.pose(),
            camera,
            navigation,
            poses,
            pending: Vec::new(),
        }
    }

    /// Build from a JSON config, falling back to `fallback` when it does not parse or validate.
    pub fn from_json_or(json: &str, fallback: impl FnOnce() -> SceneConfig) -> Self {
        if json.trim().is_empty() {
            return Self::new(fallback());
        }
        match SceneConfig::from_json(json) {
            Ok(config) => Self::new(config),
            Err(err) => {
                log::error!("scene config rejected, using built-in scene: {err}");
                Self::new(fallback())
            }
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.orrery.push_input(event);
    }

    pub fn navigation(&self) -> &NavigationHandle {
        &self.navigation
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    /// Sync the camera with the page's orbit controls while the camera is free.
    pub fn set_camera(&mut self, position: Vec3, target: Vec3) {
        self.camera = PerspectiveCamera::new(position, target);
        self.camera_pose = self.camera.pose();
    }

    /// Run one frame and refresh the shared buffers.
    pub fn tick(&mut self, dt: f32) {
        self.orrery.tick(dt, &mut self.camera);
        self.orrery.write_poses(&mut self.poses);
        self.camera_pose = self.camera.pose();
        self.pending.extend(self.orrery.drain_events());
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn camera_ptr(&self) -> *const f32 {
        bytemuck::bytes_of(&self.camera_pose).as_ptr() as *const f32
    }

    pub fn body_poses_ptr(&self) -> *const f32 {
        self.poses.as_ptr() as *const f32
    }

    pub fn body_count(&self) -> u32 {
        self.poses.len() as u32
    }

    pub fn controls_enabled(&self) -> bool {
        self.orrery.selection().controls_enabled()
    }

    /// Selected body index (`-1` = central body), or `-2` when nothing is selected.
    pub fn selected_index(&self) -> i32 {
        self.orrery.selection().selected().map_or(-2, |b| b.to_index())
    }

    // ---- JSON accessors ----

    /// Serialize and clear the pending events.
    pub fn take_events_json(&mut self) -> String {
        let events = std::mem::take(&mut self.pending);
        to_json(&events, "[]")
    }

    pub fn status_json(&self) -> String {
        to_json(&self.orrery.selection().status().latest(), "null")
    }

    pub fn bodies_json(&self) -> String {
        let config = self.orrery.config();
        let listing: Vec<_> = std::iter::once(BodyListing::new(-1, &config.central))
            .chain(config.bodies.iter().enumerate().map(|(i, b)| BodyListing::new(i as i32, b)))
            .collect();
        to_json(&listing, "[]")
    }
}

fn to_json(value: &impl Serialize, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("failed to serialize scene data: {err}");
        fallback.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{BodyName, BodyRef};

    fn config() -> SceneConfig {
        SceneConfig {
            bodies: vec![
                BodyDef::new("mars", BodyName::new("Mars", "Mars"), 0.5)
                    .with_orbit(9.0, 0.4)
                    .with_color("#e74c3c"),
            ],
            ..SceneConfig::default()
        }
    }

    #[test]
    fn bad_json_falls_back() {
        let runner = SceneRunner::from_json_or("{ nope", config);
        assert_eq!(runner.body_count(), 2);
        assert_eq!(runner.orrery().config().bodies[0].id, "mars");
    }

    #[test]
    fn buffers_cover_every_body() {
        let mut runner = SceneRunner::new(config());
        runner.tick(1.0 / 60.0);
        let poses = unsafe {
            std::slice::from_raw_parts(runner.body_poses_ptr(), runner.body_count() as usize * BodyPose::FLOATS)
        };
        let mars = runner.orrery().position(BodyRef::Body(0)).unwrap();
        assert_eq!(&poses[4..7], &mars.to_array());
    }

    #[test]
    fn events_are_taken_once() {
        let mut runner = SceneRunner::new(config());
        runner.push_input(InputEvent::SelectBody(BodyRef::Body(0)));
        runner.tick(1.0 / 60.0);

        let json = runner.take_events_json();
        assert!(json.contains(r#""kind":"focus_changed""#));
        assert!(json.contains("Mars"));
        assert_eq!(runner.take_events_json(), "[]");
        assert_eq!(runner.selected_index(), 0);
        assert!(runner.status_json().contains("Focusing Mars"));
    }

    #[test]
    fn camera_follows_focus() {
        let mut runner = SceneRunner::new(config());
        let start = runner.camera_pose;
        runner.push_input(InputEvent::SelectBody(BodyRef::Central));
        runner.tick(0.1);
        runner.tick(0.1);
        assert_ne!(runner.camera_pose, start);
    }

    #[test]
    fn listing_includes_render_hints() {
        let runner = SceneRunner::new(config());
        let json = runner.bodies_json();
        assert!(json.contains(r#""index":-1"#));
        assert!(json.contains(r##""color":"#e74c3c""##));
        assert!(json.contains(r#""nameLocalized":"Matahari""#));
    }

    #[test]
    fn listing_tilt_is_named_in_radians() {
        let mut cfg = config();
        cfg.bodies[0].axial_tilt = 180.0;
        let runner = SceneRunner::new(cfg);
        let listing: serde_json::Value = serde_json::from_str(&runner.bodies_json()).unwrap();
        let mars = &listing[1];
        assert!(mars.get("axialTilt").is_none());
        let tilt = mars["axialTiltRadians"].as_f64().unwrap();
        assert!((tilt - std::f64::consts::PI).abs() < 1e-5);
    }
}
