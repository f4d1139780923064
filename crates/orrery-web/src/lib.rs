pub mod runner;

pub use orrery_core;
pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, input handlers,
///   navigation, buffer and JSON accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod bodies;
///
/// orrery_web::export_scene!(bodies::scene_config, "my-orrery");
/// ```
///
/// # Arguments
///
/// - `$config_fn`: `fn() -> SceneConfig` used when the page passes no config
///   or one that fails to load
/// - `$scene_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($config_fn:path, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner>> = RefCell::new(None);
        }

        /// Runs `f` against the live runner. Calls before `scene_init` do nothing.
        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::warn!("{}: not initialized, call scene_init() first", $scene_name);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn scene_init(config_json: &str) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = $crate::SceneRunner::from_json_or(config_json, $config_fn);
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input ----

        /// `index` is an orbiting body index, or -1 for the central body.
        #[wasm_bindgen]
        pub fn scene_select_body(index: i32) {
            match $crate::orrery_core::BodyRef::from_index(index) {
                Some(target) => {
                    with_runner(|r| r.push_input($crate::orrery_core::InputEvent::SelectBody(target)));
                }
                None => log::warn!("scene_select_body: bad index {index}"),
            }
        }

        #[wasm_bindgen]
        pub fn scene_pointer_missed() {
            with_runner(|r| r.push_input($crate::orrery_core::InputEvent::PointerMissed));
        }

        #[wasm_bindgen]
        pub fn scene_key_down(key_code: u32) {
            with_runner(|r| r.push_input($crate::orrery_core::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn scene_controls_reset_done() {
            with_runner(|r| r.push_input($crate::orrery_core::InputEvent::ControlsResetDone));
        }

        #[wasm_bindgen]
        pub fn scene_set_auto_tour(enabled: bool) {
            with_runner(|r| r.push_input($crate::orrery_core::InputEvent::SetAutoTour(enabled)));
        }

        /// Report the free camera pose while the orbit controls own it.
        #[wasm_bindgen]
        pub fn scene_set_camera(px: f32, py: f32, pz: f32, tx: f32, ty: f32, tz: f32) {
            use $crate::orrery_core::glam::Vec3;
            with_runner(|r| r.set_camera(Vec3::new(px, py, pz), Vec3::new(tx, ty, tz)));
        }

        // ---- Navigation ----

        #[wasm_bindgen]
        pub fn scene_deselect() {
            with_runner(|r| r.navigation().deselect_planet());
        }

        #[wasm_bindgen]
        pub fn scene_focus_next() {
            with_runner(|r| r.navigation().focus_next());
        }

        #[wasm_bindgen]
        pub fn scene_focus_prev() {
            with_runner(|r| r.navigation().focus_prev());
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_body_poses_ptr() -> *const f32 {
            with_runner(|r| r.body_poses_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_controls_enabled() -> bool {
            with_runner(|r| r.controls_enabled()).unwrap_or(true)
        }

        #[wasm_bindgen]
        pub fn get_selected_index() -> i32 {
            with_runner(|r| r.selected_index()).unwrap_or(-2)
        }

        #[wasm_bindgen]
        pub fn take_events_json() -> String {
            with_runner(|r| r.take_events_json()).unwrap_or_else(|| "[]".to_string())
        }

        #[wasm_bindgen]
        pub fn get_status_json() -> String {
            with_runner(|r| r.status_json()).unwrap_or_else(|| "null".to_string())
        }

        #[wasm_bindgen]
        pub fn get_bodies_json() -> String {
            with_runner(|r| r.bodies_json()).unwrap_or_else(|| "[]".to_string())
        }
    };
}
