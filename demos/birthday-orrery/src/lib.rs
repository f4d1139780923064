use wasm_bindgen::prelude::*;

mod bodies;

orrery_web::export_scene!(bodies::scene_config, "birthday-orrery");
