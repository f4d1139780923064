//! Body catalog for the birthday orrery: the Sun plus five planets.
//!
//! Sizes and distances are picked for readability, not scale. Axial tilts
//! are real values in degrees.

use orrery_core::{BodyDef, BodyName, SceneConfig};

// ── Sun ──────────────────────────────────────────────────────────────

fn sun() -> BodyDef {
    BodyDef::new("sun", BodyName::new("Sun", "Matahari"), 1.5)
        .with_axial_tilt(7.25)
        .with_color("#FFD700")
}

// ── Planets (tour order) ─────────────────────────────────────────────

fn planets() -> Vec<BodyDef> {
    vec![
        BodyDef::new("mercury", BodyName::new("Mercury", "Merkurius"), 0.4)
            .with_orbit(3.0, 0.8)
            .with_axial_tilt(0.03)
            .with_color("#a9a9a9"),
        BodyDef::new("venus", BodyName::new("Venus", "Venus"), 0.6)
            .with_orbit(5.0, 0.6)
            .with_axial_tilt(177.4)
            .with_color("#e6e6e6"),
        BodyDef::new("earth", BodyName::new("Earth", "Bumi"), 0.7)
            .with_orbit(7.0, 0.5)
            .with_axial_tilt(23.4)
            .with_color("#54a0ff"),
        BodyDef::new("mars", BodyName::new("Mars", "Mars"), 0.5)
            .with_orbit(9.0, 0.4)
            .with_axial_tilt(25.2)
            .with_color("#ff6b6b"),
        BodyDef::new("saturn", BodyName::new("Saturn", "Saturnus"), 1.2)
            .with_orbit(12.0, 0.2)
            .with_axial_tilt(26.7)
            .with_color("#f1c40f")
            .with_ring(),
    ]
}

/// Built-in scene, used when the page passes no config of its own.
pub fn scene_config() -> SceneConfig {
    SceneConfig {
        central: sun(),
        bodies: planets(),
        ..SceneConfig::default()
    }
}
