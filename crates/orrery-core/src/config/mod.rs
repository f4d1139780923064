//! Scene configuration: camera tunables, orbit speed, auto-tour dwell and body definitions.
//!
//! Loaded once from JSON (or built in code by the page) and constant for the
//! lifetime of the scene.

mod error;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::input::keys;
use crate::orbit::Easing;

pub use error::ConfigError;

/// Key code that toggles photo mode when nothing else is configured.
pub const DEFAULT_PHOTO_MODE_KEY: u32 = 80; // 'P'

/// Top-level scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Focus camera tunables.
    pub camera: CameraConfig,
    /// Orbit animation settings.
    pub orbit: OrbitConfig,
    /// Auto-tour settings.
    pub tour: TourConfig,
    /// Keyboard bindings that are not fixed by the page.
    pub input: InputConfig,
    /// The non-orbiting body at the origin.
    pub central: BodyDef,
    /// Orbiting bodies in tour order.
    pub bodies: Vec<BodyDef>,
}

/// Focus camera configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera standoff distance per unit of body size.
    pub offset_multiplier: f32,
    /// Length of a focus transition in seconds.
    pub animation_duration: f32,
    /// Curve applied to transition progress.
    pub easing: Easing,
}

/// Orbit animation configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    /// Global multiplier applied to every body's orbital speed.
    pub speed_multiplier: f32,
}

/// Auto-tour configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TourConfig {
    /// Seconds to linger on a settled body before stepping on.
    pub dwell_seconds: f32,
    /// Start touring as soon as the scene is up.
    pub enabled_at_start: bool,
}

/// Input bindings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Key code forwarded to the page as a photo-mode toggle. `None` disables it.
    pub photo_mode_key: Option<u32>,
}

/// Display name in the page's two locales.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BodyName {
    /// Primary (English) name.
    pub en: String,
    /// Localized (Indonesian) name.
    pub id: String,
}

impl BodyName {
    pub fn new(en: impl Into<String>, id: impl Into<String>) -> Self {
        Self { en: en.into(), id: id.into() }
    }
}

/// Static description of one celestial body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyDef {
    pub id: String,
    pub name: BodyName,
    /// Visual radius in scene units.
    pub size: f32,
    /// Distance from the origin. Ignored for the central body.
    #[serde(default)]
    pub orbital_radius: f32,
    /// Angular rate coefficient, scaled by [`OrbitConfig::speed_multiplier`].
    #[serde(default)]
    pub orbital_speed: f32,
    /// Axial tilt in degrees. Cosmetic only.
    #[serde(default)]
    pub axial_tilt: f32,
    /// Render hint passed through to the page (hex color).
    #[serde(default)]
    pub color: Option<String>,
    /// Render hint passed through to the page.
    #[serde(default)]
    pub has_ring: bool,
}

impl BodyDef {
    pub fn new(id: impl Into<String>, name: BodyName, size: f32) -> Self {
        Self {
            id: id.into(),
            name,
            size,
            orbital_radius: 0.0,
            orbital_speed: 0.0,
            axial_tilt: 0.0,
            color: None,
            has_ring: false,
        }
    }

    pub fn with_orbit(mut self, orbital_radius: f32, orbital_speed: f32) -> Self {
        self.orbital_radius = orbital_radius;
        self.orbital_speed = orbital_speed;
        self
    }

    pub fn with_axial_tilt(mut self, degrees: f32) -> Self {
        self.axial_tilt = degrees;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_ring(mut self) -> Self {
        self.has_ring = true;
        self
    }

    /// Axial tilt in radians, for renderers.
    pub fn axial_tilt_radians(&self) -> f32 {
        self.axial_tilt.to_radians()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidBody { id: self.id.clone(), reason };
        if self.id.is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(invalid("size must be a positive finite number"));
        }
        if !self.orbital_radius.is_finite() || self.orbital_radius < 0.0 {
            return Err(invalid("orbital_radius must be a non-negative finite number"));
        }
        if !self.orbital_speed.is_finite() {
            return Err(invalid("orbital_speed must be finite"));
        }
        if !self.axial_tilt.is_finite() {
            return Err(invalid("axial_tilt must be finite"));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset_multiplier: 7.0,
            animation_duration: 2.5,
            easing: Easing::CubicInOut,
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self { speed_multiplier: 1.0 }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            dwell_seconds: 4.0,
            enabled_at_start: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            photo_mode_key: Some(DEFAULT_PHOTO_MODE_KEY),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
            tour: TourConfig::default(),
            input: InputConfig::default(),
            central: BodyDef::new("sun", BodyName::new("Sun", "Matahari"), 1.5),
            bodies: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        log::info!(
            "scene config loaded: {} bodies, {:.2}s transitions",
            config.bodies.len(),
            config.camera.animation_duration
        );
        Ok(config)
    }

    /// Check every tunable and body definition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let setting = |field, reason| ConfigError::InvalidSetting { field, reason };

        let camera = &self.camera;
        if !camera.offset_multiplier.is_finite() || camera.offset_multiplier < 0.0 {
            return Err(setting("camera.offset_multiplier", "must be a non-negative finite number"));
        }
        if !camera.animation_duration.is_finite() || camera.animation_duration < 0.0 {
            return Err(setting("camera.animation_duration", "must be a non-negative finite number"));
        }
        if !self.orbit.speed_multiplier.is_finite() {
            return Err(setting("orbit.speed_multiplier", "must be finite"));
        }
        if !self.tour.dwell_seconds.is_finite() || self.tour.dwell_seconds <= 0.0 {
            return Err(setting("tour.dwell_seconds", "must be a positive finite number"));
        }
        if let Some(code) = self.input.photo_mode_key {
            if [keys::ESCAPE, keys::ARROW_LEFT, keys::ARROW_RIGHT].contains(&code) {
                return Err(setting("input.photo_mode_key", "must not reuse Escape or the arrow keys"));
            }
        }

        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        let mut seen = HashSet::with_capacity(self.bodies.len() + 1);
        for body in std::iter::once(&self.central).chain(&self.bodies) {
            body.validate()?;
            if !seen.insert(body.id.as_str()) {
                return Err(ConfigError::DuplicateBody(body.id.clone()));
            }
        }
        Ok(())
    }

    /// Effective angular rate of an orbiting body.
    pub fn effective_speed(&self, body: &BodyDef) -> f32 {
        body.orbital_speed * self.orbit.speed_multiplier
    }
}
