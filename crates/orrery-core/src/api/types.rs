use serde::{Deserialize, Serialize};

use crate::a11y::StatusMessage;
use crate::config::BodyDef;

/// Reference to a focusable body: the central body or an orbiting body by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyRef {
    Central,
    Body(usize),
}

impl BodyRef {
    /// Sentinel used by the page for the central body.
    pub const CENTRAL_INDEX: i32 = -1;

    /// Decode the page's integer index. Anything below -1 is not a body.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            Self::CENTRAL_INDEX => Some(BodyRef::Central),
            i if i >= 0 => Some(BodyRef::Body(i as usize)),
            _ => None,
        }
    }

    pub fn to_index(self) -> i32 {
        match self {
            BodyRef::Central => Self::CENTRAL_INDEX,
            BodyRef::Body(i) => i as i32,
        }
    }
}

/// Focus-change payload for the info panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FocusInfo {
    pub display_name: String,
    pub display_name_localized: String,
    pub size: f32,
    pub orbital_radius: f32,
    pub axial_tilt: f32,
}

impl From<&BodyDef> for FocusInfo {
    fn from(body: &BodyDef) -> Self {
        Self {
            display_name: body.name.en.clone(),
            display_name_localized: body.name.id.clone(),
            size: body.size,
            orbital_radius: body.orbital_radius,
            axial_tilt: body.axial_tilt,
        }
    }
}

/// An event for the page, drained once per frame.
/// Fire-and-forget: the core never waits on a listener.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SceneEvent {
    /// Info panel content; `None` on deselect.
    FocusChanged(Option<FocusInfo>),
    /// Live-region announcement.
    Status(StatusMessage),
    /// Enable or disable the free-orbit controls.
    ControlsEnabled(bool),
    /// Ask the orbit controls to animate back to their default framing.
    /// The page answers with a reset-done input once finished.
    ResetControls,
    /// Play the focus whoosh. Audio failures stay on the page side.
    FocusCue,
    /// Photo-mode key was pressed.
    PhotoModeToggled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BodyName;

    #[test]
    fn index_round_trip_for_sentinel() {
        assert_eq!(BodyRef::from_index(-1), Some(BodyRef::Central));
        assert_eq!(BodyRef::Central.to_index(), -1);
        assert_eq!(BodyRef::from_index(3), Some(BodyRef::Body(3)));
        assert_eq!(BodyRef::from_index(-2), None);
    }

    #[test]
    fn focus_info_serializes_for_the_panel() {
        let body = BodyDef::new("earth", BodyName::new("Earth", "Bumi"), 0.7)
            .with_orbit(7.0, 0.5)
            .with_axial_tilt(23.4);
        let event = SceneEvent::FocusChanged(Some(FocusInfo::from(&body)));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "focus_changed");
        assert_eq!(json["data"]["displayName"], "Earth");
        assert_eq!(json["data"]["displayNameLocalized"], "Bumi");
        assert_eq!(json["data"]["orbitalRadius"], 7.0);
    }

    #[test]
    fn deselect_serializes_as_null() {
        let json = serde_json::to_value(SceneEvent::FocusChanged(None)).unwrap();
        assert!(json["data"].is_null());
    }
}
