// selection/machine.rs
//
// Selection & tour state machine.
//
// Turns clicks, keys, navigation commands and auto-tour deadlines into focus
// changes. Owns the focus camera so the camera mode is always derived from one
// place:
//   nothing selected            -> Free
//   transition in flight        -> Animating
//   body selected, settled      -> Chasing
//   waiting on controls reset   -> Resetting (blocks every new selection)

use std::sync::mpsc::Receiver;

use crate::a11y::{StatusLine, StatusMessage, focus_status};
use crate::api::types::{BodyRef, FocusInfo, SceneEvent};
use crate::camera::{CameraRig, FocusCamera};
use crate::config::{BodyDef, SceneConfig};

use super::nav::{NavCommand, NavigationHandle, nav_channel};
use super::tour::AutoTour;

/// Camera-control mode as seen by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Free,
    Animating,
    Chasing,
    Resetting,
}

/// What a selection request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Focused(BodyRef),
    Deselected,
    /// Blocked by an in-flight transition or reset, or not a known body.
    Ignored,
}

/// Precomputed per-body payloads; slot 0 is the central body.
#[derive(Debug, Clone)]
struct CatalogEntry {
    info: FocusInfo,
    status: StatusMessage,
}

impl From<&BodyDef> for CatalogEntry {
    fn from(body: &BodyDef) -> Self {
        Self {
            info: FocusInfo::from(body),
            status: focus_status(&body.name),
        }
    }
}

pub struct SelectionMachine {
    catalog: Vec<CatalogEntry>,
    selected: Option<BodyRef>,
    resetting: bool,
    controls_enabled: bool,
    focus: FocusCamera,
    tour: AutoTour,
    nav_rx: Receiver<NavCommand>,
    events: Vec<SceneEvent>,
    status: StatusLine,
}

impl SelectionMachine {
    /// Build the machine and the navigation handle for the page's UI.
    pub fn new(config: &SceneConfig) -> (Self, NavigationHandle) {
        let (handle, nav_rx) = nav_channel();
        let catalog = std::iter::once(&config.central)
            .chain(&config.bodies)
            .map(CatalogEntry::from)
            .collect();

        let machine = Self {
            catalog,
            selected: None,
            resetting: false,
            controls_enabled: true,
            focus: FocusCamera::new(config.camera),
            tour: AutoTour::new(config.tour.dwell_seconds, config.tour.enabled_at_start),
            nav_rx,
            events: Vec::with_capacity(8),
            status: StatusLine::new(),
        };
        (machine, handle)
    }

    // ── State queries ──────────────────────────────────────────────

    pub fn selected(&self) -> Option<BodyRef> {
        self.selected
    }

    pub fn mode(&self) -> ControlMode {
        if self.resetting {
            ControlMode::Resetting
        } else if self.focus.is_animating() {
            ControlMode::Animating
        } else if self.selected.is_some() {
            ControlMode::Chasing
        } else {
            ControlMode::Free
        }
    }

    /// True while a transition or a controls reset is in flight.
    pub fn is_busy(&self) -> bool {
        self.resetting || self.focus.is_animating()
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    pub fn focus(&self) -> &FocusCamera {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut FocusCamera {
        &mut self.focus
    }

    /// Number of orbiting bodies (the central body is not counted).
    pub fn body_count(&self) -> usize {
        self.catalog.len() - 1
    }

    pub fn auto_tour_enabled(&self) -> bool {
        self.tour.is_enabled()
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Events produced since the last drain.
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    // ── Selection ──────────────────────────────────────────────────

    /// Click handler: focus `target`, or deselect if it is already focused.
    /// Every click is ignored while a transition or reset is in flight,
    /// including a re-click on the current target.
    pub fn select_or_toggle(&mut self, target: BodyRef, rig: &impl CameraRig, now: f64) -> SelectOutcome {
        if self.is_busy() {
            log::debug!("select {target:?} ignored: {:?}", self.mode());
            return SelectOutcome::Ignored;
        }
        if self.slot(target).is_none() {
            log::warn!("select {target:?} ignored: no such body");
            return SelectOutcome::Ignored;
        }
        if self.selected == Some(target) {
            self.deselect_and_reset();
            return SelectOutcome::Deselected;
        }
        self.focus_on(target, rig, now)
    }

    /// Clear focus and hand the camera back to the orbit controls.
    ///
    /// Honoured mid-transition (the transition is dropped). Controls come back
    /// only when the page reports the reset finished, see
    /// [`controls_reset_finished`](Self::controls_reset_finished).
    pub fn deselect_and_reset(&mut self) -> bool {
        if self.selected.take().is_none() {
            return false;
        }
        self.focus.release();
        self.tour.disarm();
        self.resetting = true;
        self.set_controls(false);
        self.events.push(SceneEvent::FocusChanged(None));
        self.events.push(SceneEvent::ResetControls);
        log::debug!("deselected; waiting for controls reset");
        true
    }

    /// Completion signal from the orbit controls' reset.
    pub fn controls_reset_finished(&mut self) {
        if !self.resetting {
            return;
        }
        self.resetting = false;
        self.set_controls(true);
        log::debug!("controls reset finished");
    }

    /// Step forward through `[central, body 0, …, body N-1]`, wrapping.
    pub fn focus_next(&mut self, rig: &impl CameraRig, now: f64) -> SelectOutcome {
        let len = self.catalog.len();
        let next = match self.selected {
            None => 0,
            Some(current) => (self.cycle_position(current) + 1) % len,
        };
        self.navigate(Self::from_cycle_position(next), rig, now)
    }

    /// Step backward through `[central, body 0, …, body N-1]`, wrapping.
    pub fn focus_prev(&mut self, rig: &impl CameraRig, now: f64) -> SelectOutcome {
        let len = self.catalog.len();
        let prev = match self.selected {
            None => len - 1,
            Some(current) => (self.cycle_position(current) + len - 1) % len,
        };
        self.navigate(Self::from_cycle_position(prev), rig, now)
    }

    /// Apply commands queued through [`NavigationHandle`]s.
    pub fn apply_navigation(&mut self, rig: &impl CameraRig, now: f64) {
        while let Ok(command) = self.nav_rx.try_recv() {
            let outcome = match command {
                NavCommand::Deselect => {
                    if self.deselect_and_reset() {
                        SelectOutcome::Deselected
                    } else {
                        SelectOutcome::Ignored
                    }
                }
                NavCommand::Next => self.focus_next(rig, now),
                NavCommand::Prev => self.focus_prev(rig, now),
            };
            log::debug!("navigation {command:?} -> {outcome:?}");
        }
    }

    // ── Auto-tour ──────────────────────────────────────────────────

    /// Switch auto-tour. Turning it on with nothing selected steps to the
    /// first orbiting body right away instead of waiting a full dwell; during
    /// a controls reset the step is taken as soon as the reset finishes.
    pub fn set_auto_tour(&mut self, enabled: bool, rig: &impl CameraRig, now: f64) {
        self.tour.set_enabled(enabled);
        log::info!("auto-tour {}", if enabled { "on" } else { "off" });
        if !enabled || self.selected.is_some() {
            return;
        }
        if self.is_busy() {
            self.tour.request_step();
        } else {
            self.focus_on(BodyRef::Body(0), rig, now);
        }
    }

    /// Per-frame tour check. The dwell countdown starts once focus has settled.
    pub fn update_tour(&mut self, rig: &impl CameraRig, now: f64) {
        if !self.tour.is_enabled() {
            return;
        }
        if self.is_busy() {
            self.tour.disarm();
            return;
        }
        if self.tour.take_pending_step() && self.selected.is_none() {
            log::debug!("auto-tour first step after reset");
            self.focus_on(BodyRef::Body(0), rig, now);
            return;
        }
        self.tour.arm(now);
        if self.tour.fire(now) {
            let target = match self.selected {
                None => BodyRef::Body(0),
                Some(current) => {
                    Self::from_cycle_position((self.cycle_position(current) + 1) % self.catalog.len())
                }
            };
            log::debug!("auto-tour step to {target:?}");
            self.focus_on(target, rig, now);
        }
    }

    // ── Internals ──────────────────────────────────────────────────

    fn navigate(&mut self, target: BodyRef, rig: &impl CameraRig, now: f64) -> SelectOutcome {
        if self.is_busy() || self.selected == Some(target) {
            return SelectOutcome::Ignored;
        }
        self.focus_on(target, rig, now)
    }

    fn focus_on(&mut self, target: BodyRef, rig: &impl CameraRig, now: f64) -> SelectOutcome {
        let Some(slot) = self.slot(target) else {
            return SelectOutcome::Ignored;
        };
        self.focus.begin_animation(rig, now);
        self.selected = Some(target);
        self.tour.disarm();
        self.set_controls(false);

        let entry = &self.catalog[slot];
        let info = entry.info.clone();
        let status = entry.status.clone();
        log::debug!("focusing {}", info.display_name);

        self.events.push(SceneEvent::FocusChanged(Some(info)));
        self.events.push(SceneEvent::Status(status.clone()));
        self.events.push(SceneEvent::FocusCue);
        self.status.publish(status);
        SelectOutcome::Focused(target)
    }

    fn set_controls(&mut self, enabled: bool) {
        if self.controls_enabled != enabled {
            self.controls_enabled = enabled;
            self.events.push(SceneEvent::ControlsEnabled(enabled));
        }
    }

    fn slot(&self, target: BodyRef) -> Option<usize> {
        let slot = self.cycle_position(target);
        (slot < self.catalog.len()).then_some(slot)
    }

    fn cycle_position(&self, target: BodyRef) -> usize {
        match target {
            BodyRef::Central => 0,
            BodyRef::Body(i) => i + 1,
        }
    }

    fn from_cycle_position(position: usize) -> BodyRef {
        match position {
            0 => BodyRef::Central,
            p => BodyRef::Body(p - 1),
        }
    }
}
