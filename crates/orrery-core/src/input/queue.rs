use crate::api::types::BodyRef;

/// Input events the scene understands.
/// Picking happens on the page, so clicks arrive already resolved to a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A body was clicked or double-clicked.
    SelectBody(BodyRef),
    /// A click landed on empty space.
    PointerMissed,
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// The orbit controls finished animating back to their default framing.
    ControlsResetDone,
    /// The page's auto-tour switch changed.
    SetAutoTour(bool),
}

/// Key codes with a fixed meaning in the scene.
pub mod keys {
    pub const ESCAPE: u32 = 27;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_RIGHT: u32 = 39;
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them at the start of each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
