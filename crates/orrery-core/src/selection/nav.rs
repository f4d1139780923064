// selection/nav.rs
//
// Navigation capability handed to the page's UI and keyboard wiring.
// Commands are queued and applied by the selection machine at the next frame,
// so holders of a handle never touch camera or selection state directly.

use std::sync::mpsc::{Receiver, Sender, channel};

/// An imperative navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Deselect,
    Next,
    Prev,
}

/// Cloneable handle exposing `deselect_planet`, `focus_next` and `focus_prev`.
#[derive(Debug, Clone)]
pub struct NavigationHandle {
    tx: Sender<NavCommand>,
}

impl NavigationHandle {
    pub fn deselect_planet(&self) {
        self.send(NavCommand::Deselect);
    }

    pub fn focus_next(&self) {
        self.send(NavCommand::Next);
    }

    pub fn focus_prev(&self) {
        self.send(NavCommand::Prev);
    }

    fn send(&self, command: NavCommand) {
        // The machine is gone once the scene is torn down; late UI callbacks are dropped.
        if self.tx.send(command).is_err() {
            log::debug!("navigation {command:?} dropped: scene no longer running");
        }
    }
}

/// Create a connected handle and the receiving end kept by the machine.
pub(crate) fn nav_channel() -> (NavigationHandle, Receiver<NavCommand>) {
    let (tx, rx) = channel();
    (NavigationHandle { tx }, rx)
}
