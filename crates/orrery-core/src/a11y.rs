//! Accessibility status for the page's live region.
//!
//! One bilingual message per successful focus change. Nothing is emitted on
//! deselect or on blocked requests.

use serde::{Deserialize, Serialize};

use crate::config::BodyName;

/// Status pair announced by screen readers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    /// English announcement.
    pub en: String,
    /// Indonesian announcement.
    pub id: String,
}

/// Build the announcement for a newly focused body.
pub fn focus_status(name: &BodyName) -> StatusMessage {
    StatusMessage {
        en: format!("Focusing {}", name.en),
        id: format!("Fokus {}", name.id),
    }
}

/// Last-write-wins status slot read by the live region.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    latest: Option<StatusMessage>,
    revision: u32,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message. Slow readers only ever see the newest one.
    pub fn publish(&mut self, message: StatusMessage) {
        self.latest = Some(message);
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn latest(&self) -> Option<&StatusMessage> {
        self.latest.as_ref()
    }

    /// Bumped on every publish, so readers can tell a repeat of the same text apart.
    pub fn revision(&self) -> u32 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_both_locales() {
        let status = focus_status(&BodyName::new("Earth", "Bumi"));
        assert_eq!(status.en, "Focusing Earth");
        assert_eq!(status.id, "Fokus Bumi");
    }

    #[test]
    fn newest_message_wins() {
        let mut line = StatusLine::new();
        assert!(line.latest().is_none());

        line.publish(focus_status(&BodyName::new("Mars", "Mars")));
        line.publish(focus_status(&BodyName::new("Venus", "Venus")));

        assert_eq!(line.latest().unwrap().en, "Focusing Venus");
        assert_eq!(line.revision(), 2);
    }
}
