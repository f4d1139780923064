/// Auto-tour timer: one deadline, armed once the camera has settled.
///
/// Driven by scene time passed in from the frame tick, so tests control the
/// clock simply by choosing `now`.
#[derive(Debug, Clone)]
pub struct AutoTour {
    enabled: bool,
    dwell: f64,
    due_at: Option<f64>,
    /// Immediate first step owed while the machine was busy.
    step_pending: bool,
}

impl AutoTour {
    pub fn new(dwell_seconds: f32, enabled: bool) -> Self {
        Self {
            enabled,
            dwell: dwell_seconds as f64,
            due_at: None,
            step_pending: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pending step deadline, if armed.
    pub fn due_at(&self) -> Option<f64> {
        self.due_at
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.disarm();
            self.step_pending = false;
        }
    }

    /// Owe an immediate step, taken on the next frame that is free to move.
    pub fn request_step(&mut self) {
        if self.enabled {
            self.step_pending = true;
        }
    }

    /// True once if an immediate step is owed.
    pub fn take_pending_step(&mut self) -> bool {
        std::mem::take(&mut self.step_pending)
    }

    /// Start the dwell countdown unless one is already running.
    pub fn arm(&mut self, now: f64) {
        if self.enabled && self.due_at.is_none() {
            self.due_at = Some(now + self.dwell);
        }
    }

    /// Cancel the pending step.
    pub fn disarm(&mut self) {
        self.due_at = None;
    }

    /// True once when the deadline passes; the timer is disarmed as it fires.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.due_at {
            Some(due) if self.enabled && now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_dwell() {
        let mut tour = AutoTour::new(4.0, true);
        tour.arm(10.0);
        assert!(!tour.fire(13.9));
        assert!(tour.fire(14.0));
        assert!(!tour.fire(20.0));
    }

    #[test]
    fn rearming_does_not_push_deadline_back() {
        let mut tour = AutoTour::new(4.0, true);
        tour.arm(0.0);
        tour.arm(3.0);
        assert_eq!(tour.due_at(), Some(4.0));
    }

    #[test]
    fn disabled_tour_never_arms() {
        let mut tour = AutoTour::new(4.0, false);
        tour.arm(0.0);
        assert!(tour.due_at().is_none());
        assert!(!tour.fire(100.0));
    }

    #[test]
    fn requested_step_is_taken_once() {
        let mut tour = AutoTour::new(4.0, true);
        tour.request_step();
        assert!(tour.take_pending_step());
        assert!(!tour.take_pending_step());
    }

    #[test]
    fn disabling_drops_requested_step() {
        let mut tour = AutoTour::new(4.0, true);
        tour.request_step();
        tour.set_enabled(false);
        assert!(!tour.take_pending_step());

        let mut off = AutoTour::new(4.0, false);
        off.request_step();
        assert!(!off.take_pending_step());
    }

    #[test]
    fn disabling_cancels_pending_step() {
        let mut tour = AutoTour::new(1.0, true);
        tour.arm(0.0);
        tour.set_enabled(false);
        assert!(!tour.fire(50.0));
    }
}
