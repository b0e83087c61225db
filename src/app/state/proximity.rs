use crate::domain::proximity::{classify, ProximityState};
use chrono::{DateTime, Local};

/// Caches the last classification of the next session. The snapshot is only
/// ever a function of the stored target and the `now` it was computed at.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProximityTracker {
    target: Option<DateTime<Local>>,
    snapshot: ProximityState,
}

impl ProximityTracker {
    #[must_use]
    pub fn new(target: Option<DateTime<Local>>, now: DateTime<Local>) -> Self {
        Self {
            target,
            snapshot: classify(target.as_ref(), &now),
        }
    }

    /// Re-targets the tracker. Recomputes immediately when the target
    /// actually changed and reports whether it did.
    pub fn set_target(&mut self, target: Option<DateTime<Local>>, now: DateTime<Local>) -> bool {
        if self.target == target {
            return false;
        }
        self.target = target;
        self.refresh(now);
        true
    }

    pub fn refresh(&mut self, now: DateTime<Local>) {
        self.snapshot = classify(self.target.as_ref(), &now);
    }

    #[must_use]
    pub fn target(&self) -> Option<DateTime<Local>> {
        self.target
    }

    #[must_use]
    pub fn state(&self) -> ProximityState {
        self.snapshot
    }
}
