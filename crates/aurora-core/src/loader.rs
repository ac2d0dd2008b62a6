//! Intro overlay timing.
//!
//! Single-shot, purely time-driven: the overlay runs for 1.5 s, shows its
//! completion styling for a further 1 s, then hides and the document counts
//! as loaded. No cancellation path exists.

use crate::constants::{LOADER_COMPLETE_AFTER_MS, LOADER_HIDE_AFTER_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Running,
    Complete,
    Hidden,
}

pub struct Loader {
    started_ms: f64,
    phase: LoaderPhase,
}

impl Loader {
    pub fn start(now_ms: f64) -> Self {
        Self {
            started_ms: now_ms,
            phase: LoaderPhase::Running,
        }
    }

    #[inline]
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    /// Advance the clock; reports a newly entered phase, `None` otherwise.
    ///
    /// Moves at most one phase per call so every transition is observed even
    /// when the clock jumps past both deadlines at once.
    pub fn advance(&mut self, now_ms: f64) -> Option<LoaderPhase> {
        let elapsed = now_ms - self.started_ms;
        let next = match self.phase {
            LoaderPhase::Running if elapsed >= LOADER_COMPLETE_AFTER_MS => LoaderPhase::Complete,
            LoaderPhase::Complete
                if elapsed >= LOADER_COMPLETE_AFTER_MS + LOADER_HIDE_AFTER_MS =>
            {
                LoaderPhase::Hidden
            }
            _ => return None,
        };
        self.phase = next;
        Some(next)
    }
}
