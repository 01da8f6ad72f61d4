//! Debounced save scheduling.
//!
//! Deadlines are computed from caller-supplied `Instant`s rather than an
//! internal clock, so bursts and quiet periods can be replayed in tests
//! without sleeping.

use crate::scene::Scene;
use log::error;
use std::time::{Duration, Instant};

/// Quiet period after the last edit before a save fires.
pub const SAVE_DEBOUNCE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
struct PendingSave {
    due: Instant,
    payload: String,
}

/// Coalesces committed edits into single save payloads.
///
/// Each edit cancels and reschedules the single outstanding deadline; a
/// burst of edits inside the quiet period produces exactly one payload.
/// Saves are suppressed entirely while a hydrate is in progress, and a
/// payload byte-identical to the last persisted content is dropped.
#[derive(Debug, Clone)]
pub struct DebouncedSaver {
    delay: Duration,
    pending: Option<PendingSave>,
    /// Last content known to be persisted.
    last_saved: Option<String>,
    /// Set while the initial load is hydrating the scene.
    hydrating: bool,
}

impl Default for DebouncedSaver {
    fn default() -> Self {
        Self::new()
    }
}

impl DebouncedSaver {
    pub fn new() -> Self {
        Self {
            delay: SAVE_DEBOUNCE,
            pending: None,
            last_saved: None,
            hydrating: false,
        }
    }

    /// Override the debounce delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Begin hydrating: suppress save scheduling until the load completes,
    /// so the hydrate itself is never mistaken for a user edit.
    pub fn begin_hydrate(&mut self) {
        self.hydrating = true;
        self.pending = None;
    }

    /// Finish hydrating. `persisted` is the blob the scene was loaded
    /// from, if the load produced one; recording it lets a load-triggered
    /// no-op change skip its redundant save.
    pub fn finish_hydrate(&mut self, persisted: Option<String>) {
        self.hydrating = false;
        self.last_saved = persisted;
    }

    /// Record a committed edit at time `now`: serialize the scene and
    /// schedule a save for `now + delay`, replacing any pending deadline.
    pub fn note_change(&mut self, scene: &Scene, now: Instant) {
        if self.hydrating {
            return;
        }

        let payload = match scene.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                error!("failed to serialize scene for save: {}", err);
                return;
            }
        };

        if self.last_saved.as_deref() == Some(payload.as_str()) {
            // Nothing new to persist.
            self.pending = None;
            return;
        }

        self.pending = Some(PendingSave {
            due: now + self.delay,
            payload,
        });
    }

    /// Take the payload if its deadline has passed. The caller performs
    /// the save and reports back via [`mark_saved`](Self::mark_saved); a
    /// failed save is simply not marked, so the next edit retries.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.due > now {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }

    /// Take the pending payload immediately, deadline or not (unmount).
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.payload)
    }

    /// Drop the pending payload without saving. The dropped write is the
    /// documented data-loss window, bounded by the debounce interval.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Record that `payload` reached the store.
    pub fn mark_saved(&mut self, payload: String) {
        self.last_saved = Some(payload);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
