//! Bridge between the editor and the document store.

use super::{DebouncedSaver, DocumentStore, StorageError, StorageResult};
use crate::scene::Scene;
use log::{error, warn};
use std::sync::Arc;
use std::time::Instant;

/// Result of hydrating a document.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The document loaded (possibly recovered as empty from bad content).
    Loaded(Scene),
    /// No such document; the host renders a not-found state.
    NotFound,
}

/// Connects a debounced saver to a document store for one document.
///
/// Saves are fire-and-forget: a failure is logged and the deadline is not
/// rescheduled; the next committed edit schedules a fresh attempt.
pub struct PersistenceBridge<S: DocumentStore> {
    store: Arc<S>,
    document_id: String,
    saver: DebouncedSaver,
}

impl<S: DocumentStore> PersistenceBridge<S> {
    /// Create a bridge for one document.
    pub fn new(store: Arc<S>, document_id: impl Into<String>) -> Self {
        Self {
            store,
            document_id: document_id.into(),
            saver: DebouncedSaver::new(),
        }
    }

    /// Replace the saver (e.g. to shorten the delay in tests).
    pub fn with_saver(mut self, saver: DebouncedSaver) -> Self {
        self.saver = saver;
        self
    }

    /// Load and deserialize the document once.
    ///
    /// Malformed content is recovered as an empty scene and logged, never
    /// surfaced as a fatal error. Save scheduling is suppressed for the
    /// duration so the hydrate is not mistaken for a user edit.
    pub async fn hydrate(&mut self) -> StorageResult<LoadOutcome> {
        self.saver.begin_hydrate();

        let loaded = self.store.load(&self.document_id).await;
        let blob = match loaded {
            Ok(blob) => blob,
            Err(StorageError::NotFound(_)) => {
                self.saver.finish_hydrate(None);
                return Ok(LoadOutcome::NotFound);
            }
            Err(err) => {
                self.saver.finish_hydrate(None);
                return Err(err);
            }
        };

        match Scene::from_json(&blob) {
            Ok(scene) => {
                self.saver.finish_hydrate(Some(blob));
                Ok(LoadOutcome::Loaded(scene))
            }
            Err(err) => {
                warn!(
                    "malformed content for document {}, starting empty: {}",
                    self.document_id, err
                );
                self.saver.finish_hydrate(None);
                Ok(LoadOutcome::Loaded(Scene::new()))
            }
        }
    }

    /// Record a committed edit; schedules a debounced save.
    pub fn note_change(&mut self, scene: &Scene, now: Instant) {
        self.saver.note_change(scene, now);
    }

    /// Save the pending payload if its deadline has passed.
    /// Returns true if a save reached the store.
    pub async fn flush_due(&mut self, now: Instant) -> bool {
        let Some(payload) = self.saver.take_due(now) else {
            return false;
        };
        self.save_payload(payload).await
    }

    /// Save any pending payload immediately (editor unmount).
    pub async fn flush_now(&mut self) -> bool {
        let Some(payload) = self.saver.flush() else {
            return false;
        };
        self.save_payload(payload).await
    }

    /// Drop any pending save without persisting it.
    pub fn cancel_pending(&mut self) {
        self.saver.cancel();
    }

    pub fn has_pending_save(&self) -> bool {
        self.saver.has_pending()
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    async fn save_payload(&mut self, payload: String) -> bool {
        let saved = self.store.save(&self.document_id, &payload).await;
        match saved {
            Ok(()) => {
                self.saver.mark_saved(payload);
                true
            }
            Err(err) => {
                // Not rescheduled; the next edit triggers a fresh attempt.
                error!("failed to save document {}: {}", self.document_id, err);
                false
            }
        }
    }
}
