/*!
 * Exclusive playback coordination.
 *
 * The coordinator keeps the set of currently mounted media handles. When one
 * of them starts playing the UI calls `pause_others`, which pauses every
 * other handle that is still playing. A handle that fails to pause (or
 * panics) is logged and skipped; the rest of the pass continues.
 *
 * There is no global instance. The owner of the view tree creates one
 * coordinator and hands clones of it to every media component; clones share
 * the same registry.
 */

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, trace, warn};
use parking_lot::RwLock;

use crate::errors::MediaError;

use super::handle::SharedMedia;

/// Outcome of a pause pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PauseSummary {
    /// Handles that were playing and have been paused
    pub paused: usize,
    /// Handles that were already paused and left alone
    pub already_paused: usize,
    /// Pause attempts that failed
    pub failed: Vec<MediaError>,
}

impl PauseSummary {
    /// Whether every pause attempt succeeded
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Registry of mounted media handles enforcing single playback
#[derive(Debug, Clone, Default)]
pub struct MediaCoordinator {
    handles: Arc<RwLock<Vec<SharedMedia>>>,
}

impl MediaCoordinator {
    /// Create an empty coordinator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handle. Registering the same handle again has no effect.
    ///
    /// Returns `true` when the handle was newly added.
    pub fn register(&self, handle: SharedMedia) -> bool {
        let mut handles = self.handles.write();
        if handles.iter().any(|h| Arc::ptr_eq(h, &handle)) {
            trace!("{} handle already registered", handle.kind());
            return false;
        }
        debug!("Registered {} handle ({} total)", handle.kind(), handles.len() + 1);
        handles.push(handle);
        true
    }

    /// Remove a handle. Removing an absent handle has no effect.
    pub fn unregister(&self, handle: &SharedMedia) {
        let mut handles = self.handles.write();
        let before = handles.len();
        handles.retain(|h| !Arc::ptr_eq(h, handle));
        if handles.len() < before {
            debug!("Unregistered {} handle ({} left)", handle.kind(), handles.len());
        }
    }

    /// Register a handle for the lifetime of the returned guard
    ///
    /// If the handle was already registered the guard does not own that
    /// registration and leaves it in place when dropped.
    pub fn register_scoped(&self, handle: SharedMedia) -> MediaRegistration {
        let owned = self.register(Arc::clone(&handle));
        MediaRegistration {
            coordinator: self.clone(),
            handle,
            owned,
        }
    }

    /// Whether `handle` is currently registered
    pub fn contains(&self, handle: &SharedMedia) -> bool {
        self.handles.read().iter().any(|h| Arc::ptr_eq(h, handle))
    }

    /// Number of registered handles
    pub fn len(&self) -> usize {
        self.handles.read().len()
    }

    /// Whether no handle is registered
    pub fn is_empty(&self) -> bool {
        self.handles.read().is_empty()
    }

    /// Number of registered handles that are not paused right now
    pub fn playing_count(&self) -> usize {
        self.handles.read().iter().filter(|h| !h.is_paused()).count()
    }

    /// Pause every registered handle other than `current` that is playing
    ///
    /// Call this synchronously from the play event of `current`.
    pub fn pause_others(&self, current: &SharedMedia) -> PauseSummary {
        let summary = self.pause_matching(|h| !Arc::ptr_eq(h, current));
        debug!(
            "pause_others: paused={}, already_paused={}, failed={}",
            summary.paused,
            summary.already_paused,
            summary.failed.len()
        );
        summary
    }

    /// Pause every registered handle that is playing
    pub fn pause_all(&self) -> PauseSummary {
        self.pause_matching(|_| true)
    }

    fn pause_matching<F>(&self, mut selected: F) -> PauseSummary
    where
        F: FnMut(&SharedMedia) -> bool,
    {
        // Snapshot so a handle may call back into the coordinator from `pause`
        let snapshot: Vec<SharedMedia> = self.handles.read().clone();
        let mut summary = PauseSummary::default();

        for handle in &snapshot {
            if !selected(handle) {
                continue;
            }
            if handle.is_paused() {
                summary.already_paused += 1;
                continue;
            }

            trace!("Pausing {} handle", handle.kind());
            match try_pause(handle) {
                Ok(()) => summary.paused += 1,
                Err(error) => {
                    warn!("Media pause failed, continuing: {}", error);
                    summary.failed.push(error);
                }
            }
        }

        summary
    }
}

fn try_pause(handle: &SharedMedia) -> Result<(), MediaError> {
    match panic::catch_unwind(AssertUnwindSafe(|| handle.pause())) {
        Ok(result) => result,
        Err(_) => Err(MediaError::Panicked { kind: handle.kind() }),
    }
}

/// Keeps a handle registered until dropped
///
/// Create one when a media component mounts and drop it on teardown; this
/// brackets the registration exactly once. Only a guard that actually added
/// the handle removes it again.
#[derive(Debug)]
pub struct MediaRegistration {
    coordinator: MediaCoordinator,
    handle: SharedMedia,
    owned: bool,
}

impl MediaRegistration {
    /// The registered handle
    pub fn handle(&self) -> &SharedMedia {
        &self.handle
    }

    /// Whether dropping this guard unregisters the handle
    pub fn owns_registration(&self) -> bool {
        self.owned
    }

    /// Pause every other registered handle; call when this one starts playing
    pub fn pause_others(&self) -> PauseSummary {
        self.coordinator.pause_others(&self.handle)
    }
}

impl Drop for MediaRegistration {
    fn drop(&mut self) {
        if self.owned {
            self.coordinator.unregister(&self.handle);
        }
    }
}
