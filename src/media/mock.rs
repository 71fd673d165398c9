/*!
 * Mock media handle for testing.
 *
 * - `MockMedia::playing()` / `MockMedia::paused()` - pause always succeeds
 * - `MockMedia::failing()` - pause returns an error
 * - `MockMedia::panicking()` - pause panics
 */

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::errors::MediaError;

use super::handle::{MediaHandle, MediaKind};

/// How the mock reacts to `pause`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockPauseBehavior {
    /// Pauses normally
    Working,
    /// Returns `MediaError::PauseFailed`
    Failing,
    /// Panics
    Panicking,
}

/// In-memory media element that records pause calls
#[derive(Debug)]
pub struct MockMedia {
    kind: MediaKind,
    paused: AtomicBool,
    pause_calls: AtomicUsize,
    behavior: MockPauseBehavior,
}

impl MockMedia {
    /// Create a mock with explicit state and behavior
    pub fn new(kind: MediaKind, paused: bool, behavior: MockPauseBehavior) -> Self {
        Self {
            kind,
            paused: AtomicBool::new(paused),
            pause_calls: AtomicUsize::new(0),
            behavior,
        }
    }

    /// A playing element that pauses normally
    pub fn playing(kind: MediaKind) -> Self {
        Self::new(kind, false, MockPauseBehavior::Working)
    }

    /// A paused element that pauses normally
    pub fn paused(kind: MediaKind) -> Self {
        Self::new(kind, true, MockPauseBehavior::Working)
    }

    /// A playing element whose pause returns an error
    pub fn failing(kind: MediaKind) -> Self {
        Self::new(kind, false, MockPauseBehavior::Failing)
    }

    /// A playing element whose pause panics
    pub fn panicking(kind: MediaKind) -> Self {
        Self::new(kind, false, MockPauseBehavior::Panicking)
    }

    /// Simulate the user starting playback
    pub fn play(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Number of times `pause` has been invoked
    pub fn pause_calls(&self) -> usize {
        self.pause_calls.load(Ordering::SeqCst)
    }
}

impl MediaHandle for MockMedia {
    fn kind(&self) -> MediaKind {
        self.kind
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    fn pause(&self) -> Result<(), MediaError> {
        self.pause_calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockPauseBehavior::Working => {
                self.paused.store(true, Ordering::SeqCst);
                Ok(())
            }
            MockPauseBehavior::Failing => Err(MediaError::PauseFailed {
                kind: self.kind,
                reason: "element detached".to_string(),
            }),
            MockPauseBehavior::Panicking => panic!("mock {} element panicked in pause", self.kind),
        }
    }
}
