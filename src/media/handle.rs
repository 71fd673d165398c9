/*!
 * Media handle abstraction.
 *
 * A handle is owned by the UI component that created it. The coordinator
 * only reads its paused state and asks it to pause.
 */

use std::fmt::Debug;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::errors::MediaError;

/// Type tag of a playable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            _ => Err(anyhow!("Invalid media kind: {}", s)),
        }
    }
}

/// A playable element that can be coordinated
///
/// Identity is the allocation behind the `Arc` the handle is registered
/// with, so two distinct elements never compare equal even if their state
/// does.
pub trait MediaHandle: Send + Sync + Debug {
    /// Video or audio
    fn kind(&self) -> MediaKind;

    /// Current paused state, read fresh on every call
    fn is_paused(&self) -> bool;

    /// Pause playback
    fn pause(&self) -> Result<(), MediaError>;
}

/// Shared reference to a registered handle
pub type SharedMedia = Arc<dyn MediaHandle>;
