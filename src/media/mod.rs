/*!
 * Exclusive media playback.
 *
 * # Architecture
 *
 * - `handle`: The `MediaHandle` trait implemented by playable elements
 * - `coordinator`: Registry that pauses every other element on play
 * - `mock`: Recording handle for tests
 */

pub mod handle;
pub mod coordinator;
pub mod mock;

// Re-export main types
pub use handle::{MediaHandle, MediaKind, SharedMedia};
pub use coordinator::{MediaCoordinator, MediaRegistration, PauseSummary};
