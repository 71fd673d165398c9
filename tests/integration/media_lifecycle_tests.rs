/*!
 * Player lifecycle tests: mount, play, teardown
 */

use std::sync::Arc;

use snipmark::media::mock::MockMedia;
use snipmark::{MediaCoordinator, MediaHandle, MediaKind, SharedMedia};

/// A player component owning one media element and its registration
struct Player {
    element: Arc<MockMedia>,
    registration: snipmark::media::MediaRegistration,
}

impl Player {
    fn mount(coordinator: &MediaCoordinator, kind: MediaKind) -> Self {
        let element = Arc::new(MockMedia::paused(kind));
        let handle: SharedMedia = element.clone();
        let registration = coordinator.register_scoped(handle);
        Self { element, registration }
    }

    fn play(&self) {
        self.element.play();
        self.registration.pause_others();
    }
}

#[test]
fn test_playSequence_shouldKeepAtMostOnePlaying() {
    let coordinator = MediaCoordinator::new();
    let players: Vec<Player> = [MediaKind::Video, MediaKind::Audio, MediaKind::Video]
        .into_iter()
        .map(|kind| Player::mount(&coordinator, kind))
        .collect();

    for index in [0, 1, 2, 1, 0] {
        players[index].play();
        assert_eq!(coordinator.playing_count(), 1);
        assert!(!players[index].element.is_paused());
    }
}

#[test]
fn test_teardown_shouldRemoveFromRegistry() {
    let coordinator = MediaCoordinator::new();
    let first = Player::mount(&coordinator, MediaKind::Video);
    let second = Player::mount(&coordinator, MediaKind::Audio);
    assert_eq!(coordinator.len(), 2);

    first.play();
    drop(first);
    assert_eq!(coordinator.len(), 1);

    // The unmounted player is no longer paused by the coordinator
    second.play();
    assert_eq!(coordinator.playing_count(), 1);
}

#[test]
fn test_sharedCoordinator_acrossComponents_shouldEnforceSinglePlayback() {
    let root = MediaCoordinator::new();
    let sidebar = root.clone();
    let main_view = root.clone();

    let clip = Player::mount(&sidebar, MediaKind::Video);
    let podcast = Player::mount(&main_view, MediaKind::Audio);

    clip.play();
    podcast.play();

    assert!(clip.element.is_paused());
    assert!(!podcast.element.is_paused());
    assert_eq!(root.playing_count(), 1);
}

#[test]
fn test_pauseAll_onNavigation_shouldStopEverything() {
    let coordinator = MediaCoordinator::new();
    let player = Player::mount(&coordinator, MediaKind::Video);
    player.play();

    let summary = coordinator.pause_all();
    assert_eq!(summary.paused, 1);
    assert_eq!(coordinator.playing_count(), 0);
}
