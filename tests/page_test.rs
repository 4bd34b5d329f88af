//! Page Behaviour Tests
//!
//! Exclusive playback, language resolution, and navbar flows as a page
//! would drive them.

use reelrotor::models::Language;
use reelrotor::page::language::update_nav_text;
use reelrotor::page::{LanguageManager, NavLink, NavbarState, PlayerGroup, PreferenceStore};

// =============================================================================
// Player Tests
// =============================================================================

#[test]
fn test_at_most_one_inline_player_plays() {
    let mut group = PlayerGroup::new(4);
    let bg = group.add_background();
    group.play(bg).unwrap();

    for i in [0, 3, 1, 1, 2, 0] {
        group.play(i).unwrap();
        let playing = group
            .players()
            .iter()
            .filter(|p| p.playing && !p.background)
            .count();
        assert_eq!(playing, 1);
        assert!(group.players()[bg].playing);
    }
}

#[test]
fn test_background_start_leaves_inline_playing() {
    let mut group = PlayerGroup::new(2);
    group.play(0).unwrap();
    let bg = group.add_background();

    let paused = group.play(bg).unwrap();

    assert!(paused.is_empty());
    assert!(group.players()[0].playing);
    assert!(group.players()[bg].playing);
    assert_eq!(group.now_playing(), Some(0));
}

#[test]
fn test_background_ignores_surface_clicks() {
    let mut group = PlayerGroup::new(1);
    let bg = group.add_background();
    group.play(bg).unwrap();

    assert!(!group.click_video(bg, 10.0, 400.0).unwrap());
    assert!(group.players()[bg].playing);
}

#[test]
fn test_buttons_track_playback() {
    let mut group = PlayerGroup::new(2);
    group.play(0).unwrap();
    group.play(1).unwrap();
    group.pause(1).unwrap();

    for player in group.players() {
        assert_eq!(player.button_visible(), !player.playing);
    }
    assert_eq!(group.now_playing(), None);
}

// =============================================================================
// Language Tests
// =============================================================================

#[test]
fn test_first_visit_from_arabic_browser() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreferenceStore::new(dir.path().join("prefs.toml"));
    let manager = LanguageManager::init(store, Some("ar-SA"));

    let mut links = vec![
        NavLink::new("Work", "أعمالنا"),
        NavLink::new("Contact", "تواصل"),
    ];
    manager.apply(&mut links);

    assert_eq!(manager.current(), Language::Arabic);
    assert_eq!(links[0].text, "أعمالنا");
    assert_eq!(links[1].text, "تواصل");
}

#[test]
fn test_toggle_twice_returns_to_english() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    let mut manager = LanguageManager::init(PreferenceStore::new(&path), Some("en-GB"));

    assert_eq!(manager.toggle().unwrap(), Language::Arabic);
    assert_eq!(manager.toggle().unwrap(), Language::English);
    assert_eq!(PreferenceStore::new(&path).load().as_deref(), Some("en"));

    let mut links = vec![NavLink::new("Work", "أعمالنا")];
    update_nav_text(&mut links, Language::Arabic);
    manager.apply(&mut links);
    assert_eq!(links[0].text, "Work");
}

#[test]
fn test_unreadable_preference_falls_back_to_locale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let manager = LanguageManager::init(PreferenceStore::new(&path), Some("ar"));
    assert_eq!(manager.current(), Language::Arabic);
}

// =============================================================================
// Navbar Tests
// =============================================================================

#[test]
fn test_scroll_session() {
    let mut nav = NavbarState::default();
    let expected = [
        (30.0, false, false),
        (90.0, false, true),
        (400.0, true, true),
        (800.0, true, true),
        (780.0, false, true),
        (20.0, false, false),
    ];

    for (y, hidden, solid) in expected {
        nav.on_scroll(y);
        assert_eq!(nav.hidden, hidden, "hidden at {}", y);
        assert_eq!(nav.solid, solid, "solid at {}", y);
    }
}
