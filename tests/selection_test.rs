//! Selection Policy Tests
//!
//! Fresh-first rotation properties checked across many seeds and
//! manifest sizes.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use reelrotor::models::{DisplayedSet, VideoItem};
use reelrotor::rotation::{render, select, SlotBoard};

fn manifest(ids: &[&str]) -> Vec<VideoItem> {
    ids.iter().map(|id| VideoItem::new(*id)).collect()
}

fn numbered(n: usize) -> Vec<VideoItem> {
    (0..n).map(|i| VideoItem::new(format!("v{}", i))).collect()
}

fn chosen_ids(items: &[VideoItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}

// =============================================================================
// Size Properties
// =============================================================================

#[test]
fn test_three_distinct_from_manifest_when_nothing_shown() {
    for size in 3..12 {
        let items = numbered(size);
        let all: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = select(&items, &DisplayedSet::new(), &mut rng);
            let ids = chosen_ids(&selection.chosen);

            assert_eq!(ids.len(), 3);
            let unique: HashSet<_> = ids.iter().cloned().collect();
            assert_eq!(unique.len(), 3, "duplicates in {:?}", ids);
            assert!(unique.is_subset(&all));
        }
    }
}

#[test]
fn test_small_manifest_returns_everything_once() {
    for size in 0..3 {
        let items = numbered(size);
        let mut rng = StdRng::seed_from_u64(size as u64);
        let selection = select(&items, &DisplayedSet::new(), &mut rng);

        let mut ids = chosen_ids(&selection.chosen);
        ids.sort();
        let mut expected = chosen_ids(&items);
        expected.sort();
        assert_eq!(ids, expected);
    }
}

// =============================================================================
// Fresh / Stale Properties
// =============================================================================

#[test]
fn test_enough_fresh_means_no_repeats() {
    let items = numbered(8);
    let shown = DisplayedSet::from_ids(["v0", "v1", "v2"]);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = select(&items, &shown, &mut rng);
        assert_eq!(selection.chosen.len(), 3);
        assert!(selection.chosen.iter().all(|i| !shown.contains(&i.id)));
    }
}

#[test]
fn test_short_fresh_reuses_exactly_the_gap() {
    // 4 items, 3 shown -> 1 fresh, 2 reused
    let items = numbered(4);
    let shown = DisplayedSet::from_ids(["v0", "v1", "v2"]);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = select(&items, &shown, &mut rng);
        let reused = selection
            .chosen
            .iter()
            .filter(|i| shown.contains(&i.id))
            .count();

        assert_eq!(selection.chosen.len(), 3);
        assert_eq!(reused, 2);
        assert_eq!(selection.chosen[0].id, "v3");
    }
}

#[test]
fn test_scenario_five_items_three_shown() {
    let items = manifest(&["A", "B", "C", "D", "E"]);
    let shown = DisplayedSet::from_ids(["A", "B", "C"]);

    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = select(&items, &shown, &mut rng);
        let ids = chosen_ids(&selection.chosen);

        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&"D".to_string()));
        assert!(ids.contains(&"E".to_string()));
        assert_eq!(ids.iter().filter(|id| shown.contains(id)).count(), 1);
    }
}

#[test]
fn test_scenario_three_items_nothing_shown() {
    let items = manifest(&["A", "B", "C"]);
    let mut rng = StdRng::seed_from_u64(11);
    let selection = select(&items, &DisplayedSet::new(), &mut rng);

    let mut ids = chosen_ids(&selection.chosen);
    ids.sort();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_scenario_empty_manifest() {
    let mut rng = StdRng::seed_from_u64(0);
    let shown = DisplayedSet::from_ids(["A"]);
    let selection = select(&[], &shown, &mut rng);

    assert!(selection.chosen.is_empty());
    assert!(selection.newly_shown.is_empty());

    // Nothing to render, so the board is untouched
    let mut board = SlotBoard::default();
    let before = board.clone();
    board.apply(&render(&selection, "https://www.instagram.com"));
    assert_eq!(board, before);
}

// =============================================================================
// State Threading
// =============================================================================

#[test]
fn test_newly_shown_matches_chosen_order() {
    let items = numbered(10);
    let mut rng = StdRng::seed_from_u64(5);
    let selection = select(&items, &DisplayedSet::new(), &mut rng);
    assert_eq!(
        selection.newly_shown.ids(),
        chosen_ids(&selection.chosen).as_slice()
    );
}

#[test]
fn test_six_items_alternate_between_halves() {
    // With exactly twice the slot count, each call shows the other half
    let items = numbered(6);
    let mut rng = StdRng::seed_from_u64(9);
    let mut shown = DisplayedSet::new();

    for _ in 0..10 {
        let selection = select(&items, &shown, &mut rng);
        let overlap = selection
            .chosen
            .iter()
            .filter(|i| shown.contains(&i.id))
            .count();
        assert_eq!(overlap, 0);
        shown = selection.newly_shown;
    }
}

#[test]
fn test_shuffle_reaches_every_item() {
    let items = numbered(9);
    let mut seen = HashSet::new();
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = select(&items, &DisplayedSet::new(), &mut rng);
        seen.extend(chosen_ids(&selection.chosen));
    }
    assert_eq!(seen.len(), 9);
}
