//! Rotating selection policy
//!
//! Picks what goes on screen next. Items that were not on screen last time
//! ("fresh") always win; items that were ("stale") only fill leftover slots.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::models::{DisplayedSet, Selection, VideoItem, SLOT_COUNT};

/// Select up to [`SLOT_COUNT`] items, preferring ones not in `previously_shown`
pub fn select<R: Rng + ?Sized>(
    manifest: &[VideoItem],
    previously_shown: &DisplayedSet,
    rng: &mut R,
) -> Selection {
    select_n(manifest, previously_shown, SLOT_COUNT, rng)
}

/// Same as [`select`] using the thread-local rng
pub fn select_random(manifest: &[VideoItem], previously_shown: &DisplayedSet) -> Selection {
    select(manifest, previously_shown, &mut rand::thread_rng())
}

/// Select up to `count` items, preferring ones not in `previously_shown`
pub fn select_n<R: Rng + ?Sized>(
    manifest: &[VideoItem],
    previously_shown: &DisplayedSet,
    count: usize,
    rng: &mut R,
) -> Selection {
    let (mut fresh, mut stale) = partition(manifest, previously_shown);

    fresh.shuffle(rng);
    stale.shuffle(rng);

    let mut chosen: Vec<VideoItem> = fresh.into_iter().take(count).cloned().collect();
    let fresh_taken = chosen.len();
    chosen.extend(stale.into_iter().take(count - fresh_taken).cloned());

    let newly_shown = DisplayedSet::from_ids(chosen.iter().map(|item| item.id.clone()));

    tracing::debug!(
        chosen = ?newly_shown.ids(),
        reused = chosen.len() - fresh_taken,
        "selected reels"
    );

    Selection {
        chosen,
        newly_shown,
    }
}

/// Split the manifest into (fresh, stale), dropping repeated ids
fn partition<'a>(
    manifest: &'a [VideoItem],
    previously_shown: &DisplayedSet,
) -> (Vec<&'a VideoItem>, Vec<&'a VideoItem>) {
    let mut seen = HashSet::new();
    manifest
        .iter()
        .filter(|item| seen.insert(item.id.clone()))
        .partition(|item| !previously_shown.contains(&item.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn items(ids: &[&str]) -> Vec<VideoItem> {
        ids.iter().map(|id| VideoItem::new(*id)).collect()
    }

    fn ids(selection: &Selection) -> Vec<&str> {
        selection.chosen.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_partition_splits_on_shown() {
        let manifest = items(&["A", "B", "C", "D"]);
        let shown = DisplayedSet::from_ids(["B", "D"]);
        let (fresh, stale) = partition(&manifest, &shown);
        let fresh: Vec<_> = fresh.iter().map(|i| i.id.as_str()).collect();
        let stale: Vec<_> = stale.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(fresh, vec!["A", "C"]);
        assert_eq!(stale, vec!["B", "D"]);
    }

    #[test]
    fn test_fills_from_stale_when_fresh_short() {
        let mut rng = StdRng::seed_from_u64(7);
        let manifest = items(&["A", "B", "C", "D", "E"]);
        let shown = DisplayedSet::from_ids(["A", "B", "C"]);

        let selection = select(&manifest, &shown, &mut rng);
        let chosen = ids(&selection);

        assert_eq!(chosen.len(), 3);
        // Fresh items lead, in some order
        let mut head = chosen[..2].to_vec();
        head.sort();
        assert_eq!(head, vec!["D", "E"]);
        assert!(shown.contains(chosen[2]));
    }

    #[test]
    fn test_duplicate_manifest_ids_not_repeated() {
        let mut rng = StdRng::seed_from_u64(1);
        let manifest = items(&["A", "A", "B"]);
        let selection = select(&manifest, &DisplayedSet::new(), &mut rng);
        let mut chosen = ids(&selection);
        chosen.sort();
        assert_eq!(chosen, vec!["A", "B"]);
    }

    #[test]
    fn test_select_n_respects_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let manifest = items(&["A", "B", "C", "D", "E", "F"]);
        let selection = select_n(&manifest, &DisplayedSet::new(), 5, &mut rng);
        assert_eq!(selection.chosen.len(), 5);
        assert_eq!(selection.newly_shown.len(), 5);
    }

    #[test]
    fn test_zero_count_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let manifest = items(&["A", "B"]);
        let selection = select_n(&manifest, &DisplayedSet::new(), 0, &mut rng);
        assert!(selection.is_empty());
    }
}
