// File: src/core/scoring.rs
use crate::core::dsu::DisjointSet;
use crate::core::types::WordId;
use rustc_hash::FxHashMap;

/// Counts, per cluster root, how many text positions lie within
/// `window` positions of another occurrence of the same cluster.
///
/// Positions are bucketed by root in one forward scan, so every
/// bucket's list is ascending. A position qualifies when its immediate
/// predecessor in the list is at most `window` behind it or its
/// immediate successor is at most `window` ahead; each qualifying
/// position contributes exactly once, however many neighbors it has.
/// Clusters with fewer than two positions, or a zero total, are
/// excluded from the result.
pub fn score_groups(
    text: &[WordId],
    dsu: &mut DisjointSet,
    window: usize,
) -> FxHashMap<WordId, u64> {
    let mut positions: Vec<Vec<usize>> = vec![Vec::new(); dsu.len()];
    for (p, &id) in text.iter().enumerate() {
        let root = dsu.find(id);
        positions[root].push(p);
    }

    let mut counts = FxHashMap::default();
    for (root, pos) in positions.iter().enumerate() {
        if pos.len() < 2 {
            continue;
        }
        let mut total = 0u64;
        for k in 0..pos.len() {
            let near_prev = k > 0 && pos[k] - pos[k - 1] <= window;
            let near_next = k + 1 < pos.len() && pos[k + 1] - pos[k] <= window;
            if near_prev || near_next {
                total += 1;
            }
        }
        if total > 0 {
            counts.insert(root, total);
        }
    }
    counts
}
