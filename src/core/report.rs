// File: src/core/report.rs
use crate::core::dsu::DisjointSet;
use crate::core::types::{GroupResult, WordId};
use crate::core::vocab::Vocabulary;
use rustc_hash::FxHashMap;

/// Elects the lexicographically smallest member form of each scored
/// cluster as its representative and produces one record per cluster,
/// sorted by count descending, then representative ascending. The sort
/// is total: no two clusters share a representative, so the ordering
/// is fully deterministic.
pub fn build_report(
    vocab: &Vocabulary,
    dsu: &mut DisjointSet,
    counts: &FxHashMap<WordId, u64>,
) -> Vec<GroupResult> {
    let mut reps: FxHashMap<WordId, &str> = FxHashMap::default();
    for (id, form) in vocab.forms() {
        let root = dsu.find(id);
        if !counts.contains_key(&root) {
            continue;
        }
        match reps.get_mut(&root) {
            Some(rep) => {
                if form < *rep {
                    *rep = form;
                }
            }
            None => {
                reps.insert(root, form);
            }
        }
    }

    let mut results: Vec<GroupResult> = reps
        .into_iter()
        .map(|(root, form)| GroupResult {
            representative: form.to_string(),
            count: counts[&root],
        })
        .collect();

    results.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.representative.cmp(&b.representative))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representative_is_the_smallest_member_form() {
        let vocab = Vocabulary::from_tokens(["zebra", "apple", "mango"]);
        let mut dsu = DisjointSet::new(3);
        dsu.unite(0, 1);
        dsu.unite(1, 2);

        let mut counts = FxHashMap::default();
        counts.insert(dsu.find(0), 5u64);

        let report = build_report(&vocab, &mut dsu, &counts);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].representative, "apple");
        assert_eq!(report[0].count, 5);
    }

    #[test]
    fn unscored_clusters_are_left_out() {
        let vocab = Vocabulary::from_tokens(["dog", "cat"]);
        let mut dsu = DisjointSet::new(2);

        let mut counts = FxHashMap::default();
        counts.insert(1, 2u64);

        let report = build_report(&vocab, &mut dsu, &counts);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].representative, "cat");
    }

    #[test]
    fn sorted_by_count_desc_then_representative_asc() {
        let vocab = Vocabulary::from_tokens(["pear", "dog", "fig"]);
        let mut dsu = DisjointSet::new(3);

        let mut counts = FxHashMap::default();
        counts.insert(0, 2u64); // pear
        counts.insert(1, 4u64); // dog
        counts.insert(2, 2u64); // fig

        let report = build_report(&vocab, &mut dsu, &counts);
        let order: Vec<&str> = report.iter().map(|r| r.representative.as_str()).collect();
        assert_eq!(order, ["dog", "fig", "pear"]);
    }
}
