// File: src/core/dsu.rs
use crate::core::types::WordId;

/// Union-find over dense word ids with path compression and union by
/// size. Accumulates unions during equivalence building, then is only
/// queried; there is no removal.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<WordId>,
    size: Vec<u32>,
}

impl DisjointSet {
    /// One singleton component per id in `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Representative of `i`'s component. Compresses the traversed path
    /// iteratively (path halving), so deep chains cannot overflow the
    /// stack and repeated lookups approach O(1).
    pub fn find(&mut self, mut i: WordId) -> WordId {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Merges the components of `i` and `j`, attaching the smaller tree
    /// under the larger root. No-op when they already share a root.
    pub fn unite(&mut self, i: WordId, j: WordId) {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);
        if root_i == root_j {
            return;
        }
        if self.size[root_i] < self.size[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent[root_j] = root_i;
        self.size[root_i] += self.size[root_j];
    }

    /// Number of ids the forest was built over.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_forest_is_all_singletons() {
        let mut dsu = DisjointSet::new(4);
        for i in 0..4 {
            assert_eq!(dsu.find(i), i);
        }
    }

    #[test]
    fn find_is_idempotent() {
        let mut dsu = DisjointSet::new(5);
        dsu.unite(0, 1);
        dsu.unite(1, 2);
        dsu.unite(3, 4);

        for i in 0..5 {
            let root = dsu.find(i);
            assert_eq!(dsu.find(root), root);
        }
    }

    #[test]
    fn unions_are_transitive_on_membership() {
        let mut dsu = DisjointSet::new(4);
        dsu.unite(0, 1);
        dsu.unite(1, 2);

        assert_eq!(dsu.find(0), dsu.find(1));
        assert_eq!(dsu.find(1), dsu.find(2));
        assert_ne!(dsu.find(0), dsu.find(3));
    }

    #[test]
    fn repeated_unions_are_harmless() {
        let mut dsu = DisjointSet::new(3);
        dsu.unite(0, 1);
        dsu.unite(1, 0);
        dsu.unite(0, 1);

        assert_eq!(dsu.find(0), dsu.find(1));
        assert_eq!(dsu.find(2), 2);
    }

    #[test]
    fn smaller_component_joins_the_larger() {
        let mut dsu = DisjointSet::new(4);
        dsu.unite(0, 1);
        dsu.unite(0, 2);
        let big_root = dsu.find(0);

        // The singleton must be absorbed, not the other way round.
        dsu.unite(3, 0);
        assert_eq!(dsu.find(3), big_root);
    }
}
