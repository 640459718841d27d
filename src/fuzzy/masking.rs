// File: src/fuzzy/masking.rs
use crate::core::dsu::DisjointSet;
use crate::core::types::WordId;
use crate::core::vocab::Vocabulary;
use rustc_hash::FxHashMap;

/// Wildcard byte used in masked patterns. It lies outside the
/// normalized alphabet (lowercase ASCII letters and apostrophes), so a
/// mask can never equal a real form's pattern by accident.
const SENTINEL: u8 = b'*';

/// An index of single-position wildcard masks. Two equal-length forms
/// that differ in exactly one character produce the same mask (e.g.
/// "color" and "colar" both yield "col*r") and get linked; that is the
/// whole trick, and it keeps matching near-linear in total form length
/// instead of quadratic in vocabulary size.
pub struct MaskIndex {
    /// Maps a masked pattern to the first WordId that produced it.
    /// Keys are byte strings; normalized forms are pure ASCII.
    masks: FxHashMap<Vec<u8>, WordId>,
}

impl MaskIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            masks: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Registers every single-position mask of `form` for `id`, uniting
    /// `id` with the previous owner whenever a mask is already taken.
    /// O(k^2) in the form length due to key copies. Forms of length <= 1
    /// carry no useful wildcard signal and are skipped entirely.
    pub fn add_form(&mut self, form: &str, id: WordId, dsu: &mut DisjointSet) {
        let bytes = form.as_bytes();
        if bytes.len() <= 1 {
            return;
        }
        debug_assert!(
            !bytes.contains(&SENTINEL),
            "normalized forms must not contain the mask sentinel"
        );

        let mut mask = bytes.to_vec();
        for j in 0..mask.len() {
            let original = mask[j];
            mask[j] = SENTINEL;
            match self.masks.get(mask.as_slice()) {
                Some(&owner) => dsu.unite(id, owner),
                None => {
                    self.masks.insert(mask.clone(), id);
                }
            }
            mask[j] = original;
        }
    }
}

/// Links every pair of vocabulary ids the two variant rules declare
/// equivalent: single-character substitution via the mask index, and
/// the plural/suffix trim. Each rule runs exactly once per id.
pub fn link_variants(vocab: &Vocabulary, dsu: &mut DisjointSet) {
    let mut index = MaskIndex::with_capacity(vocab.len() * 2);

    for (id, form) in vocab.forms() {
        index.add_form(form, id, dsu);

        // Suffix heuristic: "cats" joins "cat", "makes" joins "make".
        // Only fires when the trimmed base is itself a vocabulary form
        // longer than one character; deliberately asymmetric, and it
        // accepts coincidental pairs (any s/e word whose prefix exists).
        if let Some(&last) = form.as_bytes().last() {
            if last == b's' || last == b'e' {
                let base = &form[..form.len() - 1];
                if base.len() > 1 {
                    if let Some(base_id) = vocab.id_of(base) {
                        dsu.unite(id, base_id);
                    }
                }
            }
        }
    }
}
