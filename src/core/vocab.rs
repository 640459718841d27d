// File: src/core/vocab.rs
use crate::core::normalize::normalize;
use crate::core::types::WordId;
use rustc_hash::FxHashMap;

/// The interned vocabulary plus the id-encoded text sequence, built in
/// a single forward pass and frozen afterwards.
///
/// Each distinct normalized form gets the next dense id the first time
/// it appears; `text` records one id per surviving input token, repeats
/// included, so its indices double as the proximity coordinates.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    forms: Vec<String>,
    ids: FxHashMap<String, WordId>,
    text: Vec<WordId>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the vocabulary from a raw token stream.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        for token in tokens {
            vocab.push_token(token.as_ref());
        }
        vocab
    }

    /// Normalizes one raw token and records it. Tokens that normalize
    /// to the empty string contribute nothing — they are skipped, not
    /// errors. Amortized O(k) in the token length.
    pub fn push_token(&mut self, raw: &str) {
        let form = normalize(raw);
        if form.is_empty() {
            return;
        }
        let id = match self.ids.get(&form) {
            Some(&id) => id,
            None => {
                let id = self.forms.len();
                self.forms.push(form.clone());
                self.ids.insert(form, id);
                id
            }
        };
        self.text.push(id);
    }

    /// Number of distinct normalized forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// The form owning `id`.
    pub fn form(&self, id: WordId) -> &str {
        &self.forms[id]
    }

    /// All forms in id order.
    pub fn forms(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.forms.iter().enumerate().map(|(id, f)| (id, f.as_str()))
    }

    /// Exact lookup of a normalized form.
    pub fn id_of(&self, form: &str) -> Option<WordId> {
        self.ids.get(form).copied()
    }

    /// The id-encoded text sequence, input order preserved.
    pub fn text(&self) -> &[WordId] {
        &self.text
    }
}
