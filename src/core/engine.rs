use crate::core::dsu::DisjointSet;
use crate::core::report::build_report;
use crate::core::scoring::score_groups;
use crate::core::types::GroupResult;
use crate::core::vocab::Vocabulary;
use crate::fuzzy::masking::link_variants;
use tracing::debug;

/// The full grouping pipeline: ingest, link, score, report. Strictly
/// staged and single-threaded; each phase's output is frozen before the
/// next phase reads it.
pub struct ClusterEngine {
    window: usize,
}

impl ClusterEngine {
    /// `window` is the maximum distance, in text positions, at which
    /// two occurrences of one cluster count as near each other.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Runs the pipeline over a raw token stream and returns the report
    /// records in output order. Input on which no token survives
    /// normalization yields an empty report, not an error.
    pub fn run<I, S>(&self, tokens: I) -> Vec<GroupResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocab = Vocabulary::from_tokens(tokens);
        if vocab.is_empty() {
            debug!("no usable tokens; skipping the pipeline");
            return Vec::new();
        }
        debug!(
            "ingest done - forms={}, text_len={}",
            vocab.len(),
            vocab.text().len()
        );

        let mut dsu = DisjointSet::new(vocab.len());
        link_variants(&vocab, &mut dsu);

        let counts = score_groups(vocab.text(), &mut dsu, self.window);
        debug!(
            "scoring done - window={}, qualifying_clusters={}",
            self.window,
            counts.len()
        );

        build_report(&vocab, &mut dsu, &counts)
    }
}
