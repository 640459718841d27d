// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A unique identifier for a distinct normalized word form.
/// Ids are dense (0..n) and assigned in first-occurrence order.
pub type WordId = usize;

/// One reported cluster: the lexicographically smallest member form and
/// the number of its text occurrences that fell within the window of
/// another occurrence of the same cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResult {
    pub representative: String,
    pub count: u64,
}
