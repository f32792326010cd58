//! Overlap statistics for a two-way merge.

use serde::{Deserialize, Serialize};

/// Counts describing how two containers overlapped when merged.
///
/// `merged_len == left_len + right_len - shared` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Distinct elements in the left input.
    pub left_len: usize,
    /// Distinct elements in the right input.
    pub right_len: usize,
    /// Elements present in both inputs.
    pub shared: usize,
    /// Distinct elements in the merged output.
    pub merged_len: usize,
}

impl MergeReport {
    /// Elements contributed only by the left input.
    pub fn left_only(&self) -> usize {
        self.left_len - self.shared
    }

    /// Elements contributed only by the right input.
    pub fn right_only(&self) -> usize {
        self.right_len - self.shared
    }

    /// Returns `true` if the inputs had no element in common.
    pub fn is_disjoint(&self) -> bool {
        self.shared == 0
    }
}
