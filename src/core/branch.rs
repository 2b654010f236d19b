use serde::{Deserialize, Serialize};

use crate::core::commit::CommitIdx;

/// Index of a branch in the `History` arena
pub type BranchIdx = usize;

/// Raw branch record as returned by the hosting API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchRecord {
    pub name: String,
    /// Commit ID the branch points at
    pub tip: String,
}

/// A branch reference with its derived depth
#[derive(Debug, Clone)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Commit ID the branch points at
    pub tip: String,
    /// Arena index of the tip commit, if it is in the fetched history
    pub tip_idx: Option<CommitIdx>,
    /// Length of the first-parent chain from the tip
    pub depth: usize,
}

impl Branch {
    pub fn new(record: BranchRecord, tip_idx: Option<CommitIdx>) -> Self {
        Self {
            name: record.name,
            tip: record.tip,
            tip_idx,
            depth: 0,
        }
    }
}
