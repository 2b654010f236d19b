pub mod depth;
pub mod namer;
pub mod segment;

pub use depth::{compute_depths, first_parent_depth};
pub use namer::{name_branches, processing_order};
pub use segment::label_merge_segments;

use crate::core::{BranchRecord, CommitRecord, History};
use crate::decor;
use crate::error::{AttributeError, Diagnostic};

/// Runs the full attribution pipeline over raw API records.
pub struct Attributor {
    trunk: String,
}

impl Attributor {
    pub fn new() -> Self {
        Self {
            trunk: "master".to_string(),
        }
    }

    /// Set the trunk branch name
    pub fn trunk(mut self, name: &str) -> Self {
        self.trunk = name.to_string();
        self
    }

    /// Build the ancestry arena and run every annotation pass.
    ///
    /// Passes run in a fixed order: depth, branch naming, merge
    /// segments, command hints, message wrapping. Each topic branch
    /// re-walks its ancestry independently, so many long-lived
    /// branches over a deep history cost O(commits x chain length);
    /// the run is synchronous and completes before the result is used.
    pub fn annotate(
        &self,
        commits: Vec<CommitRecord>,
        branches: Vec<BranchRecord>,
    ) -> Result<History, AttributeError> {
        let mut history = History::build(commits, branches);

        compute_depths(&mut history);
        name_branches(&mut history, &self.trunk)?;
        label_merge_segments(&mut history);
        decor::attach_command_hints(&mut history);
        decor::wrap_messages(&mut history);
        sweep_unlabeled(&mut history);

        Ok(history)
    }
}

impl Default for Attributor {
    fn default() -> Self {
        Self::new()
    }
}

/// Report commits no branch ref reached. Possible only when the input
/// holds commits unreachable from every branch tip.
fn sweep_unlabeled(history: &mut History) {
    for idx in 0..history.commits().len() {
        if history.commit(idx).branch.is_none() {
            let commit = history.commit(idx).sha.clone();
            history.push_diagnostic(Diagnostic::UnlabeledCommit { commit });
        }
    }
}
