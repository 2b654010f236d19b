use serde::Serialize;
use thiserror::Error;

/// Fatal attribution failures
#[derive(Debug, Error)]
pub enum AttributeError {
    /// The branch list has no entry for the trunk branch, so trunk
    /// painting has no starting point.
    #[error("no branch named `{0}` in the branch list")]
    MissingTrunkBranch(String),
}

/// Non-fatal degraded-input records.
///
/// A missing reference ends the local traversal where it occurs; the
/// pipeline keeps going and reports the drop here so callers can
/// detect truncated histories.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Diagnostic {
    #[error("commit {commit} references missing parent {parent}")]
    MissingParent { commit: String, parent: String },

    #[error("branch {branch} points at missing commit {tip}")]
    MissingBranchTip { branch: String, tip: String },

    #[error("commit {commit} is not reachable from any branch")]
    UnlabeledCommit { commit: String },
}
