use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a commit in the `History` arena
pub type CommitIdx = usize;

/// Raw commit record as returned by the hosting API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    #[serde(default)]
    pub parents: Vec<ParentRef>,
    #[serde(default)]
    pub message: String,
}

/// Parent reference inside a raw commit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentRef {
    pub sha: String,
}

/// A commit node in the ancestry arena
#[derive(Debug, Clone)]
pub struct Commit {
    /// Unique commit ID (SHA)
    pub sha: String,
    /// Parent commit IDs, index 0 = mainline parent
    pub parents: SmallVec<[String; 2]>,
    /// Commit message
    pub message: String,
    /// Arena indices of child commits, in input discovery order
    pub children: Vec<CommitIdx>,
    /// Owning branch label, filled in by the naming passes
    pub branch: Option<String>,
    /// Suggested reference commands
    pub commands: String,
}

impl Commit {
    pub fn new(record: CommitRecord) -> Self {
        Self {
            sha: record.sha,
            parents: record.parents.into_iter().map(|p| p.sha).collect(),
            message: record.message,
            children: Vec::new(),
            branch: None,
            commands: String::new(),
        }
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if this is a merge commit (multiple parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a tip commit (no children)
    pub fn is_tip(&self) -> bool {
        self.children.is_empty()
    }
}

/// Fully annotated commit in the shape the rendering layer consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedCommit {
    pub sha: String,
    pub parents: Vec<String>,
    /// Child commit IDs, in input discovery order
    pub children: Vec<String>,
    /// Final branch label after all passes
    pub branch: String,
    pub commands: String,
    /// Re-wrapped multi-line message
    pub message: String,
}
