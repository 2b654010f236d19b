pub mod branch;
pub mod commit;
pub mod history;

pub use branch::{Branch, BranchIdx, BranchRecord};
pub use commit::{AnnotatedCommit, Commit, CommitIdx, CommitRecord, ParentRef};
pub use history::{History, HistoryStats};
