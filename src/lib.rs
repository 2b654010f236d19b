pub mod attrib;
pub mod core;
pub mod decor;
pub mod error;

pub use attrib::Attributor;
pub use core::{
    AnnotatedCommit, Branch, BranchRecord, Commit, CommitRecord, History, HistoryStats, ParentRef,
};
pub use error::{AttributeError, Diagnostic};
