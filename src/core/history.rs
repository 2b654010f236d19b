use std::collections::HashMap;

use tracing::warn;

use crate::core::branch::{Branch, BranchIdx, BranchRecord};
use crate::core::commit::{AnnotatedCommit, Commit, CommitIdx, CommitRecord};
use crate::error::Diagnostic;

/// Commit ancestry arena with branch references and lookup tables.
///
/// Commits and branches are addressed by integer index; parent and
/// child relations resolve through the arena, so a reference that is
/// absent from the fetched history is an explicit `None` rather than a
/// dangling pointer. Every dropped reference is recorded as a
/// [`Diagnostic`].
#[derive(Debug, Clone)]
pub struct History {
    commits: Vec<Commit>,
    branches: Vec<Branch>,
    /// Quick lookup: commit sha -> arena index
    sha_index: HashMap<String, CommitIdx>,
    /// Quick lookup: tip sha -> branch index (last one in input order wins)
    tip_index: HashMap<String, BranchIdx>,
    diagnostics: Vec<Diagnostic>,
}

impl History {
    /// Build the arena from raw API records and link parent/child edges.
    ///
    /// Construction is O(n) over both inputs. A parent or branch tip
    /// that does not resolve in the commit set is dropped and recorded;
    /// truncated histories (a paginated fetch) are expected input, not
    /// an error.
    pub fn build(commits: Vec<CommitRecord>, branches: Vec<BranchRecord>) -> Self {
        let mut history = Self {
            commits: Vec::with_capacity(commits.len()),
            branches: Vec::with_capacity(branches.len()),
            sha_index: HashMap::with_capacity(commits.len()),
            tip_index: HashMap::with_capacity(branches.len()),
            diagnostics: Vec::new(),
        };

        for record in commits {
            let idx = history.commits.len();
            let commit = Commit::new(record);
            history.sha_index.insert(commit.sha.clone(), idx);
            history.commits.push(commit);
        }

        for record in branches {
            let idx = history.branches.len();
            let tip_idx = history.resolve(&record.tip);
            if tip_idx.is_none() {
                history.push_diagnostic(Diagnostic::MissingBranchTip {
                    branch: record.name.clone(),
                    tip: record.tip.clone(),
                });
            }
            history.tip_index.insert(record.tip.clone(), idx);
            history.branches.push(Branch::new(record, tip_idx));
        }

        history.link_children();
        history
    }

    /// Link every commit into its parents' children lists.
    ///
    /// Children are an ordered set: scanning commits in input order, a
    /// child index is appended to a parent at most once.
    fn link_children(&mut self) {
        for child in 0..self.commits.len() {
            let parents = self.commits[child].parents.clone();
            for parent_sha in parents {
                match self.resolve(&parent_sha) {
                    Some(parent) => {
                        let children = &mut self.commits[parent].children;
                        if !children.contains(&child) {
                            children.push(child);
                        }
                    }
                    None => {
                        let commit = self.commits[child].sha.clone();
                        self.push_diagnostic(Diagnostic::MissingParent {
                            commit,
                            parent: parent_sha,
                        });
                    }
                }
            }
        }
    }

    /// Look up a commit's arena index by sha
    pub fn resolve(&self, sha: &str) -> Option<CommitIdx> {
        self.sha_index.get(sha).copied()
    }

    /// Mainline parent of a commit, if it resolves in the arena
    pub fn first_parent(&self, idx: CommitIdx) -> Option<CommitIdx> {
        self.commits[idx]
            .parents
            .first()
            .and_then(|sha| self.resolve(sha))
    }

    /// The branch whose tip is `sha`, if any
    pub fn branch_at_tip(&self, sha: &str) -> Option<&Branch> {
        self.tip_index.get(sha).map(|&idx| &self.branches[idx])
    }

    pub fn commit(&self, idx: CommitIdx) -> &Commit {
        &self.commits[idx]
    }

    pub(crate) fn commit_mut(&mut self, idx: CommitIdx) -> &mut Commit {
        &mut self.commits[idx]
    }

    pub(crate) fn branch_mut(&mut self, idx: BranchIdx) -> &mut Branch {
        &mut self.branches[idx]
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Degraded-input records accumulated across all passes
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// Get statistics about the arena
    pub fn stats(&self) -> HistoryStats {
        let merge_commits = self.commits.iter().filter(|c| c.is_merge()).count();
        let root_commits = self.commits.iter().filter(|c| c.is_root()).count();
        let tip_commits = self.commits.iter().filter(|c| c.is_tip()).count();
        let dropped_edges = self
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::MissingParent { .. }))
            .count();

        HistoryStats {
            total_commits: self.commits.len(),
            total_branches: self.branches.len(),
            merge_commits,
            root_commits,
            tip_commits,
            dropped_edges,
        }
    }

    /// Convert the arena back into flat records for the rendering layer.
    ///
    /// Children are emitted as shas in discovery order. The branch
    /// label is empty only for commits no branch ref reaches, which
    /// the diagnostics list as unlabeled.
    pub fn to_records(&self) -> Vec<AnnotatedCommit> {
        self.commits
            .iter()
            .map(|commit| AnnotatedCommit {
                sha: commit.sha.clone(),
                parents: commit.parents.iter().cloned().collect(),
                children: commit
                    .children
                    .iter()
                    .map(|&child| self.commits[child].sha.clone())
                    .collect(),
                branch: commit.branch.clone().unwrap_or_default(),
                commands: commit.commands.clone(),
                message: commit.message.clone(),
            })
            .collect()
    }
}

/// Summary statistics for a `History`
#[derive(Debug, Clone)]
pub struct HistoryStats {
    pub total_commits: usize,
    pub total_branches: usize,
    pub merge_commits: usize,
    pub root_commits: usize,
    pub tip_commits: usize,
    pub dropped_edges: usize,
}
