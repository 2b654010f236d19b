use std::collections::HashSet;

use tracing::debug;

use crate::core::{CommitIdx, History};

/// Give merge-only lineages their own label.
///
/// A two-parent merge absorbed some lineage through its second parent.
/// When no branch ref still points into that lineage, the naming pass
/// leaves its commits labeled like the absorbing branch (or not at
/// all) and a renderer would collapse them into the same lane.
/// Relabeling the segment `<base><sha5>` keeps it visually distinct.
pub fn label_merge_segments(history: &mut History) {
    for merge in 0..history.commits().len() {
        if history.commit(merge).parents.len() != 2 {
            continue;
        }
        let second = history.commit(merge).parents[1].clone();
        match history.resolve(&second) {
            Some(incoming) => relabel_segment(history, merge, incoming),
            // dropped edge, recorded at link time
            None => continue,
        }
    }
}

fn relabel_segment(history: &mut History, merge: CommitIdx, incoming: CommitIdx) {
    if history.commit(incoming).children.len() > 1 {
        // fan-out: the lineage is shared, keep its real label
        return;
    }
    let base = match segment_base(history, merge, incoming) {
        Some(base) => base,
        None => return,
    };
    let label = format!("{}{}", base, short_sha(&history.commit(incoming).sha));

    let mut visited = HashSet::new();
    let mut relabeled = 0;
    let mut current = Some(incoming);

    while let Some(idx) = current {
        if history.commit(idx).children.len() > 1 || !visited.insert(idx) {
            break;
        }
        history.commit_mut(idx).branch = Some(label.clone());
        relabeled += 1;
        current = history.first_parent(idx);
    }

    debug!(label = %label, commits = relabeled, "labeled merge segment");
}

/// Base for the synthesized segment label: the incoming commit's own
/// label when the naming pass reached it, otherwise the merge's.
fn segment_base(history: &History, merge: CommitIdx, incoming: CommitIdx) -> Option<String> {
    history
        .commit(incoming)
        .branch
        .clone()
        .or_else(|| history.commit(merge).branch.clone())
}

/// First five characters of a commit id
fn short_sha(sha: &str) -> &str {
    sha.get(..5).unwrap_or(sha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrib::depth::compute_depths;
    use crate::attrib::namer::name_branches;
    use crate::core::{BranchRecord, CommitRecord, ParentRef};

    fn commit(sha: &str, parents: &[&str]) -> CommitRecord {
        CommitRecord {
            sha: sha.to_string(),
            parents: parents
                .iter()
                .map(|p| ParentRef { sha: p.to_string() })
                .collect(),
            message: String::new(),
        }
    }

    fn branch(name: &str, tip: &str) -> BranchRecord {
        BranchRecord {
            name: name.to_string(),
            tip: tip.to_string(),
        }
    }

    fn label(history: &History, sha: &str) -> Option<String> {
        history
            .commit(history.resolve(sha).unwrap())
            .branch
            .clone()
    }

    fn attributed(commits: Vec<CommitRecord>, branches: Vec<BranchRecord>) -> History {
        let mut history = History::build(commits, branches);
        compute_depths(&mut history);
        name_branches(&mut history, "master").unwrap();
        label_merge_segments(&mut history);
        history
    }

    #[test]
    fn test_absorbed_lineage_gets_anonymous_label() {
        // deadb was merged into master and nothing else points at it
        let history = attributed(
            vec![
                commit("root", &[]),
                commit("p1", &["root"]),
                commit("deadbeef", &["root"]),
                commit("m", &["p1", "deadbeef"]),
            ],
            vec![branch("master", "m")],
        );

        assert_eq!(label(&history, "deadbeef").as_deref(), Some("masterdeadb"));
        // the walk stops at root, which fans out to p1 and deadbeef
        assert_eq!(label(&history, "root").as_deref(), Some("master"));
        assert_eq!(label(&history, "m").as_deref(), Some("master"));
    }

    #[test]
    fn test_segment_propagates_until_fanout() {
        let history = attributed(
            vec![
                commit("root", &[]),
                commit("x", &["root"]),
                commit("aaa01", &["x"]),
                commit("bbb02", &["aaa01"]),
                commit("p1", &["x"]),
                commit("m", &["p1", "bbb02"]),
            ],
            vec![branch("master", "m")],
        );

        // bbb02 and aaa01 are exclusively on the merged-in path; x is a
        // genuine branch point and keeps its trunk label
        assert_eq!(label(&history, "bbb02").as_deref(), Some("masterbbb02"));
        assert_eq!(label(&history, "aaa01").as_deref(), Some("masterbbb02"));
        assert_eq!(label(&history, "x").as_deref(), Some("master"));
    }

    #[test]
    fn test_segment_base_keeps_real_branch_name() {
        // the merged branch still has a live ref at its tip
        let history = attributed(
            vec![
                commit("root", &[]),
                commit("x", &["root"]),
                commit("feat1", &["x"]),
                commit("p1", &["x"]),
                commit("m", &["p1", "feat1"]),
            ],
            vec![branch("master", "m"), branch("feature", "feat1")],
        );

        assert_eq!(label(&history, "feat1").as_deref(), Some("featurefeat1"));
        assert_eq!(label(&history, "x").as_deref(), Some("master"));
    }

    #[test]
    fn test_incoming_fanout_is_not_relabeled() {
        // the second parent has two children, so it is a shared branch
        // point and keeps its label
        let history = attributed(
            vec![
                commit("shared", &[]),
                commit("p1", &["shared"]),
                commit("other", &["shared"]),
                commit("m", &["p1", "shared"]),
            ],
            vec![branch("master", "m")],
        );

        assert_eq!(label(&history, "shared").as_deref(), Some("master"));
    }

    #[test]
    fn test_missing_second_parent_is_skipped() {
        let history = attributed(
            vec![
                commit("root", &[]),
                commit("p1", &["root"]),
                commit("m", &["p1", "truncated"]),
            ],
            vec![branch("master", "m")],
        );

        assert_eq!(label(&history, "m").as_deref(), Some("master"));
        assert!(!history.diagnostics().is_empty());
    }

    #[test]
    fn test_three_parent_commit_is_ignored() {
        let history = attributed(
            vec![
                commit("root", &[]),
                commit("a", &["root"]),
                commit("b", &["root"]),
                commit("c", &["root"]),
                commit("octopus", &["a", "b", "c"]),
            ],
            vec![branch("master", "octopus")],
        );

        // only two-parent merges are modeled; the side parents are
        // neither trunk-painted nor given a segment label
        assert_eq!(label(&history, "a").as_deref(), Some("master"));
        assert_eq!(label(&history, "b"), None);
        assert_eq!(label(&history, "c"), None);
    }
}
