use std::collections::HashSet;

use tracing::debug;

use crate::core::{CommitIdx, History};

/// Compute the first-parent chain depth of every branch tip.
///
/// Depth is purely a sort key for the naming pass. A branch whose tip
/// is not in the fetched history has depth 0.
pub fn compute_depths(history: &mut History) {
    for branch in 0..history.branches().len() {
        let depth = match history.branches()[branch].tip_idx {
            Some(tip) => first_parent_depth(history, tip),
            None => 0,
        };
        history.branch_mut(branch).depth = depth;
    }
    debug!(branches = history.branches().len(), "computed branch depths");
}

/// Number of commits on the first-parent chain starting at `tip`,
/// inclusive, ending where the chain leaves the fetched history.
pub fn first_parent_depth(history: &History, tip: CommitIdx) -> usize {
    let mut visited = HashSet::new();
    let mut current = Some(tip);
    let mut depth = 0;

    while let Some(idx) = current {
        if !visited.insert(idx) {
            // revisit: the chain loops back, stop counting
            break;
        }
        depth += 1;
        current = history.first_parent(idx);
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn test_depth_counts_first_parent_chain() {
        let history = History::build(
            vec![
                commit("root", &[]),
                commit("p1", &["root"]),
                commit("tip", &["p1"]),
            ],
            vec![],
        );

        let tip = history.resolve("tip").unwrap();
        assert_eq!(first_parent_depth(&history, tip), 3);
    }

    #[test]
    fn test_depth_follows_only_mainline_parent() {
        let history = History::build(
            vec![
                commit("root", &[]),
                commit("side", &["root"]),
                commit("p1", &["root"]),
                commit("merge", &["p1", "side"]),
            ],
            vec![],
        );

        let tip = history.resolve("merge").unwrap();
        assert_eq!(first_parent_depth(&history, tip), 3); // merge, p1, root
    }

    #[test]
    fn test_depth_stops_at_missing_parent() {
        let history = History::build(
            vec![commit("p1", &["truncated"]), commit("tip", &["p1"])],
            vec![],
        );

        let tip = history.resolve("tip").unwrap();
        assert_eq!(first_parent_depth(&history, tip), 2);
    }

    #[test]
    fn test_depth_terminates_on_cycle() {
        let history = History::build(
            vec![commit("a", &["b"]), commit("b", &["a"])],
            vec![],
        );

        let tip = history.resolve("a").unwrap();
        assert_eq!(first_parent_depth(&history, tip), 2);
    }

    #[test]
    fn test_compute_depths_fills_branches() {
        let mut history = History::build(
            vec![commit("root", &[]), commit("tip", &["root"])],
            vec![branch("feature", "tip"), branch("gone", "zzz")],
        );

        compute_depths(&mut history);

        assert_eq!(history.branches()[0].depth, 2);
        assert_eq!(history.branches()[1].depth, 0);
    }
}
