use std::collections::HashSet;

use tracing::debug;

use crate::core::{BranchIdx, CommitIdx, History};
use crate::error::AttributeError;

/// Assign an owning branch label to every commit reachable from a
/// branch ref.
///
/// Labels are last-write-wins, so the pass order is the ownership
/// policy: topic branches run first in [`processing_order`], each
/// painting the full ancestor set of its tip, then the trunk repaints
/// its first-parent chain. Deeper topic branches win shared ancestry;
/// the trunk wins its own mainline.
pub fn name_branches(history: &mut History, trunk: &str) -> Result<(), AttributeError> {
    let trunk_branch = history
        .branches()
        .iter()
        .position(|b| b.name == trunk)
        .ok_or_else(|| AttributeError::MissingTrunkBranch(trunk.to_string()))?;

    for branch in processing_order(history, trunk) {
        let (tip, name) = {
            let b = &history.branches()[branch];
            (b.tip_idx, b.name.clone())
        };
        if let Some(tip) = tip {
            paint_ancestry(history, tip, &name);
        }
    }

    let (tip, name) = {
        let b = &history.branches()[trunk_branch];
        (b.tip_idx, b.name.clone())
    };
    if let Some(tip) = tip {
        paint_first_parents(history, tip, &name);
    }

    Ok(())
}

/// Processing order for topic branches: ascending by depth, ties in
/// input order, the trunk excluded (it always runs last).
///
/// Shallow-to-deep plus last-write-wins means a deeper branch owns the
/// commits it shares with a shallower one. Downstream lane rendering
/// is tuned to this ordering.
pub fn processing_order(history: &History, trunk: &str) -> Vec<BranchIdx> {
    let mut order: Vec<BranchIdx> = (0..history.branches().len())
        .filter(|&b| history.branches()[b].name != trunk)
        .collect();
    order.sort_by_key(|&b| history.branches()[b].depth);
    order
}

/// Topic rule: label every ancestor reachable from `tip`, following
/// all parents through merges.
fn paint_ancestry(history: &mut History, tip: CommitIdx, name: &str) {
    let mut visited = HashSet::new();
    let mut stack = vec![tip];

    while let Some(idx) = stack.pop() {
        if !visited.insert(idx) {
            continue;
        }
        history.commit_mut(idx).branch = Some(name.to_string());

        let parents: Vec<CommitIdx> = history
            .commit(idx)
            .parents
            .iter()
            .filter_map(|sha| history.resolve(sha))
            .collect();
        stack.extend(parents);
    }

    debug!(branch = name, commits = visited.len(), "painted ancestry");
}

/// Trunk rule: label the first-parent chain from `tip` down.
fn paint_first_parents(history: &mut History, tip: CommitIdx, name: &str) {
    let mut visited = HashSet::new();
    let mut current = Some(tip);

    while let Some(idx) = current {
        if !visited.insert(idx) {
            break;
        }
        history.commit_mut(idx).branch = Some(name.to_string());
        current = history.first_parent(idx);
    }

    debug!(branch = name, commits = visited.len(), "painted trunk chain");
}
