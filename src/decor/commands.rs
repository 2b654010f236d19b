use crate::core::History;

/// Reference commands that apply at any commit
const UNIVERSAL_COMMANDS: &str = "Possible git commands:
      git checkout [branch name]
      options:
      -b: create and check out new branch
      git branch [branch name]
      options:
      -d: delete branch
      -D: delete branch, suppress warnings
      git tag [tag name]";

/// Extra commands that only make sense at a tip (no children yet)
const TIP_COMMANDS: [&str; 4] = [
    "git reset HEAD(~[n]), [n] = number of commits to reset
         options:
         --hard: obliterate last n commits (can't be undone)
         --soft: remove last n commits but leave working
                 directory unchanged",
    "git merge",
    "git rebase",
    "git pull",
];

/// Attach the reference-command text to every commit. Childless tips
/// additionally get the history-rewriting blocks.
pub fn attach_command_hints(history: &mut History) {
    for idx in 0..history.commits().len() {
        let mut text = String::from(UNIVERSAL_COMMANDS);
        if history.commit(idx).is_tip() {
            for command in TIP_COMMANDS {
                text.push_str("\n ");
                text.push_str(command);
            }
        }
        history.commit_mut(idx).commands = text;
    }
}
