use crate::core::History;

/// Re-wrap every commit message for a narrow display column.
pub fn wrap_messages(history: &mut History) {
    for idx in 0..history.commits().len() {
        let wrapped = wrap_message(&history.commit(idx).message);
        history.commit_mut(idx).message = wrapped;
    }
}

/// Break a message into lines after the words at index 0, 5, 10, ...
///
/// "a b c d e f g h i j k l" becomes the lines
/// "a" / "b c d e f" / "g h i j k" / "l".
pub fn wrap_message(message: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line: Vec<&str> = Vec::new();

    for (i, word) in message.split(' ').enumerate() {
        line.push(word);
        if i % 5 == 0 {
            lines.push(line.join(" "));
            line.clear();
        }
    }
    if !line.is_empty() {
        lines.push(line.join(" "));
    }

    lines.join("\n")
}
