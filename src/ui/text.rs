/// Wrap text to fit within a given width, breaking on whitespace.
///
/// Widths count characters. A word longer than `width` keeps its own line.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `width` - Maximum width per line
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + word_len + 1 > width {
            lines.push(std::mem::take(&mut current_line));
            current_len = 0;
        }

        if current_len > 0 {
            current_line.push(' ');
            current_len += 1;
        }
        current_line.push_str(word);
        current_len += word_len;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Two-digit chat label used in the "RECENT" panel, e.g. `Chat 02`.
pub fn chat_label(id: u32) -> String {
    format!("Chat {id:02}")
}
