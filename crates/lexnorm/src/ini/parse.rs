use super::Document;

/// Parse INI text. Never fails; lines that do not fit are skipped.
pub fn parse(text: &str) -> Document {
    let mut doc = Document::default();
    let mut current: Option<String> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.starts_with(';') {
            continue;
        }
        let line = strip_comment(line);

        if let Some(name) = section_name(line) {
            current = Some(name.to_string());
        } else if let Some((key, value)) = line.split_once('=')
            && let Some(section) = current.as_deref()
        {
            doc.upsert(section, key.trim().to_string(), value.trim().to_string());
        }
    }

    doc
}

/// Cut the line at the first `;` that follows whitespace. A `;` glued to the
/// text before it is part of the value.
fn strip_comment(line: &str) -> &str {
    let mut prev_ws = false;
    for (idx, ch) in line.char_indices() {
        if ch == ';' && prev_ws {
            return line[..idx].trim_end();
        }
        prev_ws = ch.is_whitespace();
    }
    line
}

fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|name| !name.is_empty())
}
