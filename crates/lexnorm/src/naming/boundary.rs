//! Token boundary rules.
//!
//! Boundaries are recorded as a flag per character position: `breaks[i]`
//! means a word starts at character `i`. Rules run in a fixed order and
//! each one only adds flags, so later rules see what earlier ones marked.

fn is_upper_or_digit(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Split the last letter off an uppercase/digit run when a lowercase run
/// follows it, so `AWSAccount` breaks before the second `A`.
pub fn split_acronyms(chars: &[char], breaks: &mut [bool]) {
    let mut i = 0;
    while i < chars.len() {
        if !is_upper_or_digit(chars[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && is_upper_or_digit(chars[i]) {
            i += 1;
        }
        let followed_by_lower = chars.get(i).is_some_and(|c| c.is_ascii_lowercase());
        if i - start >= 2 && followed_by_lower {
            breaks[i - 1] = true;
        }
    }
}

/// Break between a lowercase letter or digit and the capital after it.
pub fn split_capitals(chars: &[char], breaks: &mut [bool]) {
    for i in 1..chars.len() {
        let prev = chars[i - 1];
        if (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && chars[i].is_ascii_uppercase() {
            breaks[i] = true;
        }
    }
}

/// Break between a lowercase letter and the digit after it, when the
/// lowercase run started with a capital (`Last24`, not `md5` or `s3`).
pub fn split_digits(chars: &[char], breaks: &mut [bool]) {
    for i in 1..chars.len() {
        if !(chars[i - 1].is_ascii_lowercase() && chars[i].is_ascii_digit()) {
            continue;
        }
        let mut start = i - 1;
        while start > 0 && chars[start - 1].is_ascii_lowercase() {
            start -= 1;
        }
        if start > 0 && chars[start - 1].is_ascii_uppercase() {
            breaks[i] = true;
        }
    }
}

/// Run all rules and join the pieces with `_`, lowercased.
///
/// Existing underscores are kept, but never doubled up with a boundary or
/// with each other.
pub fn tokenize(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut breaks = vec![false; chars.len()];

    split_acronyms(&chars, &mut breaks);
    split_capitals(&chars, &mut breaks);
    split_digits(&chars, &mut breaks);

    let mut out = String::with_capacity(identifier.len() + 4);
    for (ch, brk) in chars.iter().zip(breaks) {
        if *ch == '_' {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if brk && !out.ends_with('_') {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}
