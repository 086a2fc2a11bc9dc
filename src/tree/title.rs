//! Human-readable titles inferred from raw file and directory names.

/// Title for a directory with no index metadata.
///
/// Strips the numeric prefix, then a one-letter sub-index or appendix marker
/// (`a_`, `A_`).
pub fn title_from_dirname(name: &str) -> String {
    let rest = strip_numeric_prefix(name);
    let rest = strip_letter_marker(rest, |c| c.is_ascii_alphabetic());
    humanize(rest).unwrap_or_else(|| name.to_string())
}

/// Title for a file stem (extension already removed).
///
/// Only a lowercase sub-index marker is stripped after the numeric prefix.
pub fn title_from_filename(stem: &str) -> String {
    let rest = strip_numeric_prefix(stem);
    let rest = strip_letter_marker(rest, |c| c.is_ascii_lowercase());
    humanize(rest).unwrap_or_else(|| stem.to_string())
}

/// Drop leading digits and one optional `_` or `-` after them.
fn strip_numeric_prefix(name: &str) -> &str {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return name;
    }
    let rest = &name[digits..];
    rest.strip_prefix(['_', '-']).unwrap_or(rest)
}

fn strip_letter_marker(name: &str, accept: impl Fn(u8) -> bool) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= 2 && accept(bytes[0]) && bytes[1] == b'_' {
        &name[2..]
    } else {
        name
    }
}

/// Separators to spaces, then capitalize each word. `None` when nothing is left.
fn humanize(raw: &str) -> Option<String> {
    let spaced = raw.replace(['_', '-'], " ");
    let words: Vec<String> = spaced.split_whitespace().map(capitalize).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
