//! `:::kind attr="value"` container blocks embedded in Markdown bodies.

use super::frontmatter::is_fence;
use super::record::{ComponentKind, ComponentRef};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:{3,}\s*([A-Za-z]+)\b\s*(.*)$").unwrap());

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\w+)=["']([^"']+)["']"#).unwrap());

/// Parse `key="value"` / `key='value'` pairs.
pub fn parse_attributes(raw: &str) -> BTreeMap<String, String> {
    ATTRIBUTE
        .captures_iter(raw)
        .map(|cap| (cap[1].to_string(), cap[2].to_string()))
        .collect()
}

/// Collect component openings from `body`.
///
/// `line_offset` is the number of source lines preceding the body, so the
/// reported lines point into the original file. Closing `:::` markers and
/// anything inside fenced code blocks are ignored.
pub fn parse_components(body: &str, line_offset: usize) -> Vec<ComponentRef> {
    let mut components = Vec::new();
    let mut in_fence = false;

    for (idx, line) in body.lines().enumerate() {
        let trimmed = line.trim();
        if is_fence(trimmed) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let Some(cap) = OPENING.captures(trimmed) else {
            continue;
        };
        let Some(kind) = ComponentKind::parse(&cap[1].to_ascii_lowercase()) else {
            continue;
        };
        let mut attrs = parse_attributes(&cap[2]);
        components.push(ComponentRef {
            kind,
            id: attrs.remove("id"),
            title: attrs.remove("title"),
            due: attrs.remove("due"),
            line: line_offset + idx + 1,
        });
    }
    components
}
