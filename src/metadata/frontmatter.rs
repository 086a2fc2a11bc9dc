//! YAML front matter splitting and field extraction.

use serde_yaml::{Mapping, Value};

/// Front matter split from a Markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSource<'a> {
    /// Raw YAML between the fences, if the source opens with `---`.
    pub yaml: Option<&'a str>,
    pub body: &'a str,
    /// Number of source lines before `body` starts.
    pub body_line_offset: usize,
}

/// Split a leading `---` fenced block from the body.
///
/// The block closes at the next `---` or `...` line. An unterminated block
/// is treated as no front matter at all.
pub fn split_frontmatter(source: &str) -> SplitSource<'_> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let no_frontmatter = SplitSource {
        yaml: None,
        body: source,
        body_line_offset: 0,
    };

    let mut lines = source.split_inclusive('\n');
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return no_frontmatter,
    }

    let yaml_start = source.find('\n').map(|i| i + 1).unwrap_or(source.len());
    let mut offset = yaml_start;
    let mut line_count = 1;
    for line in lines {
        line_count += 1;
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return SplitSource {
                yaml: Some(&source[yaml_start..offset]),
                body: &source[offset + line.len()..],
                body_line_offset: line_count,
            };
        }
        offset += line.len();
    }
    no_frontmatter
}

/// Parse front matter YAML into a mapping. An empty block is an empty mapping.
pub fn parse_frontmatter(yaml: &str) -> Result<Mapping, String> {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(other) => Err(format!(
            "front matter is not a mapping (found {})",
            value_kind(&other)
        )),
        Err(e) => Err(e.to_string()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Scalar field as a string; numbers and bools are stringified, blanks dropped.
pub fn extract_string(fm: &Mapping, key: &str) -> Option<String> {
    let text = match fm.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// List field; a single scalar is accepted as a one-element list.
pub fn extract_string_list(fm: &Mapping, key: &str) -> Vec<String> {
    match fm.get(key) {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(_) => extract_string(fm, key).into_iter().collect(),
        None => Vec::new(),
    }
}

pub fn extract_bool(fm: &Mapping, key: &str) -> Option<bool> {
    match fm.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Text of the first `# ` heading outside fenced code blocks.
pub fn first_heading(body: &str) -> Option<String> {
    let mut in_fence = false;
    for line in body.lines() {
        let trimmed = line.trim_start();
        if is_fence(trimmed) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("# ") {
            let heading = rest.trim().trim_end_matches('#').trim_end();
            if !heading.is_empty() {
                return Some(heading.to_string());
            }
        }
    }
    None
}

pub(crate) fn is_fence(trimmed_line: &str) -> bool {
    trimmed_line.starts_with("```") || trimmed_line.starts_with("~~~")
}
