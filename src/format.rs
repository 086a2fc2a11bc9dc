//! Format preprocess summaries, hierarchies and task indexes as text.

use crate::pipeline::PreprocessSummary;
use crate::tasks::TaskIndex;
use crate::tree::{NodeType, TreeNode};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Format a preprocess run. `verbose` adds one `Added:` line per section.
pub fn format_preprocess_summary_text(summary: &PreprocessSummary, verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("uu_framework Preprocessing")
    ));
    out.push_str(&format!("  Content: {}\n", summary.content_dir.display()));
    out.push_str(&format!("  Output: {}\n\n", summary.output_dir.display()));

    out.push_str(&format!(
        "[1/3] Extracted metadata for {} markdown files\n",
        summary.metadata_records
    ));
    out.push_str(&format!(
        "[2/3] Built hierarchy with {} top-level sections\n",
        summary.sections.len()
    ));
    if verbose {
        for (name, _) in &summary.sections {
            out.push_str(&format!("      Added: {}\n", name));
        }
    }
    out.push_str(&format!(
        "[3/3] Aggregated {} tasks ({} homework, {} exams, {} projects)\n\n",
        summary.total_tasks(),
        summary.homework,
        summary.exams,
        summary.projects
    ));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Output"]);
    for path in &summary.written {
        table.add_row(vec![path.display().to_string()]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str("Preprocessing complete!\n");
    out
}

/// Indented outline of the hierarchy.
pub fn format_hierarchy_text(root: &TreeNode) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format_section_heading(&root.title)));
    if root.children().is_empty() {
        out.push_str("  (empty)\n");
        return out;
    }
    for child in root.children() {
        push_node(&mut out, child, 1);
    }
    out
}

fn push_node(out: &mut String, node: &TreeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.node_type {
        NodeType::Directory => {
            let marker = if node.has_index == Some(true) { "" } else { " (no index)" };
            out.push_str(&format!(
                "{}{}/  {}{}\n",
                indent,
                node.name.bold(),
                node.title,
                marker.dimmed()
            ));
        }
        NodeType::Code => {
            out.push_str(&format!("{}{}\n", indent, node.name.dimmed()));
        }
        NodeType::File | NodeType::Root => {
            out.push_str(&format!("{}{}  {}\n", indent, node.name, node.title));
        }
    }
    for child in node.children() {
        push_node(out, child, depth + 1);
    }
}

/// Task index as one table per category.
pub fn format_tasks_text(index: &TaskIndex) -> String {
    let mut out = String::new();
    for (category, tasks) in index.lists() {
        out.push_str(&format!("{}\n\n", format_section_heading(category)));
        if tasks.is_empty() {
            out.push_str("No tasks.\n\n");
            continue;
        }
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Due", "Id", "Title", "Path"]);
        for task in tasks {
            table.add_row(vec![
                task.due.clone().unwrap_or_else(|| "-".to_string()),
                task.id.clone(),
                task.title.clone(),
                task.path.clone(),
            ]);
        }
        out.push_str(&format!("{}\n\n", table));
    }
    out.push_str(&format!("Total: {} tasks.\n", index.total()));
    out
}
