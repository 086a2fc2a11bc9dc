use std::fs;
use std::path::Path;

use tempfile::TempDir;
use uu_index::config::SiteConfig;
use uu_index::tooling::cli::{CliContext, Commands};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fixture(temp: &TempDir) -> std::path::PathBuf {
    let content = temp.path().join("clase");
    write(&content, "01_intro/00_index.md", "---\ntitle: Introducción\n---\n");
    write(&content, "01_intro/01_basics.md", "# Básicos\n");
    write(
        &content,
        "02_trees/01_lesson.md",
        "# Árboles\n\n:::exam{id=\"parcial-1\" due=\"2026-04-20\"}\nParcial\n:::\n",
    );
    content
}

#[test]
fn hierarchy_json_contract_has_root_fields() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let cli = CliContext::with_config(content, SiteConfig::default(), false);

    let output = cli
        .execute(&Commands::Hierarchy {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["type"], "root");
    assert_eq!(parsed["title"], "Contenido");
    assert_eq!(parsed["children"][0]["title"], "Introducción");
    assert_eq!(parsed["children"][1]["name"], "02_trees");
}

#[test]
fn hierarchy_text_outlines_sections() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let cli = CliContext::with_config(content, SiteConfig::default(), false);

    let output = cli
        .execute(&Commands::Hierarchy {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("01_intro"));
    assert!(output.contains("01_basics.md"));
    assert!(output.contains("Trees"));
}

#[test]
fn metadata_json_is_keyed_by_relative_path() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let cli = CliContext::with_config(content, SiteConfig::default(), false);

    let output = cli.execute(&Commands::Metadata).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["01_intro/01_basics.md"]["title"], "Básicos");
    assert!(parsed.get("02_trees/01_lesson.md").is_some());
}

#[test]
fn tasks_json_contract_groups_by_kind() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let cli = CliContext::with_config(content, SiteConfig::default(), false);

    let output = cli
        .execute(&Commands::Tasks {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(parsed["homework"].as_array().unwrap().is_empty());
    assert_eq!(parsed["exams"][0]["id"], "parcial-1");
    assert_eq!(parsed["exams"][0]["due"], "2026-04-20");
    assert!(parsed["projects"].as_array().unwrap().is_empty());
}

#[test]
fn preprocess_summary_and_verbose_sections() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let output_dir = temp.path().join("_data");

    let quiet = CliContext::with_config(content.clone(), SiteConfig::default(), false)
        .execute(&Commands::Preprocess {
            output: output_dir.clone(),
        })
        .unwrap();
    assert!(quiet.contains("Built hierarchy with 2 top-level sections"));
    assert!(quiet.contains("Preprocessing complete!"));
    assert!(!quiet.contains("Added: 01_intro"));

    let verbose = CliContext::with_config(content, SiteConfig::default(), true)
        .execute(&Commands::Preprocess {
            output: output_dir.clone(),
        })
        .unwrap();
    assert!(verbose.contains("Added: 01_intro"));
    assert!(verbose.contains("Added: 02_trees"));
    assert!(output_dir.join("hierarchy.json").is_file());
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let cli = CliContext::new(content, &temp.path().join("absent.yaml"), false).unwrap();
    assert_eq!(cli.config().source.root_title, "Contenido");
    assert!(cli.config_file().is_none());
}

#[test]
fn loaded_config_file_is_recorded() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let config_path = temp.path().join("site.yaml");
    fs::write(&config_path, "source:\n  root_title: Curso\n").unwrap();

    let cli = CliContext::new(content, &config_path, false).unwrap();
    assert_eq!(cli.config_file(), Some(config_path.as_path()));
    assert_eq!(cli.config().source.root_title, "Curso");
}

#[test]
fn config_file_drives_exclusion() {
    let temp = TempDir::new().unwrap();
    let content = fixture(&temp);
    let config_path = temp.path().join("site.yaml");
    fs::write(
        &config_path,
        "site:\n  title: Curso\nsource:\n  exclude:\n    - trees\n",
    )
    .unwrap();

    let cli = CliContext::new(content, &config_path, false).unwrap();
    let output = cli
        .execute(&Commands::Hierarchy {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["children"].as_array().unwrap().len(), 1);
}
