use std::fs;

use uu_index::config::{ConfigLoader, SiteConfig};
use uu_index::metadata::extract_all_metadata;
use uu_index::pipeline::{Preprocessor, HIERARCHY_FILE, METADATA_FILE, SITE_FILE, TASKS_FILE};
use uu_index::tasks::TaskIndex;
use uu_index::tree::{generate_hierarchy, ExcludePatterns, TreeNode};
use tempfile::TempDir;

use crate::integration::support::course_fixture;

#[test]
fn run_writes_all_outputs() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("clase");
    course_fixture(&content);
    let output = temp.path().join("_data");

    let mut config = SiteConfig::default();
    config
        .site
        .insert("title".to_string(), serde_json::json!("Estructuras de Datos"));

    let summary = Preprocessor::new(&config).run(&content, &output).unwrap();

    for file in [METADATA_FILE, HIERARCHY_FILE, TASKS_FILE, SITE_FILE] {
        assert!(output.join(file).is_file(), "missing {file}");
    }
    assert_eq!(summary.sections.len(), 4);
    assert_eq!(summary.sections[0], ("01_intro".to_string(), "Introducción".to_string()));
    assert_eq!(summary.homework, 1);
    assert_eq!(summary.total_tasks(), 1);

    let site: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.join(SITE_FILE)).unwrap()).unwrap();
    assert_eq!(site["title"], "Estructuras de Datos");
}

#[test]
fn hierarchy_json_reads_back() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("clase");
    course_fixture(&content);
    let output = temp.path().join("_data");

    let config = SiteConfig::default();
    Preprocessor::new(&config).run(&content, &output).unwrap();

    let text = fs::read_to_string(output.join(HIERARCHY_FILE)).unwrap();
    let tree: TreeNode = serde_json::from_str(&text).unwrap();
    assert_eq!(tree.children().len(), 4);

    let exclude = ExcludePatterns::default();
    let metadata = extract_all_metadata(&content, &exclude).unwrap();
    let built = generate_hierarchy(&content, &metadata, &exclude).unwrap();
    assert_eq!(tree, built);

    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(raw.get("order").is_none());
    let intro = &raw["children"][0];
    assert_eq!(intro["type"], "directory");
    assert_eq!(intro["order"], serde_json::json!([0, 1, 0, ""]));
    let first_steps = &intro["children"][1];
    assert!(first_steps.get("summary").unwrap().is_null());
    let code_dir = &intro["children"][2];
    assert_eq!(code_dir["order"], serde_json::json!([3, 0, 0, ""]));
}

#[test]
fn tasks_json_lists_homework() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("clase");
    course_fixture(&content);
    let output = temp.path().join("_data");

    let config = SiteConfig::default();
    Preprocessor::new(&config).run(&content, &output).unwrap();

    let text = fs::read_to_string(output.join(TASKS_FILE)).unwrap();
    let tasks: TaskIndex = serde_json::from_str(&text).unwrap();
    assert_eq!(tasks.homework.len(), 1);
    assert_eq!(tasks.homework[0].path, "10_graphs/01_tarea_bfs.md");
    assert_eq!(tasks.homework[0].due.as_deref(), Some("2026-03-15"));
    assert!(tasks.exams.is_empty());
}

#[test]
fn rerun_produces_identical_outputs() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("clase");
    course_fixture(&content);
    let config = SiteConfig::default();

    let first = temp.path().join("first");
    let second = temp.path().join("second");
    Preprocessor::new(&config).run(&content, &first).unwrap();
    Preprocessor::new(&config).run(&content, &second).unwrap();

    for file in [METADATA_FILE, HIERARCHY_FILE, TASKS_FILE] {
        assert_eq!(
            fs::read_to_string(first.join(file)).unwrap(),
            fs::read_to_string(second.join(file)).unwrap()
        );
    }
}

#[test]
fn site_json_keeps_template_key_case() {
    let temp = TempDir::new().unwrap();
    let content = temp.path().join("clase");
    course_fixture(&content);
    let config_path = temp.path().join("site.yaml");
    fs::write(&config_path, "site:\n  siteName: Curso IA\n  baseURL: /ia\n").unwrap();
    let output = temp.path().join("_data");

    let config = ConfigLoader::load(&config_path).unwrap();
    Preprocessor::new(&config).run(&content, &output).unwrap();

    let site: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.join(SITE_FILE)).unwrap()).unwrap();
    assert_eq!(
        site,
        serde_json::json!({ "siteName": "Curso IA", "baseURL": "/ia" })
    );
}
