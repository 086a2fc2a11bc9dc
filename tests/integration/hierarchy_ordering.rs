use uu_index::metadata::extract_all_metadata;
use uu_index::tree::{generate_hierarchy, ExcludePatterns, NodeType, Summary};
use tempfile::TempDir;

use crate::integration::support::{course_fixture, write};

#[test]
fn top_level_sections_follow_prefix_order() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("clase");
    course_fixture(&root);

    let exclude = ExcludePatterns::default();
    let metadata = extract_all_metadata(&root, &exclude).unwrap();
    let tree = generate_hierarchy(&root, &metadata, &exclude).unwrap();

    assert_eq!(tree.node_type, NodeType::Root);
    assert_eq!(tree.title, "Contenido");
    assert_eq!(tree.name, "clase");
    let names: Vec<&str> = tree.children().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["01_intro", "02_data_structures", "10_graphs", "A_appendix"]
    );
}

#[test]
fn directory_titles_come_from_index_or_name() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("clase");
    course_fixture(&root);

    let exclude = ExcludePatterns::default();
    let metadata = extract_all_metadata(&root, &exclude).unwrap();
    let tree = generate_hierarchy(&root, &metadata, &exclude).unwrap();

    let intro = tree.find("01_intro").unwrap();
    assert_eq!(intro.title, "Introducción");
    assert_eq!(intro.has_index, Some(true));

    let graphs = tree.find("10_graphs").unwrap();
    assert_eq!(graphs.title, "Grafos");

    let data = tree.find("02_data_structures").unwrap();
    assert_eq!(data.title, "Data Structures");
    assert_eq!(data.has_index, Some(false));

    let appendix = tree.find("A_appendix").unwrap();
    assert_eq!(appendix.title, "Appendix");
}

#[test]
fn files_and_code_within_a_section() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("clase");
    course_fixture(&root);

    let exclude = ExcludePatterns::default();
    let metadata = extract_all_metadata(&root, &exclude).unwrap();
    let tree = generate_hierarchy(&root, &metadata, &exclude).unwrap();

    let intro = tree.find("01_intro").unwrap();
    let names: Vec<&str> = intro.children().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["01_a_setup.md", "02_b_first_steps.md", "code"]);

    let setup = tree.find("01_intro/01_a_setup.md").unwrap();
    assert_eq!(setup.node_type, NodeType::File);
    assert_eq!(setup.title, "Setup");
    assert_eq!(
        setup.summary,
        Summary::Present(Some("Instalar herramientas".to_string()))
    );

    let first_steps = tree.find("01_intro/02_b_first_steps.md").unwrap();
    assert_eq!(first_steps.title, "First Steps");
    assert_eq!(first_steps.summary, Summary::Present(None));

    let code = tree.find("01_intro/code/hello.py").unwrap();
    assert_eq!(code.node_type, NodeType::Code);
    assert_eq!(code.title, "hello.py");
    assert!(code.summary.is_absent());
    assert!(code.children.is_none());
}

#[test]
fn hidden_entries_and_root_files_are_not_listed() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("clase");
    course_fixture(&root);

    let exclude = ExcludePatterns::default();
    let metadata = extract_all_metadata(&root, &exclude).unwrap();
    let tree = generate_hierarchy(&root, &metadata, &exclude).unwrap();

    assert!(tree.find(".drafts").is_none());
    assert!(tree.find("README.md").is_none());
    assert!(!metadata.contains_key(".drafts/01_secret.md"));
    assert!(metadata.contains_key("README.md"));
}

#[test]
fn numeric_prefixes_compare_as_numbers() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("clase");
    for name in ["100_last", "9_first", "10_middle"] {
        write(&root, &format!("{}/01_page.md", name), "# Page\n");
    }

    let exclude = ExcludePatterns::default();
    let tree = generate_hierarchy(&root, &Default::default(), &exclude).unwrap();
    let names: Vec<&str> = tree.children().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["9_first", "10_middle", "100_last"]);
}

#[test]
fn missing_content_root_gives_empty_root() {
    let temp = TempDir::new().unwrap();
    let exclude = ExcludePatterns::default();
    let tree =
        generate_hierarchy(&temp.path().join("nope"), &Default::default(), &exclude).unwrap();
    assert!(tree.children().is_empty());
    assert_eq!(tree.order, None);
    assert_eq!(tree.has_index, None);
}
