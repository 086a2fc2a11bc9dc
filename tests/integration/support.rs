use std::fs;
use std::path::Path;

/// Create `rel` under `root` with `contents`, making parent directories.
pub fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// A small course with numbered units, an appendix, code and a task.
pub fn course_fixture(root: &Path) {
    write(root, "README.md", "# Root readme\n");
    write(
        root,
        "01_intro/00_index.md",
        "---\ntitle: Introducción\n---\n\nBienvenida.\n",
    );
    write(
        root,
        "01_intro/01_a_setup.md",
        "---\nsummary: Instalar herramientas\n---\n# Setup\n",
    );
    write(root, "01_intro/02_b_first_steps.md", "Sin encabezado.\n");
    write(root, "01_intro/code/hello.py", "print('hola')\n");
    write(root, "01_intro/notes.txt", "ignored\n");
    write(root, "10_graphs/00_index.md", "# Grafos\n");
    write(
        root,
        "10_graphs/01_tarea_bfs.md",
        "---\ntype: homework\ndue: 2026-03-15\n---\n# Tarea BFS\n",
    );
    write(root, "02_data_structures/01_lists.md", "# Listas\n");
    write(root, "A_appendix/01_tools.md", "# Herramientas\n");
    write(root, ".drafts/01_secret.md", "# Secret\n");
}
