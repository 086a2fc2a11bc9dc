//! Content Hierarchy
//!
//! Maps the content directory onto a navigable tree. Presentation order comes
//! from filename prefixes (see [`sort_key`]); titles come from index-file
//! metadata or are inferred from names (see [`title`]).

pub mod builder;
pub mod filter;
pub mod node;
pub mod sort_key;
pub mod title;

pub use builder::{
    build_tree, generate_hierarchy, HierarchyBuilder, HierarchyOptions, DEFAULT_INDEX_FILE,
    DEFAULT_ROOT_TITLE,
};
pub use filter::ExcludePatterns;
pub use node::{NodeType, Summary, TreeNode};
pub use sort_key::{sort_key, Category, SortKey};
pub use title::{title_from_dirname, title_from_filename};
