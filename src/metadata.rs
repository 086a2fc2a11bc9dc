//! Metadata Extraction
//!
//! Reads YAML front matter and `:::component` blocks from the Markdown files
//! of the content tree. The resulting map feeds both the hierarchy builder
//! (titles, summaries, index detection) and task aggregation.

pub mod components;
pub mod extract;
pub mod frontmatter;
pub mod record;

pub use extract::{extract_all_metadata, extract_file, parse_markdown};
pub use record::{ComponentKind, ComponentRef, MetadataMap, MetadataRecord};
