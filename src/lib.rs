//! uu-index: Course Content Preprocessor
//!
//! Turns a directory of Markdown course material into the JSON data files a
//! static site renders from: a navigation hierarchy ordered by filename
//! prefixes, per-file metadata from front matter, and a dated task index.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod metadata;
pub mod pipeline;
pub mod tasks;
pub mod tooling;
pub mod tree;
