//! Integration tests for the course content preprocessor

mod hierarchy_ordering;
mod preprocess_pipeline;
pub mod support;
