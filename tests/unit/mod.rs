//! Library-level tests that span several modules.

mod link_pipeline;
mod project_model;
mod templates;
