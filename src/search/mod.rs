//! Search orchestration: translation, discovery, fallback matching, and report formatting.

pub(crate) mod engine;
pub(crate) mod presets;
pub(crate) mod report;
