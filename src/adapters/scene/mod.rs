//! Standalone scene document adapter
//!
//! Provides a [`crate::adapters::host::Document`] implementation that is
//! loaded from a JSON scene manifest instead of a live host session.

pub mod document;
pub mod manifest;

pub use document::SceneDocument;
pub use manifest::{load_scene_manifest, parse_scene_manifest};
