//! Host integration surface
//!
//! Trait-based abstraction of the host application so that the coordinator
//! can be driven by a live host session, by the standalone scene adapters, or
//! by test doubles.

pub mod traits;

pub use traits::{Document, FbxExportOptions, SceneExporter, ViewSet};
