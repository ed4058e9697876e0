//! External system integrations.
//!
//! - [`host`] - traits describing the host document and export capability
//! - [`scene`] - document loaded from a JSON scene manifest
//! - [`exporter`] - export capability implementations (external command, dry run)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the host application
//! and enable testing with in-memory implementations. The coordinator only
//! ever sees `&dyn Document` and `&dyn SceneExporter`.
//!
//! ```rust,no_run
//! use fbx_exporter::adapters::exporter::CommandExporter;
//! use fbx_exporter::adapters::scene::load_scene_manifest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = load_scene_manifest("tower.scene.json")?;
//! let exporter = CommandExporter::new(
//!     "fbx-writer",
//!     vec!["--view".into(), "{view_id}".into(), "--out".into(), "{output}".into()],
//!     "tower.rvt",
//! );
//! # Ok(())
//! # }
//! ```

pub mod exporter;
pub mod host;
pub mod scene;
