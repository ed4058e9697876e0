//! Core business logic for the FBX exporter.
//!
//! # Modules
//!
//! - [`automation`] - Readiness entry point used by batch hosts
//! - [`export`] - Export coordination and run outcome
//! - [`sanitize`] - View name to file name conversion
//! - [`select`] - View selection from export parameters
//! - [`verification`] - Post-export file checks with checksums
//!
//! # Export Workflow
//!
//! 1. **Load Params**: Read `params.json` from the working directory
//! 2. **Select**: Resolve the requested 3D views
//! 3. **Prepare**: Create the output directory
//! 4. **Export**: Call the export capability once per view
//! 5. **Verify** (optional): Check every written file
//!
//! # Example
//!
//! ```rust,no_run
//! use fbx_exporter::adapters::exporter::DryRunExporter;
//! use fbx_exporter::adapters::scene::load_scene_manifest;
//! use fbx_exporter::core::export::{ExportCoordinator, RunSettings};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document = load_scene_manifest("scene.json")?;
//! let exporter = DryRunExporter::new();
//!
//! let coordinator = ExportCoordinator::new(RunSettings::new("."), &exporter);
//! let outcome = coordinator.execute_from_params_file(&document);
//!
//! println!("Exported: {}", outcome.exported.len());
//! # Ok(())
//! # }
//! ```

pub mod automation;
pub mod export;
pub mod sanitize;
pub mod select;
pub mod verification;
