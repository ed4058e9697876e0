// FBX Exporter - Batch export of 3D views to FBX
// Copyright (c) 2025 FBX Exporter Contributors
// Licensed under the MIT License

//! # FBX Exporter
//!
//! A batch-export coordinator for the 3D views of an open building or scene
//! document. It reads a small JSON parameter file, selects the views to
//! export and calls an external "export views to FBX" capability once per
//! view, reporting a single success flag plus a log of what happened.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (selection, sanitization, export, verification)
//! - [`adapters`] - Host seams and their standalone implementations
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Tool configuration and export params
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fbx_exporter::adapters::exporter::CommandExporter;
//! use fbx_exporter::adapters::scene::load_scene_manifest;
//! use fbx_exporter::config::load_config;
//! use fbx_exporter::core::export::{ExportCoordinator, RunSettings};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("fbx-exporter.toml")?;
//!     let document = load_scene_manifest("scene.json")?;
//!     let exporter = CommandExporter::new("fbx-writer", vec!["{output}".into()], "model.rvt");
//!
//!     let settings = RunSettings::from_config(&config.export, ".");
//!     let outcome = ExportCoordinator::new(settings, &exporter).execute_from_params_file(&document);
//!
//!     println!("Exported {} views", outcome.exported.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::Result`], carrying an [`domain::FbxError`]
//! tagged with an [`domain::ErrorKind`]. A run never returns an error; its
//! failure is recorded in the [`core::export::ExportOutcome`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
