//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ElementId`], [`RunId`])
//! - **Document model** ([`Element`], [`ElementClass`], [`ViewKind`], [`ResolvedView`])
//! - **Error types** ([`FbxError`], [`ErrorKind`], [`HostError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, FbxError>`]:
//!
//! ```rust
//! use fbx_exporter::domain::{ErrorKind, FbxError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(FbxError::empty_selection("No 3D views to be exported"))
//! }
//!
//! assert_eq!(example().unwrap_err().kind(), ErrorKind::EmptySelection);
//! ```

pub mod errors;
pub mod ids;
pub mod result;
pub mod view;

// Re-export commonly used types for convenience
pub use errors::{ErrorKind, FbxError, HostError};
pub use ids::{ElementId, RunId};
pub use result::Result;
pub use view::{Element, ElementClass, ResolvedView, ViewKind};
