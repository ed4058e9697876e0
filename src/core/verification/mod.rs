//! Data verification for post-export validation
//!
//! Confirms that every file the export capability reported actually exists
//! and is non-empty, and records its SHA-256 digest.

pub mod checksum;
pub mod report;
pub mod verify;

pub use report::{VerificationFailure, VerificationReport, VerifiedFile};
pub use verify::verify_exports;
