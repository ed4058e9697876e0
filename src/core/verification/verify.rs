//! Post-export verification
//!
//! The export capability reports success per call, but nothing guarantees a
//! file actually landed on disk. This pass checks every reported file.

use crate::core::export::outcome::ExportedFile;
use crate::core::verification::checksum::calculate_file_checksum;
use crate::core::verification::report::{VerificationFailure, VerificationReport, VerifiedFile};
use std::time::Instant;

/// Verify that exported files exist and are non-empty
///
/// A file reported more than once (sanitized name collision) is checked
/// once per report, matching what is on disk after the last write.
pub fn verify_exports(files: &[ExportedFile]) -> VerificationReport {
    let start = Instant::now();
    let mut report = VerificationReport::new();

    tracing::info!(files = files.len(), "Starting post-export verification");

    for file in files {
        match calculate_file_checksum(&file.path) {
            Ok((_, 0)) => {
                tracing::warn!(path = %file.path.display(), "Exported file is empty");
                report.record_failure(VerificationFailure {
                    path: file.path.clone(),
                    reason: "file is empty".to_string(),
                });
            }
            Ok((sha256, size_bytes)) => {
                tracing::debug!(
                    path = %file.path.display(),
                    size_bytes,
                    sha256 = %sha256,
                    "Verified exported file"
                );
                report.record_pass(VerifiedFile {
                    path: file.path.clone(),
                    size_bytes,
                    sha256,
                });
            }
            Err(e) => {
                tracing::warn!(
                    path = %file.path.display(),
                    error = %e,
                    "Exported file could not be read"
                );
                report.record_failure(VerificationFailure {
                    path: file.path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report.set_duration(start.elapsed().as_millis() as u64);

    tracing::info!(
        passed = report.passed.len(),
        failed = report.failures.len(),
        total_bytes = report.total_bytes(),
        "Verification completed"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::ElementId;
    use crate::domain::view::ResolvedView;
    use tempfile::TempDir;

    fn exported(dir: &TempDir, name: &str) -> ExportedFile {
        ExportedFile {
            view: ResolvedView::new(ElementId::new("1").unwrap(), name),
            file_name: format!("{name}.fbx"),
            path: dir.path().join(format!("{name}.fbx")),
        }
    }

    #[test]
    fn test_verify_exports() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("good.fbx"), b"FBX").unwrap();
        std::fs::write(dir.path().join("empty.fbx"), b"").unwrap();

        let files = vec![
            exported(&dir, "good"),
            exported(&dir, "empty"),
            exported(&dir, "missing"),
        ];
        let report = verify_exports(&files);

        assert_eq!(report.total_verified, 3);
        assert_eq!(report.passed.len(), 1);
        assert_eq!(report.passed[0].size_bytes, 3);
        assert_eq!(report.failures.len(), 2);
        assert!(!report.is_success());
    }

    #[test]
    fn test_verify_nothing() {
        let report = verify_exports(&[]);
        assert!(report.is_success());
        assert_eq!(report.total_verified, 0);
    }
}
