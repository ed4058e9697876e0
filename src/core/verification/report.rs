//! Verification report structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Results of post-export validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// When the verification was performed
    pub verified_at: DateTime<Utc>,

    /// Total number of files verified
    pub total_verified: usize,

    /// Files that exist and are non-empty
    pub passed: Vec<VerifiedFile>,

    /// Files that are missing, empty or unreadable
    pub failures: Vec<VerificationFailure>,

    /// Duration of verification in milliseconds
    pub duration_ms: u64,
}

/// A file that passed verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub sha256: String,
}

/// Details of a failed verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl VerificationReport {
    /// Create a new verification report
    pub fn new() -> Self {
        Self {
            verified_at: Utc::now(),
            total_verified: 0,
            passed: Vec::new(),
            failures: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Record a successful verification
    pub fn record_pass(&mut self, file: VerifiedFile) {
        self.total_verified += 1;
        self.passed.push(file);
    }

    /// Record a failed verification
    pub fn record_failure(&mut self, failure: VerificationFailure) {
        self.total_verified += 1;
        self.failures.push(failure);
    }

    /// Set the duration of verification
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// Check if all verifications passed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total bytes of all verified files
    pub fn total_bytes(&self) -> u64 {
        self.passed.iter().map(|f| f.size_bytes).sum()
    }

    /// Format the report as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Verification Report\n");
        summary.push_str(&format!("  Verified at: {}\n", self.verified_at));
        summary.push_str(&format!("  Duration: {} ms\n", self.duration_ms));
        summary.push_str(&format!("  Files verified: {}\n", self.total_verified));
        summary.push_str(&format!("  Passed: {}\n", self.passed.len()));
        summary.push_str(&format!("  Failed: {}\n", self.failures.len()));
        summary.push_str(&format!("  Total size: {} bytes\n", self.total_bytes()));

        if !self.failures.is_empty() {
            summary.push_str("\nFailures:\n");
            for failure in &self.failures {
                summary.push_str(&format!(
                    "  - {}: {}\n",
                    failure.path.display(),
                    failure.reason
                ));
            }
        }

        summary
    }
}

impl Default for VerificationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = VerificationReport::new();
        assert!(report.is_success());

        report.record_pass(VerifiedFile {
            path: PathBuf::from("a.fbx"),
            size_bytes: 10,
            sha256: "00".to_string(),
        });
        report.record_pass(VerifiedFile {
            path: PathBuf::from("b.fbx"),
            size_bytes: 5,
            sha256: "11".to_string(),
        });
        assert!(report.is_success());
        assert_eq!(report.total_bytes(), 15);

        report.record_failure(VerificationFailure {
            path: PathBuf::from("c.fbx"),
            reason: "missing".to_string(),
        });
        assert!(!report.is_success());
        assert_eq!(report.total_verified, 3);

        let text = report.format_summary();
        assert!(text.contains("Failed: 1"));
        assert!(text.contains("c.fbx: missing"));
    }
}
