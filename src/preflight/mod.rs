//! Preflight checks for source builds.
//!
//! Validates prerequisites BEFORE handing control to make, which can run for
//! hours before tripping over a missing tool or an exhausted disk.
//!
//! # Checks Performed
//!
//! - **Host tools**: make is installed
//! - **Source tree**: source directory exists and has a top-level Makefile
//! - **make.conf**: the configured make.conf exists (warning only)
//! - **Object directory**: obj dir exists or can be created
//! - **Disk space**: enough room under the object directory
//!
//! # Usage
//!
//! ```rust,ignore
//! use worldbuild::preflight::PreflightChecker;
//!
//! let checker = PreflightChecker::new(config);
//! let report = checker.run_all();
//!
//! if !report.is_ok() {
//!     for error in report.errors() {
//!         eprintln!("  - {}", error.message);
//!     }
//!     std::process::exit(1);
//! }
//! ```

mod disk_space;
mod host_tools;
mod source_tree;

pub use disk_space::{available_space, check_disk_space};
pub use host_tools::{check_host_tools, has_tool};
pub use source_tree::{check_make_conf, check_obj_dir, check_source_tree};

use crate::config::BuildConfig;

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Human-readable message
    pub message: String,
    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create a failing check result.
    pub fn fail(
        name: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// Create a warning check result (passes but with a note).
    pub fn warn(
        name: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Comprehensive preflight report.
#[derive(Debug, Default)]
pub struct PreflightReport {
    /// All check results
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Check if all preflight checks passed.
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Get all failing checks.
    pub fn errors(&self) -> Vec<&CheckResult> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    /// Get count of passing checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get total check count.
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Print a summary of the preflight checks.
    pub fn print_summary(&self) {
        println!("=== Preflight Check Results ===\n");

        for check in &self.checks {
            let status = match (check.passed, &check.suggestion) {
                (false, _) => "[FAIL]",
                (true, Some(_)) => "[WARN]",
                (true, None) => "[OK]",
            };
            println!("{} {}: {}", status, check.name, check.message);
            if let Some(suggestion) = &check.suggestion {
                println!("     Suggestion: {}", suggestion);
            }
        }

        println!();
        if self.is_ok() {
            println!("All preflight checks passed ({}/{})", self.passed_count(), self.total_count());
        } else {
            println!(
                "Preflight checks failed: {} of {} passed",
                self.passed_count(),
                self.total_count()
            );
        }
    }
}

/// Preflight checker for a build configuration.
pub struct PreflightChecker {
    config: BuildConfig,
}

impl PreflightChecker {
    /// Create a new preflight checker.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Run all preflight checks and return a comprehensive report.
    pub fn run_all(&self) -> PreflightReport {
        let mut report = PreflightReport::default();

        report.checks.extend(check_host_tools());
        report.checks.push(check_source_tree(&self.config.source_dir));
        report.checks.push(check_make_conf(&self.config.make_config_path));
        report.checks.push(check_obj_dir(&self.config.obj_dir));
        report.checks.push(check_disk_space(&self.config.obj_dir));

        report
    }
}
