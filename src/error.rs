//! Error types for build sessions.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::target::BuildTarget;

/// Numeric failure codes recorded on a [`BuildSession`](crate::BuildSession).
///
/// The discriminants are stable and are what callers polling
/// `last_error()` compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCode {
    /// Source directory was missing when the session was created. Permanent.
    SourceDirMissing = 0,
    BuildWorldFailed = 1,
    InstallWorldFailed = 2,
    BuildKernelFailed = 3,
    InstallKernelFailed = 4,
}

impl ErrorCode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::SourceDirMissing => "source directory missing",
            ErrorCode::BuildWorldFailed => "buildworld failed",
            ErrorCode::InstallWorldFailed => "installworld failed",
            ErrorCode::BuildKernelFailed => "buildkernel failed",
            ErrorCode::InstallKernelFailed => "installkernel failed",
        };
        write!(f, "{} (code {})", name, self.as_u8())
    }
}

/// Errors returned by build operations.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source tree did not exist when the session was constructed.
    #[error("source directory not found: {}", .path.display())]
    SourceDirMissing { path: PathBuf },

    /// make ran but exited unsuccessfully.
    #[error("make {target} failed with exit status {status:?}")]
    TargetFailed {
        target: BuildTarget,
        status: Option<i32>,
        output: String,
    },

    /// make could not be started at all.
    #[error("failed to spawn make {target}: {source}")]
    Spawn {
        target: BuildTarget,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// The session error code this error corresponds to.
    pub fn code(&self) -> ErrorCode {
        match self {
            BuildError::SourceDirMissing { .. } => ErrorCode::SourceDirMissing,
            BuildError::TargetFailed { target, .. } | BuildError::Spawn { target, .. } => {
                target.error_code()
            }
        }
    }

    /// Raw exit status of the failed process, if it ran and exited normally.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            BuildError::TargetFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Captured output of the failed process. Empty when nothing ran.
    pub fn output(&self) -> &str {
        match self {
            BuildError::TargetFailed { output, .. } => output,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::SourceDirMissing.as_u8(), 0);
        assert_eq!(ErrorCode::BuildWorldFailed.as_u8(), 1);
        assert_eq!(ErrorCode::InstallWorldFailed.as_u8(), 2);
        assert_eq!(ErrorCode::BuildKernelFailed.as_u8(), 3);
        assert_eq!(ErrorCode::InstallKernelFailed.as_u8(), 4);
    }

    #[test]
    fn test_target_failed_accessors() {
        let err = BuildError::TargetFailed {
            target: BuildTarget::InstallWorld,
            status: Some(2),
            output: "*** Error code 2\n".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InstallWorldFailed);
        assert_eq!(err.exit_status(), Some(2));
        assert_eq!(err.output(), "*** Error code 2\n");
        assert_eq!(
            err.to_string(),
            "make installworld failed with exit status Some(2)"
        );
    }

    #[test]
    fn test_source_dir_missing_has_code_zero() {
        let err = BuildError::SourceDirMissing {
            path: PathBuf::from("/nonexistent/src"),
        };
        assert_eq!(err.code(), ErrorCode::SourceDirMissing);
        assert_eq!(err.exit_status(), None);
        assert!(err.output().is_empty());
        assert!(err.to_string().contains("/nonexistent/src"));
    }
}
