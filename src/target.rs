//! The four make targets a session can run.

use std::fmt;

use crate::error::ErrorCode;

/// A top-level target of the source tree's Makefile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
    BuildWorld,
    InstallWorld,
    BuildKernel,
    InstallKernel,
}

impl BuildTarget {
    pub const ALL: [BuildTarget; 4] = [
        BuildTarget::BuildWorld,
        BuildTarget::InstallWorld,
        BuildTarget::BuildKernel,
        BuildTarget::InstallKernel,
    ];

    /// Target name passed to make.
    pub fn make_target(self) -> &'static str {
        match self {
            BuildTarget::BuildWorld => "buildworld",
            BuildTarget::InstallWorld => "installworld",
            BuildTarget::BuildKernel => "buildkernel",
            BuildTarget::InstallKernel => "installkernel",
        }
    }

    /// Code recorded on the session when this target fails.
    pub fn error_code(self) -> ErrorCode {
        match self {
            BuildTarget::BuildWorld => ErrorCode::BuildWorldFailed,
            BuildTarget::InstallWorld => ErrorCode::InstallWorldFailed,
            BuildTarget::BuildKernel => ErrorCode::BuildKernelFailed,
            BuildTarget::InstallKernel => ErrorCode::InstallKernelFailed,
        }
    }

    /// Whether make needs `KERNCONF=` for this target.
    pub fn needs_kernconf(self) -> bool {
        matches!(self, BuildTarget::BuildKernel | BuildTarget::InstallKernel)
    }

    /// Human-readable label for progress messages.
    pub fn label(self) -> &'static str {
        match self {
            BuildTarget::BuildWorld => "Build world",
            BuildTarget::InstallWorld => "Install world",
            BuildTarget::BuildKernel => "Build kernel",
            BuildTarget::InstallKernel => "Install kernel",
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.make_target())
    }
}
