//! Build session configuration.
//!
//! A flat record of the four settings make needs: where the source tree
//! lives, where objects go, which kernel config to build, and which
//! make.conf to read.
//!
//! # Example
//!
//! ```rust
//! use worldbuild::config::BuildConfig;
//!
//! let config = BuildConfig::default().with_kernel_config("MYKERNEL");
//! assert_eq!(config.source_dir.to_str(), Some("/usr/src"));
//! assert_eq!(config.kernel_config, "MYKERNEL");
//! ```

use std::path::PathBuf;

/// Conventional location of the source tree.
pub const DEFAULT_SOURCE_DIR: &str = "/usr/src";

/// Conventional object directory prefix.
pub const DEFAULT_OBJ_DIR: &str = "/usr/obj";

/// Kernel configuration built when none is given.
pub const DEFAULT_KERNEL_CONFIG: &str = "GENERIC";

/// System make.conf.
pub const DEFAULT_MAKE_CONFIG: &str = "/etc/make.conf";

/// Configuration for a [`BuildSession`](crate::BuildSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Path to the source tree (must contain the top-level Makefile)
    pub source_dir: PathBuf,
    /// Object directory prefix, exported to make as MAKEOBJDIRPREFIX
    pub obj_dir: PathBuf,
    /// Kernel configuration name, passed as KERNCONF
    pub kernel_config: String,
    /// make.conf path, passed as __MAKE_CONF
    pub make_config_path: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            obj_dir: PathBuf::from(DEFAULT_OBJ_DIR),
            kernel_config: DEFAULT_KERNEL_CONFIG.to_string(),
            make_config_path: PathBuf::from(DEFAULT_MAKE_CONFIG),
        }
    }
}

impl BuildConfig {
    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_obj_dir(mut self, obj_dir: impl Into<PathBuf>) -> Self {
        self.obj_dir = obj_dir.into();
        self
    }

    pub fn with_kernel_config(mut self, kernel_config: impl Into<String>) -> Self {
        self.kernel_config = kernel_config.into();
        self
    }

    pub fn with_make_config_path(mut self, make_config_path: impl Into<PathBuf>) -> Self {
        self.make_config_path = make_config_path.into();
        self
    }
}
