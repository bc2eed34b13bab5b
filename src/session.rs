//! Build session: configuration plus the results of the last operation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use worldbuild::{BuildConfig, BuildSession};
//!
//! let mut session = BuildSession::new(BuildConfig::default());
//! match session.build_world() {
//!     Ok(output) => println!("{}", output),
//!     Err(e) => eprintln!("{} (exit {:?})", e, session.last_exit_status()),
//! }
//! ```
//!
//! A session whose source directory was missing at construction is
//! permanently failed: every operation returns code 0 without running make.

use tracing::{debug, info, warn};

use crate::config::BuildConfig;
use crate::error::{BuildError, ErrorCode};
use crate::process::{CommandRunner, Invocation, SystemRunner};
use crate::target::BuildTarget;

/// Runs make targets against one source tree.
#[derive(Debug)]
pub struct BuildSession<R = SystemRunner> {
    config: BuildConfig,
    runner: R,
    last_error: Option<ErrorCode>,
    last_exit_status: Option<i32>,
    last_output: String,
    permanent_error: Option<ErrorCode>,
}

impl BuildSession<SystemRunner> {
    /// Create a session that spawns real make processes.
    pub fn new(config: BuildConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> BuildSession<R> {
    /// Create a session with a custom process runner.
    ///
    /// Never fails. A missing source directory is recorded and reported by
    /// the first (and every later) operation.
    pub fn with_runner(config: BuildConfig, runner: R) -> Self {
        let permanent_error = if config.source_dir.exists() {
            None
        } else {
            warn!(
                source_dir = %config.source_dir.display(),
                "source directory not found; all operations will fail"
            );
            Some(ErrorCode::SourceDirMissing)
        };

        Self {
            config,
            runner,
            last_error: None,
            last_exit_status: None,
            last_output: String::new(),
            permanent_error,
        }
    }

    /// Run `make buildworld`.
    pub fn build_world(&mut self) -> Result<String, BuildError> {
        self.run(BuildTarget::BuildWorld)
    }

    /// Run `make installworld`.
    pub fn install_world(&mut self) -> Result<String, BuildError> {
        self.run(BuildTarget::InstallWorld)
    }

    /// Run `make buildkernel` for the configured KERNCONF.
    pub fn build_kernel(&mut self) -> Result<String, BuildError> {
        self.run(BuildTarget::BuildKernel)
    }

    /// Run `make installkernel` for the configured KERNCONF.
    pub fn install_kernel(&mut self) -> Result<String, BuildError> {
        self.run(BuildTarget::InstallKernel)
    }

    /// Run one make target and record its outcome on the session.
    ///
    /// Returns the captured output on success.
    pub fn run(&mut self, target: BuildTarget) -> Result<String, BuildError> {
        if let Some(code) = self.permanent_error {
            self.last_error = Some(code);
            return Err(BuildError::SourceDirMissing {
                path: self.config.source_dir.clone(),
            });
        }

        self.last_error = None;
        self.last_exit_status = None;

        let invocation = Invocation::make(target, &self.config);
        info!(make_target = %target, "running {}", invocation);

        let result = match self.runner.run(&invocation) {
            Ok(result) => result,
            Err(source) => {
                warn!(make_target = %target, error = %source, "could not start make");
                self.last_output.clear();
                self.last_error = Some(target.error_code());
                return Err(BuildError::Spawn { target, source });
            }
        };

        let success = result.success();
        self.last_output = result.output;
        self.last_exit_status = result.status;

        if !success {
            warn!(make_target = %target, status = ?result.status, "make exited unsuccessfully");
            self.last_error = Some(target.error_code());
            return Err(BuildError::TargetFailed {
                target,
                status: result.status,
                output: self.last_output.clone(),
            });
        }

        debug!(make_target = %target, bytes = self.last_output.len(), "make succeeded");
        Ok(self.last_output.clone())
    }

    /// Code of the most recent failure, unset after a success.
    pub fn last_error(&self) -> Option<ErrorCode> {
        self.last_error
    }

    /// Raw exit status of the most recent make process.
    pub fn last_exit_status(&self) -> Option<i32> {
        self.last_exit_status
    }

    /// Full captured output of the most recent make process.
    pub fn last_output(&self) -> &str {
        &self.last_output
    }

    /// Code recorded at construction if the source tree was missing.
    pub fn permanent_error(&self) -> Option<ErrorCode> {
        self.permanent_error
    }

    /// Whether every operation will fail without running make.
    pub fn is_permanently_failed(&self) -> bool {
        self.permanent_error.is_some()
    }
}
