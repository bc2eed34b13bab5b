//! Subprocess invocation.
//!
//! Build operations describe what to run as an [`Invocation`] and hand it to
//! a [`CommandRunner`]. The real runner is [`SystemRunner`]; tests swap in a
//! recording fake so no make process is ever started.
//!
//! Commands are executed from an argument vector, never through a shell, and
//! the working directory and environment are set on the child only.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::BuildConfig;
use crate::target::BuildTarget;

/// Program invoked for every target.
pub const MAKE: &str = "make";

/// Environment variable make uses to locate the object tree.
pub const OBJDIR_PREFIX_VAR: &str = "MAKEOBJDIRPREFIX";

/// A fully described subprocess launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
    /// Variables added to the inherited environment of the child.
    pub env: BTreeMap<String, String>,
}

impl Invocation {
    /// Describe `make <target>` for the given configuration.
    pub fn make(target: BuildTarget, config: &BuildConfig) -> Self {
        let mut args = vec![
            target.make_target().to_string(),
            format!("__MAKE_CONF={}", config.make_config_path.display()),
        ];
        if target.needs_kernconf() {
            args.push(format!("KERNCONF={}", config.kernel_config));
        }

        let mut env = BTreeMap::new();
        env.insert(
            OBJDIR_PREFIX_VAR.to_string(),
            config.obj_dir.display().to_string(),
        );

        Self {
            program: MAKE.to_string(),
            args,
            current_dir: config.source_dir.clone(),
            env,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value)?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub status: Option<i32>,
    /// stdout and stderr as the process wrote them, interleaved.
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an [`Invocation`] to completion.
///
/// `Err` means the process could not be started; a process that ran and
/// failed is an `Ok` with a non-zero status.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        (**self).run(invocation)
    }
}

/// Spawns real processes and waits for them, buffering all output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        debug!(
            program = %invocation.program,
            cwd = %invocation.current_dir.display(),
            "spawning process"
        );

        // One pipe for both streams keeps stderr lines next to the stdout
        // lines make printed around them.
        let (mut reader, writer) = io::pipe()?;
        let mut child = {
            let mut command = Command::new(&invocation.program);
            command
                .args(&invocation.args)
                .current_dir(&invocation.current_dir)
                .envs(&invocation.env)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            command.spawn()?
        };

        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let status = child.wait()?;

        Ok(CommandOutput {
            status: status.code(),
            output: String::from_utf8_lossy(&raw).into_owned(),
        })
    }
}
