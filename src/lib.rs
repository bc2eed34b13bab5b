//! Front-end for source-tree builds driven by make.
//!
//! A [`BuildSession`] holds a flat [`BuildConfig`] and runs the four
//! top-level targets of a source tree (`buildworld`, `installworld`,
//! `buildkernel`, `installkernel`) as blocking subprocesses. The outcome of
//! the most recent target is kept on the session for later inspection and is
//! also returned as a [`Result`].
//!
//! # Example
//!
//! ```rust,no_run
//! use worldbuild::{BuildConfig, BuildSession};
//!
//! let config = BuildConfig::default().with_kernel_config("MYKERNEL");
//! let mut session = BuildSession::new(config);
//!
//! if let Err(e) = session.build_kernel() {
//!     eprintln!("{}: {}", e.code(), e);
//!     eprintln!("{}", session.last_output());
//! }
//! ```

pub mod config;
pub mod error;
pub mod preflight;
pub mod process;
pub mod session;
pub mod target;
pub mod timing;

pub use config::BuildConfig;
pub use error::{BuildError, ErrorCode};
pub use process::{CommandOutput, CommandRunner, Invocation, SystemRunner};
pub use session::BuildSession;
pub use target::BuildTarget;
pub use timing::Timer;
