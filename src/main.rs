//! worldbuild CLI
//!
//! Runs the top-level targets of a source tree through make.
//!
//! # Usage
//!
//! ```bash
//! # Check prerequisites
//! worldbuild preflight
//!
//! # Build and install userland
//! worldbuild buildworld
//! worldbuild installworld
//!
//! # Build and install a custom kernel from another tree
//! worldbuild --src ~/src --kernconf MYKERNEL buildkernel
//! worldbuild --src ~/src --kernconf MYKERNEL installkernel
//!
//! # Show configuration and what exists on disk
//! worldbuild status
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use worldbuild::config::{
    DEFAULT_KERNEL_CONFIG, DEFAULT_MAKE_CONFIG, DEFAULT_OBJ_DIR, DEFAULT_SOURCE_DIR,
};
use worldbuild::preflight::PreflightChecker;
use worldbuild::{BuildConfig, BuildError, BuildSession, BuildTarget, Timer};

#[derive(Parser)]
#[command(name = "worldbuild")]
#[command(author, version, about = "buildworld/buildkernel front-end", long_about = None)]
struct Cli {
    /// Source tree to build from
    #[arg(long = "src", global = true, env = "WORLDBUILD_SRC", default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Object directory prefix (MAKEOBJDIRPREFIX)
    #[arg(long = "obj", global = true, env = "WORLDBUILD_OBJ", default_value = DEFAULT_OBJ_DIR)]
    obj_dir: PathBuf,

    /// Kernel configuration name (KERNCONF)
    #[arg(long, global = true, env = "WORLDBUILD_KERNCONF", default_value = DEFAULT_KERNEL_CONFIG)]
    kernconf: String,

    /// make.conf to use (__MAKE_CONF)
    #[arg(long, global = true, env = "WORLDBUILD_MAKE_CONF", default_value = DEFAULT_MAKE_CONFIG)]
    make_conf: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build userland (make buildworld)
    #[command(name = "buildworld")]
    BuildWorld,

    /// Install userland (make installworld)
    #[command(name = "installworld")]
    InstallWorld,

    /// Build the kernel (make buildkernel)
    #[command(name = "buildkernel")]
    BuildKernel,

    /// Install the kernel (make installkernel)
    #[command(name = "installkernel")]
    InstallKernel,

    /// Check build prerequisites
    Preflight,

    /// Show configuration and build state
    Status,
}

impl Cli {
    fn build_config(&self) -> BuildConfig {
        BuildConfig::default()
            .with_source_dir(&self.source_dir)
            .with_obj_dir(&self.obj_dir)
            .with_kernel_config(&self.kernconf)
            .with_make_config_path(&self.make_conf)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.build_config();
    let result = match cli.command {
        Commands::BuildWorld => cmd_target(config, BuildTarget::BuildWorld),
        Commands::InstallWorld => cmd_target(config, BuildTarget::InstallWorld),
        Commands::BuildKernel => cmd_target(config, BuildTarget::BuildKernel),
        Commands::InstallKernel => cmd_target(config, BuildTarget::InstallKernel),
        Commands::Preflight => cmd_preflight(config),
        Commands::Status => cmd_status(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn cmd_target(config: BuildConfig, target: BuildTarget) -> Result<()> {
    let mut session = BuildSession::new(config);

    let t = Timer::start(target.label());
    let result = session.run(target);
    t.finish();

    match result {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e @ BuildError::TargetFailed { .. }) => {
            eprint!("{}", session.last_output());
            bail!("{} ({})", e, e.code())
        }
        Err(e) => {
            let code = e.code();
            Err(anyhow::Error::new(e).context(code.to_string()))
        }
    }
}

fn cmd_preflight(config: BuildConfig) -> Result<()> {
    let report = PreflightChecker::new(config).run_all();
    report.print_summary();

    if !report.is_ok() {
        bail!("{} preflight check(s) failed", report.errors().len());
    }
    Ok(())
}

fn cmd_status(config: &BuildConfig) -> Result<()> {
    let found = |exists: bool| if exists { "FOUND" } else { "NOT FOUND" };

    println!("worldbuild Status");
    println!("=================");
    println!();
    println!("Configuration:");
    println!("  Source dir:  {}", config.source_dir.display());
    println!("  Object dir:  {}", config.obj_dir.display());
    println!("  KERNCONF:    {}", config.kernel_config);
    println!("  make.conf:   {}", config.make_config_path.display());
    println!();

    let makefile = config.source_dir.join("Makefile");
    println!("Source Tree:");
    println!("  Source dir:  {}", found(config.source_dir.is_dir()));
    println!("  Makefile:    {}", found(makefile.is_file()));
    println!("  make.conf:   {}", found(config.make_config_path.is_file()));
    println!();

    println!("Build Artifacts:");
    println!("  Object dir:  {}", found(config.obj_dir.is_dir()));
    println!();

    println!("Next steps:");
    if !config.source_dir.is_dir() {
        println!("  1. Check out a source tree to {} or pass --src", config.source_dir.display());
    } else if !config.obj_dir.is_dir() {
        println!("  1. Run 'worldbuild buildworld'");
    } else {
        println!("  Run 'worldbuild buildkernel' or 'worldbuild installworld' as needed.");
    }

    Ok(())
}
