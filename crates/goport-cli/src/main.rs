//! CLI entry point for goport.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and
//! exit codes. All business logic lives in the `goport-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use goport_app::{
    OutputFormat, PipelineOptions, pair_arguments, render_bundles, resolve_batch,
};
use goport_fetch::HttpFetcher;
use goport_settings::{Overrides, ResolvedConfig, Verbosity};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "goport",
    version,
    about = "Resolve Go packages into Portfile identities, dependencies and checksums"
)]
struct Cli {
    /// Path to goport config TOML. A missing file means defaults.
    #[arg(long, default_value = "goport.toml", global = true)]
    config: Utf8PathBuf,

    /// Log every request and probe.
    #[arg(long, global = true, conflicts_with = "quiet")]
    debug: bool,

    /// Only log errors.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve one or more `<package> <version>` pairs.
    Get {
        /// Package coordinates and versions, alternating.
        #[arg(required = true, value_name = "PACKAGE VERSION")]
        args: Vec<String>,

        /// Where to write the output (single pair only; otherwise stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Output format (portfile|json).
        #[arg(long, default_value = "portfile")]
        format: String,

        /// Subdirectory of the repository holding the lock file.
        #[arg(long)]
        manifest_dir: Option<String>,

        /// Fail instead of writing placeholder checksums when an archive cannot be fetched.
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("goport error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let verbosity = if cli.debug {
        Some(Verbosity::Debug)
    } else if cli.quiet {
        Some(Verbosity::Quiet)
    } else {
        None
    };

    match cli.cmd {
        Commands::Get {
            args,
            output,
            format,
            manifest_dir,
            strict,
        } => {
            let overrides = Overrides {
                best_effort: strict.then_some(false),
                manifest_dir,
                verbosity,
            };
            let resolved = load_config(&cli.config, overrides)?;
            init_tracing(resolved.effective.verbosity);
            cmd_get(&resolved, &args, output, &format)
        }
    }
}

fn load_config(path: &Utf8Path, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if path.exists() {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))?;
        goport_settings::parse_config_toml(&text).with_context(|| format!("parse config: {path}"))?
    } else {
        goport_settings::GoportConfigV1::default()
    };
    goport_settings::resolve_config(cfg, overrides).context("resolve config")
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    // A subscriber can only be installed once per process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn cmd_get(
    resolved: &ResolvedConfig,
    args: &[String],
    output: Option<Utf8PathBuf>,
    format: &str,
) -> anyhow::Result<()> {
    let requests = pair_arguments(args)?;
    let format: OutputFormat = format.parse()?;

    let output = match output {
        Some(path) if requests.len() > 1 => {
            tracing::warn!(
                output = %path,
                "--output is ignored when resolving more than one package; writing to stdout"
            );
            None
        }
        other => other,
    };

    let fetcher = HttpFetcher::new(&resolved.effective.user_agent)?;
    let opts = PipelineOptions::from(&resolved.effective);
    let bundles = resolve_batch(&fetcher, &requests, &opts)?;
    let text = render_bundles(&bundles, format)?;

    match output {
        Some(path) => write_text_file(&path, &text).context("write output")?,
        None => print!("{text}"),
    }
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}
