// CLASSIFICATION: COMMUNITY
// Filename: cohresume.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! `cohresume` – resume from hibernation during early boot.
//!
//! Boot mode (default): decide from boot parameters, given as positional
//! arguments or read from `/proc/cmdline`, and always exit 0.
//!
//! Direct mode (`--device`): skip the decision and program `/sys/power`
//! for the given device; exit 1 unless the attempt ended in a normal boot.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};

use cohesix_resume::bootloader::args::{parse_cmdline, BootArgs};
use cohesix_resume::config::{self, ResumeConfig};
use cohesix_resume::utils::num::parse_auto_base;
use cohesix_resume::{Outcome, Resumer};

#[derive(Debug, Parser)]
#[command(name = "cohresume", about = "Resume from a hibernation image", version = "0.1")]
struct Cli {
    /// Resume from this device directly instead of deciding from boot args
    #[arg(long, value_name = "SPEC")]
    device: Option<String>,

    /// Image offset for --device (0x hex, leading 0 octal)
    #[arg(long, value_name = "N", requires = "device", value_parser = parse_offset)]
    offset: Option<u64>,

    /// Override the power control directory
    #[arg(long, value_name = "DIR")]
    sys_power: Option<PathBuf>,

    /// Override the kernel command line source
    #[arg(long, value_name = "FILE")]
    cmdline: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    /// Boot parameters; read from the kernel command line when omitted
    #[arg(value_name = "PARAM", allow_hyphen_values = true)]
    params: Vec<String>,
}

fn parse_offset(s: &str) -> Result<u64, String> {
    Ok(parse_auto_base(s))
}

fn init_logging(verbose: bool) {
    let default = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

fn load_config(cli: &Cli) -> ResumeConfig {
    let mut cfg = config::load_active();
    if let Some(dir) = &cli.sys_power {
        cfg.power_dir = dir.clone();
    }
    if let Some(path) = &cli.cmdline {
        cfg.cmdline_path = path.clone();
    }
    cfg
}

fn boot_args(cli: &Cli, cfg: &ResumeConfig) -> Result<BootArgs> {
    if !cli.params.is_empty() {
        return Ok(BootArgs::from_argv(cli.params.iter().cloned()));
    }
    let text = fs::read_to_string(&cfg.cmdline_path)
        .with_context(|| format!("reading {}", cfg.cmdline_path.display()))?;
    Ok(parse_cmdline(&text))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cfg = load_config(&cli);
    debug!("resume: config {cfg:?}");
    let resumer = Resumer::from_config(&cfg);

    if let Some(spec) = &cli.device {
        let result = resumer.activator().activate(spec, cli.offset.unwrap_or(0));
        return Ok(if result.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let args = boot_args(&cli, &cfg)?;
    match resumer.attempt_resume(&args) {
        Outcome::NoAction => debug!("resume: nothing to do"),
        Outcome::Attempted(result) => debug!("resume: attempt finished: {result:?}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let direct = cli.device.is_some();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            log::error!("resume: {err:#}");
            // a broken resume attempt must never stop the boot
            if direct {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
