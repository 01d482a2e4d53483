mod distro;
mod error;
mod logging;
mod pkg;
mod provision;
mod runner;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::distro::OsRelease;
use crate::error::SetupError;
use crate::logging::SetupLog;
use crate::pkg::ManagerKind;
use crate::runner::{CommandRunner, RunMode};

const DECLINED: i32 = 2;

/// pism main parser
#[derive(Parser, Debug)]
#[command(author, version, about = "Automated setup helper for homelab VMs and LXCs", long_about = None)]
struct Cli {
    /// Run in non-interactive mode
    #[arg(long)]
    non_interactive: bool,

    /// Install Docker CE
    #[arg(long)]
    docker: bool,

    /// Log what would run without executing commands or editing files
    #[arg(long)]
    dry_run: bool,

    /// Path of the setup log file
    #[arg(long, default_value = "setup.log")]
    log_file: PathBuf,

    /// Echo every command before it runs
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let log = SetupLog::open(&cli.log_file)?;
    let mode = if cli.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Execute
    };
    let mut runner = CommandRunner::new(log, mode, cli.debug);

    let release = OsRelease::read()?;
    if let Err(err) = release.ensure_supported() {
        runner.message(&format!(
            "Detected distro {} is currently not supported for automatic setup installation. \
             Only Fedora, Rocky, Cent OS, and Debian are supported at this time.",
            release.id
        ))?;
        return Err(err.into());
    }

    let install_docker = if cli.non_interactive {
        cli.docker
    } else {
        let docker = Confirm::new()
            .with_prompt("Install Docker CE?")
            .default(true)
            .interact()?;
        let proceed = Confirm::new()
            .with_prompt("Proceed with automated setup?")
            .default(true)
            .interact()?;
        if !proceed {
            println!("Aborting");
            return Ok(DECLINED);
        }
        docker
    };

    if !cli.dry_run && !matches!(sudo::check(), sudo::RunningAs::Root) {
        println!(
            "{}",
            "Not running as root; package operations will likely fail.".yellow()
        );
    }

    let kind = resolve_manager(&release, &mut runner)?;
    if which::which(kind.command()).is_err() {
        runner.message(&format!(
            "warning: \"{}\" was not found on PATH",
            kind.command()
        ))?;
    }

    provision::run(&release, kind.manager(), &mut runner, install_docker)?;

    Ok(0)
}

/// Map the detected distro to its package manager, falling back to asking
/// the operator for the command name. An answer that matches no known
/// adapter is fatal; nothing can be provisioned without a package manager.
fn resolve_manager(release: &OsRelease, runner: &mut CommandRunner) -> Result<ManagerKind> {
    runner.message(&format!("found distro \"{}\"", release.id))?;

    if let Some(kind) = ManagerKind::for_distro(&release.id) {
        runner.message(&format!(
            "matched distro \"{}\" to package manager \"{}\"",
            release.id,
            kind.command()
        ))?;
        return Ok(kind);
    }

    runner.message(&format!(
        "distro \"{}\" is not in the list of known distros",
        release.id
    ))?;
    let name: String = Input::new()
        .with_prompt("Please enter the command used to install packages")
        .interact_text()?;

    match ManagerKind::from_command(name.trim()) {
        Some(kind) => Ok(kind),
        None => {
            runner.message("package manager could not be set. Exiting.")?;
            Err(SetupError::UnknownPackageManager(name).into())
        }
    }
}
