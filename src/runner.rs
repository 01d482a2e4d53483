//! Sequential execution of external commands.

use anyhow::{Context, Result};
use colored::Colorize;
use duct::cmd;

use crate::error::SetupError;
use crate::logging::SetupLog;

/// Captured outcome of one executed command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Combined stdout/stderr text, decoded lossily as UTF-8.
    pub output: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Execute,
    /// Record and log commands without spawning them.
    DryRun,
}

/// Runs commands one at a time, funnelling their combined output into the
/// setup log. Owns the log for the duration of the run.
pub struct CommandRunner {
    log: SetupLog,
    mode: RunMode,
    echo: bool,
    history: Vec<Vec<String>>,
}

impl CommandRunner {
    pub fn new(log: SetupLog, mode: RunMode, echo: bool) -> Self {
        Self {
            log,
            mode,
            echo,
            history: Vec::new(),
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Every argument vector issued so far, in order.
    pub fn history(&self) -> &[Vec<String>] {
        &self.history
    }

    /// Write a status line to the log and the console.
    pub fn message(&mut self, text: &str) -> Result<()> {
        self.log.message(text)
    }

    /// Spawn the argument vector with stderr merged into stdout and wait
    /// for it to finish.
    ///
    /// A non-zero child exit is reported through the returned result, not
    /// as an `Err`; only failing to spawn the child at all is. The captured
    /// text goes to the console when `print_output` is set and to the log
    /// when `log_output` is set.
    pub fn run<S: AsRef<str>>(
        &mut self,
        argv: &[S],
        print_output: bool,
        log_output: bool,
    ) -> Result<CommandResult> {
        let (program, args) = argv.split_first().context("empty argument vector")?;
        let program = program.as_ref();
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();

        self.history
            .push(argv.iter().map(|a| a.as_ref().to_string()).collect());

        if self.echo {
            eprintln!("{} {} {}", "+".cyan(), program, args.join(" "));
        }

        if self.mode == RunMode::DryRun {
            let line = self
                .history
                .last()
                .map(|argv| argv.join(" "))
                .unwrap_or_default();
            self.log.message(&format!("[DRY RUN] {line}"))?;
            return Ok(CommandResult {
                output: String::new(),
                success: true,
                exit_code: Some(0),
            });
        }

        let output = cmd(program, &args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()
            .map_err(|source| SetupError::CommandSpawn {
                command: program.to_string(),
                source,
            })?;

        let text = String::from_utf8_lossy(&output.stdout).to_string();
        if print_output {
            print!("{text}");
        }
        if log_output {
            self.log.append(&text)?;
        }

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |c| c.to_string());
            println!("{}", format!("{program} exited with status {status}").yellow());
        }

        Ok(CommandResult {
            output: text,
            success: output.status.success(),
            exit_code: output.status.code(),
        })
    }
}
