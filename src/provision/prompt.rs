//! Shell prompt customization.

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};

use crate::runner::{CommandRunner, RunMode};

/// Block appended to ~/.bashrc: a red `<status>` marker on non-zero return,
/// then colored user, host, and working directory.
const PS1_BLOCK: &str = r#"
function nonzero_return() {
	RETVAL=$?
	[ $RETVAL -ne 0 ] && echo "<$RETVAL> "
}

export PS1="\[\e[31m\]\`nonzero_return\`\[\e[m\][\[\e[32m\]\u\[\e[m\] @ \[\e[36m\]\h\[\e[m\] ; \[\e[35m\]\W\[\e[m\]] \$ "
"#;

/// Append the prompt customization to ~/.bashrc and source it.
pub fn set_ps1(runner: &mut CommandRunner) -> Result<()> {
    runner.message("Setting PS1")?;

    let home = dirs::home_dir().context("could not determine the home directory")?;
    let bashrc = home.join(".bashrc");

    if runner.mode() == RunMode::DryRun {
        runner.message(&format!(
            "[DRY RUN] append prompt setup to {}",
            bashrc.display()
        ))?;
    } else {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&bashrc)
            .with_context(|| format!("failed to open {}", bashrc.display()))?;
        file.write_all(PS1_BLOCK.as_bytes())
            .with_context(|| format!("failed to write {}", bashrc.display()))?;
        writeln!(file, "export HOME=\"{}\"", home.display())
            .with_context(|| format!("failed to write {}", bashrc.display()))?;
    }

    // `source` is a shell builtin; this is the one place a shell is
    // deliberately constructed.
    let source_cmd = format!("source '{}'", bashrc.display());
    runner.run(&["bash", "-c", source_cmd.as_str()], false, true)?;

    Ok(())
}
