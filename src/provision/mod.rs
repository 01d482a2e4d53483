//! The provisioning sequence run after detection and resolution.

pub mod docker;
pub mod packages;
pub mod prompt;

use anyhow::Result;

use crate::distro::OsRelease;
use crate::pkg::PackageManager;
use crate::runner::CommandRunner;

/// Run the full update/install/customize sequence for a supported release.
///
/// Step failures are logged and the sequence keeps going; only spawn and
/// filesystem errors abort the run.
pub fn run(
    release: &OsRelease,
    manager: &dyn PackageManager,
    runner: &mut CommandRunner,
    install_docker: bool,
) -> Result<()> {
    runner.message("Running updates")?;
    manager.update(runner)?;

    match release.id.as_str() {
        "fedora" => fedora(manager, runner)?,
        "debian" => debian(manager, runner)?,
        "rocky" | "centos" => rocky_centos(manager, runner)?,
        _ => {}
    }

    if install_docker {
        docker::install(release, manager, runner)?;
    }

    prompt::set_ps1(runner)?;

    Ok(())
}

/// Fedora extras.
fn fedora(manager: &dyn PackageManager, runner: &mut CommandRunner) -> Result<()> {
    runner.message("Installing dnf-plugins-core")?;
    manager.install(runner, &["dnf-plugins-core"])?;

    runner.message("Installing extras")?;
    manager.install(runner, packages::RPM_EXTRAS)?;

    Ok(())
}

/// Rocky/Cent OS extras, including EPEL and the Code Ready Builder repo.
fn rocky_centos(manager: &dyn PackageManager, runner: &mut CommandRunner) -> Result<()> {
    runner.message("Installing dnf-plugins-core and EPEL")?;
    manager.install(runner, &["dnf-plugins-core", "epel-release"])?;

    runner.message("Enabling the Code Ready Builder repo")?;
    runner.run(&["/usr/bin/crb", "enable"], false, true)?;

    runner.message("Installing ncurses for the `clear` command")?;
    manager.install(runner, &["ncurses"])?;

    runner.message("Installing extras")?;
    manager.install(runner, packages::RPM_EXTRAS)?;

    Ok(())
}

/// Debian extras.
fn debian(manager: &dyn PackageManager, runner: &mut CommandRunner) -> Result<()> {
    runner.message("Installing extras")?;
    manager.install(runner, packages::DEBIAN_EXTRAS)?;

    Ok(())
}
