//! Docker CE installation, repository setup included.

use std::fs;

use anyhow::{Context, Result};

use super::packages;
use crate::distro::OsRelease;
use crate::pkg::PackageManager;
use crate::runner::{CommandRunner, RunMode};

const FEDORA_REPO_URL: &str = "https://download.docker.com/linux/fedora/docker-ce.repo";
const CENTOS_REPO_URL: &str = "https://download.docker.com/linux/centos/docker-ce.repo";
const DEBIAN_GPG_URL: &str = "https://download.docker.com/linux/debian/gpg";
const DEBIAN_KEYRING: &str = "/etc/apt/keyrings/docker.asc";
const DEBIAN_SOURCES_LIST: &str = "/etc/apt/sources.list.d/docker.list";

/// Remove conflicting runtimes, wire up the Docker CE repository for the
/// running distro, then install, enable, and smoke-test Docker.
pub fn install(
    release: &OsRelease,
    manager: &dyn PackageManager,
    runner: &mut CommandRunner,
) -> Result<()> {
    runner.message("Attempting to remove any existing Docker and Podman installations")?;
    manager.remove(runner, packages::LEGACY_DOCKER_PACKAGES)?;

    match release.id.as_str() {
        "fedora" => {
            runner.message("Importing Docker CE repo from download.docker.com")?;
            runner.run(
                &["dnf", "config-manager", "--add-repo", FEDORA_REPO_URL],
                false,
                true,
            )?;
        }
        "rocky" | "centos" => {
            runner.message("Importing Docker CE repo from download.docker.com")?;
            runner.run(
                &["dnf", "config-manager", "--add-repo", CENTOS_REPO_URL],
                false,
                true,
            )?;
        }
        "debian" => add_debian_repo(release, manager, runner)?,
        _ => {}
    }

    runner.message("Installing Docker CE components")?;
    manager.install(runner, packages::DOCKER_CE_PACKAGES)?;

    runner.message("Enable Docker CE")?;
    runner.run(&["systemctl", "enable", "--now", "docker"], false, true)?;

    runner.message("Testing Docker with hello-world")?;
    runner.run(&["docker", "run", "hello-world"], false, true)?;

    Ok(())
}

/// Trust the Docker GPG key and register the apt source for it.
fn add_debian_repo(
    release: &OsRelease,
    manager: &dyn PackageManager,
    runner: &mut CommandRunner,
) -> Result<()> {
    runner.message("Installing ca-certificates and curl (required for Docker CE installation)")?;
    manager.install(runner, &["ca-certificates", "curl"])?;

    runner.message("Adding the Docker CE repository")?;
    runner.run(&["install", "-m", "0755", "-d", "/etc/apt/keyrings"], false, true)?;
    runner.run(
        &["curl", "-fsSL", DEBIAN_GPG_URL, "-o", DEBIAN_KEYRING],
        false,
        true,
    )?;
    runner.run(&["chmod", "a+r", DEBIAN_KEYRING], false, true)?;

    runner.message("Adding the Docker CE repository to Apt's sources")?;
    let arch = runner
        .run(&["dpkg", "--print-architecture"], false, false)?
        .output
        .trim()
        .to_string();
    let entry = format!(
        "deb [arch={arch} signed-by={DEBIAN_KEYRING}] https://download.docker.com/linux/debian {} stable\n",
        release.version_codename
    );
    if runner.mode() == RunMode::DryRun {
        runner.message(&format!("[DRY RUN] write {DEBIAN_SOURCES_LIST}"))?;
    } else {
        fs::write(DEBIAN_SOURCES_LIST, entry)
            .with_context(|| format!("failed to write {DEBIAN_SOURCES_LIST}"))?;
    }

    // The new source has to be indexed before docker-ce resolves.
    runner.run(&["apt-get", "update"], false, true)?;

    Ok(())
}
