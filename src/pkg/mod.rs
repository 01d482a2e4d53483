//! Package manager resolution and the adapters behind it.

mod apt;
mod dnf;
mod pacman;

pub use apt::AptGet;
pub use dnf::Dnf;
pub use pacman::Pacman;

use anyhow::Result;

use crate::runner::CommandRunner;

/// One underlying package-management tool, bound to install, update, and
/// remove operations.
///
/// Adapters are stateless; the same one is selected once per run and reused
/// for every operation. The argv-construction methods are separate from the
/// executing methods so command shapes can be inspected without spawning
/// anything.
pub trait PackageManager {
    /// Name of the command-line tool this adapter drives.
    fn command(&self) -> &'static str;

    fn install_args(&self, packages: &[&str]) -> Vec<String>;

    fn remove_args(&self, packages: &[&str]) -> Vec<String>;

    /// The refresh-then-upgrade sequence, one argv per command to issue.
    fn update_commands(&self) -> Vec<Vec<String>>;

    fn install(&self, runner: &mut CommandRunner, packages: &[&str]) -> Result<()> {
        runner.run(&self.install_args(packages), false, true)?;
        Ok(())
    }

    fn remove(&self, runner: &mut CommandRunner, packages: &[&str]) -> Result<()> {
        runner.run(&self.remove_args(packages), false, true)?;
        Ok(())
    }

    fn update(&self, runner: &mut CommandRunner) -> Result<()> {
        for argv in self.update_commands() {
            runner.run(&argv, false, true)?;
        }
        Ok(())
    }
}

/// Resolution result: which package manager a run is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerKind {
    Apt,
    Dnf,
    Pacman,
}

impl ManagerKind {
    /// Look up the manager for a distro identifier in the fixed table.
    ///
    /// `None` means the identifier is unknown and the operator has to be
    /// asked for the command name instead.
    pub fn for_distro(id: &str) -> Option<Self> {
        match id {
            "ubuntu" | "debian" | "mint" => Some(Self::Apt),
            "rhel" | "fedora" | "rocky" | "centos" => Some(Self::Dnf),
            "arch" => Some(Self::Pacman),
            _ => None,
        }
    }

    /// Match an operator-supplied command name to a known adapter.
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "apt-get" => Some(Self::Apt),
            "dnf" => Some(Self::Dnf),
            "pacman" => Some(Self::Pacman),
            _ => None,
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            Self::Apt => "apt-get",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
        }
    }

    /// The adapter implementing this kind.
    pub fn manager(self) -> &'static dyn PackageManager {
        match self {
            Self::Apt => &AptGet,
            Self::Dnf => &Dnf,
            Self::Pacman => &Pacman,
        }
    }
}

/// Build an argument vector from a fixed prefix plus package names, order
/// preserved.
fn argv(base: &[&str], packages: &[&str]) -> Vec<String> {
    base.iter()
        .chain(packages)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apt_distros_resolve_to_apt() {
        for id in ["ubuntu", "debian", "mint"] {
            assert_eq!(ManagerKind::for_distro(id), Some(ManagerKind::Apt));
        }
    }

    #[test]
    fn dnf_distros_resolve_to_dnf() {
        for id in ["rhel", "fedora", "rocky", "centos"] {
            assert_eq!(ManagerKind::for_distro(id), Some(ManagerKind::Dnf));
        }
    }

    #[test]
    fn arch_resolves_to_pacman() {
        assert_eq!(ManagerKind::for_distro("arch"), Some(ManagerKind::Pacman));
    }

    #[test]
    fn unknown_distros_require_operator_input() {
        for id in ["opensuse", "gentoo", "nixos", ""] {
            assert_eq!(ManagerKind::for_distro(id), None);
        }
    }

    #[test]
    fn operator_input_matches_adapters_by_command_name() {
        assert_eq!(ManagerKind::from_command("apt-get"), Some(ManagerKind::Apt));
        assert_eq!(ManagerKind::from_command("dnf"), Some(ManagerKind::Dnf));
        assert_eq!(
            ManagerKind::from_command("pacman"),
            Some(ManagerKind::Pacman)
        );
        assert_eq!(ManagerKind::from_command("apt"), None);
        assert_eq!(ManagerKind::from_command("zypper"), None);
    }

    #[test]
    fn adapters_drive_the_tool_they_resolve_to() {
        for kind in [ManagerKind::Apt, ManagerKind::Dnf, ManagerKind::Pacman] {
            assert_eq!(kind.manager().command(), kind.command());
        }
    }
}
