use super::PackageManager;

/// Adapter for the Debian family, driving `apt-get`.
pub struct AptGet;

impl PackageManager for AptGet {
    fn command(&self) -> &'static str {
        "apt-get"
    }

    fn install_args(&self, packages: &[&str]) -> Vec<String> {
        super::argv(&["apt-get", "install", "-y"], packages)
    }

    fn remove_args(&self, packages: &[&str]) -> Vec<String> {
        super::argv(&["apt-get", "remove", "-y"], packages)
    }

    /// `apt-get update` refreshes the package lists, `apt-get upgrade -y`
    /// applies the upgrades; apt has no single combined command.
    fn update_commands(&self) -> Vec<Vec<String>> {
        vec![
            super::argv(&["apt-get", "update"], &[]),
            super::argv(&["apt-get", "upgrade", "-y"], &[]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_prepends_subcommand_and_confirm_flag() {
        let args = AptGet.install_args(&["nano", "less"]);
        assert_eq!(args, ["apt-get", "install", "-y", "nano", "less"]);
        assert_eq!(args.len(), 3 + 2);
    }

    #[test]
    fn remove_preserves_package_order() {
        let args = AptGet.remove_args(&["podman", "docker", "docker-engine"]);
        assert_eq!(
            args,
            ["apt-get", "remove", "-y", "podman", "docker", "docker-engine"]
        );
    }

    #[test]
    fn update_issues_exactly_two_commands() {
        let commands = AptGet.update_commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], ["apt-get", "update"]);
        assert_eq!(commands[1], ["apt-get", "upgrade", "-y"]);
    }
}
