use super::PackageManager;

/// Adapter for the RPM family (Fedora, RHEL, Rocky, Cent OS), driving `dnf`.
pub struct Dnf;

impl PackageManager for Dnf {
    fn command(&self) -> &'static str {
        "dnf"
    }

    fn install_args(&self, packages: &[&str]) -> Vec<String> {
        super::argv(&["dnf", "install", "-y"], packages)
    }

    fn remove_args(&self, packages: &[&str]) -> Vec<String> {
        super::argv(&["dnf", "remove", "-y"], packages)
    }

    /// dnf refreshes metadata and upgrades in one command.
    fn update_commands(&self) -> Vec<Vec<String>> {
        vec![super::argv(&["dnf", "update", "-y"], &[])]
    }
}
