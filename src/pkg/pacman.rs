use super::PackageManager;

/// Adapter for Arch-family systems, driving `pacman`.
pub struct Pacman;

impl PackageManager for Pacman {
    fn command(&self) -> &'static str {
        "pacman"
    }

    fn install_args(&self, packages: &[&str]) -> Vec<String> {
        super::argv(&["pacman", "-S", "--noconfirm"], packages)
    }

    fn remove_args(&self, packages: &[&str]) -> Vec<String> {
        super::argv(&["pacman", "-Rs", "--noconfirm"], packages)
    }

    /// `-Syu` refreshes the sync databases and upgrades in one pass.
    fn update_commands(&self) -> Vec<Vec<String>> {
        vec![super::argv(&["pacman", "-Syu", "--noconfirm"], &[])]
    }
}
