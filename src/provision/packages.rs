//! Package sets installed by the provisioning sequence.

/// Editors and basics wanted on every Debian host. `sudo` is absent from a
/// minimal Debian install, unlike the RPM family.
pub static DEBIAN_EXTRAS: &[&str] = &["nano", "neovim", "less", "sudo", "man"];

/// Extras for the RPM family (Fedora, Rocky, Cent OS).
pub static RPM_EXTRAS: &[&str] = &["which", "nano", "neovim", "less", "openssh-server", "man"];

/// Runtimes that conflict with Docker CE and are removed before it goes in.
pub static LEGACY_DOCKER_PACKAGES: &[&str] = &[
    "docker",
    "docker-client",
    "docker-client-latest",
    "docker-common",
    "docker-latest",
    "docker-latest-logrotate",
    "docker-logrotate",
    "docker-selinux",
    "docker-engine-selinux",
    "docker-engine",
    "podman",
];

/// The Docker CE component set from download.docker.com.
pub static DOCKER_CE_PACKAGES: &[&str] = &[
    "docker-ce",
    "docker-ce-cli",
    "containerd.io",
    "docker-buildx-plugin",
    "docker-compose-plugin",
];
