//! Identification of the running distribution from /etc/os-release.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::SetupError;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Distributions the automated setup sequence knows how to provision.
pub const SUPPORTED_DISTROS: &[&str] = &["fedora", "rocky", "centos", "debian"];

/// Identity of the running distribution, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsRelease {
    /// Lowercase distro identifier, i.e. "ubuntu", "fedora", "rhel".
    pub id: String,
    pub name: String,
    pub pretty_name: String,
    pub platform_id: String,
    pub version: String,
    pub version_id: String,
    pub version_codename: String,
}

impl OsRelease {
    /// Read and parse /etc/os-release.
    pub fn read() -> Result<Self, SetupError> {
        Self::from_path(Path::new(OS_RELEASE_PATH))
    }

    pub fn from_path(path: &Path) -> Result<Self, SetupError> {
        let content = fs::read_to_string(path).map_err(|source| SetupError::ReleaseUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse os-release content.
    ///
    /// Each non-blank line is `KEY=VALUE`; a value wrapped in matching
    /// single or double quotes loses exactly one layer of quoting. Lines
    /// without `=` are skipped. Multi-line and escaped values are not
    /// supported.
    pub fn parse(content: &str) -> Result<Self, SetupError> {
        let mut fields: HashMap<&str, &str> = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            fields.insert(key, unquote(value));
        }

        let required = |key: &'static str| -> Result<String, SetupError> {
            fields
                .get(key)
                .map(|v| v.to_string())
                .ok_or(SetupError::MissingReleaseKey(key))
        };
        let optional = |key: &str| fields.get(key).map(|v| v.to_string()).unwrap_or_default();

        Ok(Self {
            id: required("ID")?,
            name: required("NAME")?,
            pretty_name: required("PRETTY_NAME")?,
            platform_id: required("PLATFORM_ID")?,
            version: optional("VERSION"),
            version_id: optional("VERSION_ID"),
            version_codename: optional("VERSION_CODENAME"),
        })
    }

    /// Check the distro against the automated-setup allow-list.
    pub fn ensure_supported(&self) -> Result<(), SetupError> {
        if SUPPORTED_DISTROS.contains(&self.id.as_str()) {
            Ok(())
        } else {
            Err(SetupError::UnsupportedDistro(self.id.clone()))
        }
    }
}

/// Strip exactly one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fedora_release() {
        let content = r#"NAME="Fedora Linux"
VERSION="40 (Server Edition)"
ID=fedora
VERSION_ID=40
PLATFORM_ID="platform:f40"
PRETTY_NAME="Fedora Linux 40 (Server Edition)"
ANSI_COLOR="0;38;2;60;110;180"
HOME_URL="https://fedoraproject.org/""#;

        let release = OsRelease::parse(content).unwrap();
        assert_eq!(release.id, "fedora");
        assert_eq!(release.name, "Fedora Linux");
        assert_eq!(release.pretty_name, "Fedora Linux 40 (Server Edition)");
        assert_eq!(release.platform_id, "platform:f40");
        assert_eq!(release.version_id, "40");
        assert_eq!(release.version_codename, "");
    }

    #[test]
    fn quoted_and_unquoted_values_parse_identically() {
        let quoted = r#"NAME="Debian GNU/Linux"
ID="debian"
PLATFORM_ID="platform:deb12"
PRETTY_NAME="Debian GNU/Linux 12 (bookworm)"
VERSION_CODENAME="bookworm""#;
        let unquoted = r#"NAME="Debian GNU/Linux"
ID=debian
PLATFORM_ID=platform:deb12
PRETTY_NAME="Debian GNU/Linux 12 (bookworm)"
VERSION_CODENAME=bookworm"#;

        assert_eq!(
            OsRelease::parse(quoted).unwrap(),
            OsRelease::parse(unquoted).unwrap()
        );
    }

    #[test]
    fn single_quotes_lose_one_layer_only() {
        assert_eq!(unquote("'rocky'"), "rocky");
        assert_eq!(unquote("\"'rocky'\""), "'rocky'");
        assert_eq!(unquote("rocky"), "rocky");
        assert_eq!(unquote("\"unbalanced"), "\"unbalanced");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn missing_required_key_names_the_key() {
        let content = "NAME=Debian\nID=debian\nPRETTY_NAME=Debian";
        match OsRelease::parse(content) {
            Err(SetupError::MissingReleaseKey(key)) => assert_eq!(key, "PLATFORM_ID"),
            other => panic!("expected missing-key error, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_malformed_lines_are_skipped() {
        let content = "\nNAME=Rocky\n\nnot a pair\nID=rocky\nPLATFORM_ID=platform:el9\nPRETTY_NAME=Rocky\n";
        let release = OsRelease::parse(content).unwrap();
        assert_eq!(release.id, "rocky");
    }

    #[test]
    fn allow_list_rejects_arch() {
        let release = OsRelease {
            id: "arch".to_string(),
            name: "Arch Linux".to_string(),
            pretty_name: "Arch Linux".to_string(),
            platform_id: String::new(),
            version: String::new(),
            version_id: String::new(),
            version_codename: String::new(),
        };
        assert!(matches!(
            release.ensure_supported(),
            Err(SetupError::UnsupportedDistro(id)) if id == "arch"
        ));
    }

    #[test]
    fn allow_list_accepts_the_supported_four() {
        for id in SUPPORTED_DISTROS {
            let release = OsRelease {
                id: id.to_string(),
                name: id.to_string(),
                pretty_name: id.to_string(),
                platform_id: String::new(),
                version: String::new(),
                version_id: String::new(),
                version_codename: String::new(),
            };
            assert!(release.ensure_supported().is_ok());
        }
    }
}
