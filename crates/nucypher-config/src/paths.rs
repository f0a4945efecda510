use std::path::{Path, PathBuf};

/// Application name used for platform configuration directories.
pub const APP_NAME: &str = "nucypher";

/// Ini file name inside the configuration root.
pub const INI_FILE_NAME: &str = "nucypher.ini";

/// Every filesystem location owned by the configuration subsystem.
///
/// Passed by reference into each operation instead of living as process-wide
/// constants, so tests can point the whole tree at a temporary directory.
/// The keyring root is an independent field; callers may relocate it away
/// from the configuration root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config_root: PathBuf,
    /// Holds key material; created owner-only, unlike the rest of the tree.
    pub keyring_root: PathBuf,
    pub known_nodes: PathBuf,
    pub known_certificates: PathBuf,
    pub known_metadata: PathBuf,
    pub seed_nodes: PathBuf,
    pub seed_certificates: PathBuf,
    pub seed_metadata: PathBuf,
    pub ini_path: PathBuf,
}

impl ConfigPaths {
    /// Derive the full tree beneath `root`.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            keyring_root: root.join("keyring"),
            known_nodes: root.join("known_nodes"),
            known_certificates: root.join("known_certificates"),
            known_metadata: root.join("known_metadata"),
            seed_nodes: root.join("seed_nodes"),
            seed_certificates: root.join("seed_certificates"),
            seed_metadata: root.join("seed_metadata"),
            ini_path: root.join(INI_FILE_NAME),
            config_root: root,
        }
    }

    /// Tree at the platform default root.
    pub fn default_paths() -> Self {
        Self::under(default_config_root())
    }

    /// The directories created at bootstrap, keyring first, paired with
    /// their permission modes.
    pub(crate) fn tree(&self) -> [(&Path, u32); 7] {
        [
            (self.keyring_root.as_path(), 0o700),
            (self.known_nodes.as_path(), 0o755),
            (self.known_certificates.as_path(), 0o755),
            (self.known_metadata.as_path(), 0o755),
            (self.seed_nodes.as_path(), 0o755),
            (self.seed_certificates.as_path(), 0o755),
            (self.seed_metadata.as_path(), 0o755),
        ]
    }
}

/// Platform default configuration root.
///
/// Prefers the platform data directory, then a dot-directory under the home
/// directory, then the system temp dir for environments without a resolvable
/// home (e.g., minimal containers).
pub fn default_config_root() -> PathBuf {
    if let Some(project_dirs) = directories::ProjectDirs::from("", "", APP_NAME) {
        return project_dirs.data_dir().to_path_buf();
    }

    if let Some(base_dirs) = directories::BaseDirs::new() {
        return base_dirs.home_dir().join(format!(".{APP_NAME}"));
    }

    std::env::temp_dir().join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_derives_every_member_beneath_the_root() {
        let paths = ConfigPaths::under("/tmp/nucypher-test");
        let root = Path::new("/tmp/nucypher-test");

        assert_eq!(paths.config_root, root);
        for member in [
            &paths.keyring_root,
            &paths.known_nodes,
            &paths.known_certificates,
            &paths.known_metadata,
            &paths.seed_nodes,
            &paths.seed_certificates,
            &paths.seed_metadata,
            &paths.ini_path,
        ] {
            assert!(member.starts_with(root), "{} escapes root", member.display());
        }
        assert_eq!(paths.ini_path, root.join(INI_FILE_NAME));
    }

    #[test]
    fn keyring_is_a_distinct_directory() {
        let paths = ConfigPaths::under("/tmp/nucypher-test");
        assert_ne!(paths.keyring_root, paths.config_root);
        assert_eq!(paths.keyring_root.file_name().unwrap(), "keyring");
    }

    #[test]
    fn default_root_resolves_somewhere() {
        let root = default_config_root();
        assert!(!root.as_os_str().is_empty());
    }
}
