use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use nucypher_core::ConfigurationError;

use crate::paths::ConfigPaths;

/// Bundled ini template. The first 12 lines are a descriptive header and are
/// never copied into a generated file.
const TEMPLATE_INI: &str = include_str!("template.ini");

/// Header lines skipped when rendering the template.
const TEMPLATE_HEADER_LINES: usize = 12;

/// Create the configuration directory tree and the default ini file.
///
/// Fails if the root directory already exists; there are no merge or
/// overwrite semantics. Directories created before a later failure are left
/// in place. Returns the root path used.
pub fn initialize_configuration(paths: &ConfigPaths) -> Result<PathBuf> {
    if paths.config_root.is_dir() {
        return Err(ConfigurationError::ExistingConfiguration(paths.config_root.clone()).into());
    }

    create_dir_with_mode(&paths.config_root, 0o755)?;
    for (dir, mode) in paths.tree() {
        create_dir_with_mode(dir, mode)?;
    }

    write_default_ini(&paths.ini_path)?;

    tracing::info!(
        "configuration tree created at {}",
        paths.config_root.display()
    );
    Ok(paths.config_root.clone())
}

/// Write the default ini file derived from the bundled template.
///
/// The template's comment header is dropped and leading `;` markers are
/// stripped so the commented default sections become live. Refuses to
/// overwrite a destination that already holds content.
pub fn write_default_ini(path: &Path) -> Result<()> {
    // Checked before the destination is opened for write, which would
    // truncate whatever is there.
    if existing_content(path)?.is_some_and(|content| !content.is_empty()) {
        return Err(ConfigurationError::NotBlankFile(path.to_path_buf()).into());
    }

    let mut rendered = String::new();
    for line in TEMPLATE_INI.lines().skip(TEMPLATE_HEADER_LINES) {
        rendered.push_str(line.trim_start_matches(';'));
        rendered.push('\n');
    }

    fs::write(path, rendered)
        .with_context(|| format!("Failed to write default ini: {}", path.display()))?;
    tracing::debug!("default ini written to {}", path.display());
    Ok(())
}

fn existing_content(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}

fn create_dir_with_mode(path: &Path, mode: u32) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    set_dir_mode(path, mode)
}

#[cfg(unix)]
fn set_dir_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .with_context(|| format!("failed to chmod {mode:o}: {}", path.display()))
}

#[cfg(not(unix))]
fn set_dir_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
