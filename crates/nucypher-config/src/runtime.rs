use anyhow::{Result, bail};

use nucypher_core::ConfigurationError;

use crate::paths::ConfigPaths;
use crate::validate::first_failure;

/// Verify the host is safe to operate on.
///
/// Privileged execution is refused on unix hosts; elsewhere the check is a
/// no-op. Violations are generic runtime failures, not configuration errors.
pub fn check_runtime() -> Result<bool> {
    let rules = [(
        cfg!(not(unix)) || effective_uid() != 0,
        "Cannot run as root user.",
    )];

    if let Some(message) = first_failure(&rules) {
        bail!(message);
    }
    Ok(true)
}

/// Existence check for the configuration root. No structural validation.
pub fn check_config_tree(paths: &ConfigPaths) -> Result<bool> {
    if !paths.config_root.exists() {
        return Err(ConfigurationError::MissingConfigRoot(paths.config_root.clone()).into());
    }
    Ok(true)
}

fn effective_uid() -> u32 {
    #[cfg(unix)]
    {
        // SAFETY: `geteuid` has no preconditions and returns the caller's
        // effective UID.
        unsafe { libc::geteuid() }
    }
    #[cfg(not(unix))]
    {
        0
    }
}
