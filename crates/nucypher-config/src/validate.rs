use anyhow::{Context, Result};
use configparser::ini::Ini;
use std::path::Path;

use nucypher_core::{ConfigurationError, OperatingMode};

/// Sections every configuration document must declare.
pub const REQUIRED_SECTIONS: [&str; 2] = ["nucypher", "blockchain"];

/// Minimum passphrase length, counted in characters.
pub const MIN_PASSPHRASE_LENGTH: usize = 16;

/// How validation reacts to individual check failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Record every failing check and report them together.
    #[default]
    Collect,
    /// Signal an error on the first failing check.
    FailFast,
}

/// Outcome of an ini document validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniReport {
    /// Missing sections and invalid keys, in check order.
    pub missing: Vec<String>,
}

impl IniReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Evaluate `(passed, message)` rules in order; the first failing rule wins.
pub(crate) fn first_failure<'a>(rules: &[(bool, &'a str)]) -> Option<&'a str> {
    rules
        .iter()
        .find(|(passed, _)| !passed)
        .map(|(_, message)| *message)
}

/// Check a passphrase against the configured rules.
///
/// Always signals on failure; the `true` return is the only success path.
pub fn validate_passphrase(passphrase: &str) -> Result<bool> {
    let rules = [(
        passphrase.chars().count() >= MIN_PASSPHRASE_LENGTH,
        "Passphrase is too short, must be >= 16 chars.",
    )];

    if let Some(message) = first_failure(&rules) {
        return Err(ConfigurationError::RuleViolation(message.to_string()).into());
    }
    Ok(true)
}

/// Read and validate the ini file at `path`.
///
/// The file is re-read on every call; nothing is cached. Unreadable files
/// propagate as io errors; unparseable text is a configuration error.
pub fn validate_ini_file(path: &Path, mode: ValidationMode) -> Result<IniReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration: {}", path.display()))?;

    let mut document = Ini::new();
    document.read(content).map_err(ConfigurationError::Malformed)?;

    validate_ini_document(&document, mode)
}

/// Validate a parsed ini document against the fixed schema.
///
/// A document with no sections at all and a missing operating-mode key are
/// fatal regardless of `mode`; every other check obeys it. Check order:
/// operating-mode value, then each required section.
pub fn validate_ini_document(document: &Ini, mode: ValidationMode) -> Result<IniReport> {
    let sections = document.sections();
    if sections.is_empty() {
        return Err(ConfigurationError::EmptyConfiguration.into());
    }

    let mut report = IniReport::default();

    let operating_mode = document
        .get("nucypher", "mode")
        .ok_or(ConfigurationError::NoOperatingMode)?;
    if OperatingMode::parse(&operating_mode).is_none() {
        report.missing.push("mode".to_string());
        if mode == ValidationMode::FailFast {
            return Err(ConfigurationError::InvalidOperatingMode(operating_mode).into());
        }
    }

    for required in REQUIRED_SECTIONS {
        if !sections.iter().any(|section| section == required) {
            report.missing.push(required.to_string());
            if mode == ValidationMode::FailFast {
                return Err(ConfigurationError::MissingSection(required.to_string()).into());
            }
        }
    }

    tracing::debug!(
        "ini validation finished, {} missing entries",
        report.missing.len()
    );
    Ok(report)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
