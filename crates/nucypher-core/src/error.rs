use std::path::PathBuf;

/// Malformed or conflicting configuration state.
///
/// Operating-system failures (permissions, disk) are not represented here;
/// they propagate as io errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Existing configuration found at {}", .0.display())]
    ExistingConfiguration(PathBuf),

    #[error("{} is not a blank file. Do you have an existing configuration?", .0.display())]
    NotBlankFile(PathBuf),

    #[error("Empty configuration file")]
    EmptyConfiguration,

    #[error("No operating mode configured")]
    NoOperatingMode,

    #[error(
        "Invalid operating mode '{0}'. Specify one of: federated, testing, decentralized, centralized"
    )]
    InvalidOperatingMode(String),

    #[error("Invalid config file: missing section '{0}'")]
    MissingSection(String),

    #[error("No configuration directory found at {}", .0.display())]
    MissingConfigRoot(PathBuf),

    #[error("Malformed configuration file: {0}")]
    Malformed(String),

    #[error("{0}")]
    RuleViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperatingMode;

    #[test]
    fn test_display_existing_configuration() {
        let err = ConfigurationError::ExistingConfiguration(PathBuf::from("/home/user/.nucypher"));
        assert_eq!(
            err.to_string(),
            "Existing configuration found at /home/user/.nucypher"
        );
    }

    #[test]
    fn test_display_not_blank_file() {
        let err = ConfigurationError::NotBlankFile(PathBuf::from("nucypher.ini"));
        assert_eq!(
            err.to_string(),
            "nucypher.ini is not a blank file. Do you have an existing configuration?"
        );
    }

    #[test]
    fn test_display_missing_section() {
        let err = ConfigurationError::MissingSection("blockchain".into());
        assert_eq!(
            err.to_string(),
            "Invalid config file: missing section 'blockchain'"
        );
    }

    #[test]
    fn test_invalid_operating_mode_lists_every_valid_mode() {
        let err = ConfigurationError::InvalidOperatingMode("production".into());
        let message = err.to_string();
        assert!(message.contains("'production'"));
        for mode in OperatingMode::ALL {
            assert!(message.contains(mode.as_str()), "missing {mode}");
        }
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigurationError>();
    }
}
