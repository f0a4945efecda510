//! Configuration bootstrap and validation: directory tree creation, default
//! ini generation, schema checks, and runtime preconditions.

pub mod init;
pub mod paths;
pub mod runtime;
pub mod validate;

pub use init::{initialize_configuration, write_default_ini};
pub use paths::{ConfigPaths, default_config_root};
pub use runtime::{check_config_tree, check_runtime};
pub use validate::{
    IniReport, ValidationMode, validate_ini_document, validate_ini_file, validate_passphrase,
};
