//! End-to-end bootstrap: tree creation, existence check, then validation of
//! the generated ini file.

use nucypher_config::{
    ConfigPaths, ValidationMode, check_config_tree, initialize_configuration, validate_ini_file,
};

#[test]
fn bootstrap_produces_a_tree_that_validates_clean() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = ConfigPaths::under(temp.path().join("nucypher"));

    let root = initialize_configuration(&paths).expect("bootstrap");
    assert_eq!(root, paths.config_root);
    assert!(check_config_tree(&paths).expect("tree exists"));

    for dir in [
        &paths.keyring_root,
        &paths.known_nodes,
        &paths.known_certificates,
        &paths.known_metadata,
        &paths.seed_nodes,
        &paths.seed_certificates,
        &paths.seed_metadata,
    ] {
        assert!(dir.is_dir(), "missing {}", dir.display());
    }

    // The generated default must pass strict validation as-is.
    let report = validate_ini_file(&paths.ini_path, ValidationMode::FailFast).expect("validate");
    assert!(report.is_valid());
}

#[test]
fn second_bootstrap_against_the_same_root_is_refused() {
    let temp = tempfile::tempdir().expect("tempdir");
    let paths = ConfigPaths::under(temp.path().join("nucypher"));

    initialize_configuration(&paths).expect("first bootstrap");
    let err = initialize_configuration(&paths).expect_err("second bootstrap");
    assert!(err.to_string().contains("Existing configuration"));

    // The first tree survives the refused attempt.
    assert!(paths.ini_path.is_file());
}

#[cfg(unix)]
#[test]
fn bootstrap_applies_the_documented_permission_modes() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let paths = ConfigPaths::under(temp.path().join("nucypher"));
    initialize_configuration(&paths).expect("bootstrap");

    let mode_of = |path: &std::path::Path| {
        std::fs::metadata(path)
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777
    };

    assert_eq!(mode_of(&paths.config_root), 0o755);
    assert_eq!(mode_of(&paths.keyring_root), 0o700);
    for dir in [
        &paths.known_nodes,
        &paths.known_certificates,
        &paths.known_metadata,
        &paths.seed_nodes,
        &paths.seed_certificates,
        &paths.seed_metadata,
    ] {
        assert_eq!(mode_of(dir), 0o755, "wrong mode on {}", dir.display());
    }
}
