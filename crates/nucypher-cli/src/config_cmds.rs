use anyhow::Result;
use std::path::PathBuf;

use nucypher_config::{
    ConfigPaths, ValidationMode, check_config_tree, check_runtime, initialize_configuration,
    validate_ini_file,
};

fn resolve_paths(config_root: Option<PathBuf>) -> ConfigPaths {
    match config_root {
        Some(root) => ConfigPaths::under(root),
        None => ConfigPaths::default_paths(),
    }
}

pub fn run_init(config_root: Option<PathBuf>) -> Result<()> {
    check_runtime()?;
    let paths = resolve_paths(config_root);
    let root = initialize_configuration(&paths)?;
    println!("Configuration created at {}", root.display());
    Ok(())
}

pub fn run_validate(path: Option<PathBuf>, strict: bool) -> Result<()> {
    let mode = if strict {
        ValidationMode::FailFast
    } else {
        ValidationMode::Collect
    };
    let path = path.unwrap_or_else(|| ConfigPaths::default_paths().ini_path);

    let report = validate_ini_file(&path, mode)?;
    if report.is_valid() {
        println!("{} is valid", path.display());
        return Ok(());
    }
    for name in &report.missing {
        eprintln!("missing or invalid: {name}");
    }
    anyhow::bail!("{} failed validation", path.display());
}

pub fn run_status(config_root: Option<PathBuf>) -> Result<()> {
    check_runtime()?;
    let paths = resolve_paths(config_root);
    check_config_tree(&paths)?;
    println!(
        "Configuration tree present at {}",
        paths.config_root.display()
    );
    Ok(())
}
