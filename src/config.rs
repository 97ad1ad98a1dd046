//! Configuration file support for backup-fs.
//!
//! Provides YAML-based configuration through `backup-fs.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "backup-fs.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Storage root directory for the local provider.
    pub root: Option<PathBuf>,
    pub follow_symlinks: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective storage settings after merging flags, config and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    pub root: PathBuf,
    pub follow_symlinks: bool,
}

impl StorageSettings {
    /// Command-line values win over the config file, which wins over defaults.
    pub fn resolve(
        cli_root: Option<PathBuf>,
        cli_follow_symlinks: bool,
        config: Option<&ConfigFile>,
    ) -> Self {
        let root = cli_root
            .or_else(|| config.and_then(|c| c.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));
        let follow_symlinks = cli_follow_symlinks
            || config.and_then(|c| c.follow_symlinks).unwrap_or(false);

        Self {
            root,
            follow_symlinks,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref root) = config.root {
        if root.as_os_str().is_empty() {
            bail!(
                "Invalid config: root must not be empty.\n\n\
                 💡 Hint: Set 'root' to the directory backups are stored in (e.g., \"/var/backups\")."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
root: /var/backups
follow_symlinks: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.root, Some(PathBuf::from("/var/backups")));
        assert_eq!(config.follow_symlinks, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "root: ./store\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().root, Some(PathBuf::from("./store")));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_root_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "root: \"\"\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("root must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
root: /var/backups
retention_days: 7
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("retention_days"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = StorageSettings::resolve(None, false, None);
        assert_eq!(settings.root, PathBuf::from("."));
        assert!(!settings.follow_symlinks);
    }

    #[test]
    fn test_settings_config_used_when_no_flags() {
        let config = ConfigFile {
            root: Some(PathBuf::from("/var/backups")),
            follow_symlinks: Some(true),
            ..Default::default()
        };

        let settings = StorageSettings::resolve(None, false, Some(&config));
        assert_eq!(settings.root, PathBuf::from("/var/backups"));
        assert!(settings.follow_symlinks);
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            root: Some(PathBuf::from("/var/backups")),
            ..Default::default()
        };

        let settings =
            StorageSettings::resolve(Some(PathBuf::from("/tmp/store")), true, Some(&config));
        assert_eq!(settings.root, PathBuf::from("/tmp/store"));
        assert!(settings.follow_symlinks);
    }
}
