//! Configuration file management for pantry.
//!
//! Provides a TOML-based config file at `~/.config/pantry/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use pantry_db::config::DbConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub database: DatabaseSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the pantry config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/pantry` or `~/.config/pantry`.
/// The platform-specific `dirs::config_dir()` is intentionally ignored
/// (it points at `~/Library/Application Support` on macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("pantry");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pantry")
}

/// Return the path to the pantry config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct PantryConfig {
    pub db_config: DbConfig,
}

impl PantryConfig {
    /// Resolve the database URL.
    ///
    /// Priority: `--database-url` flag > `PANTRY_DATABASE_URL` env var >
    /// config file > compile-time default.
    pub fn resolve(cli_url: Option<&str>) -> Result<Self> {
        if let Some(url) = cli_url {
            debug!("database url taken from --database-url flag");
            return Ok(Self {
                db_config: DbConfig::new(url),
            });
        }

        if let Ok(url) = std::env::var("PANTRY_DATABASE_URL") {
            debug!("database url taken from PANTRY_DATABASE_URL");
            return Ok(Self {
                db_config: DbConfig::new(url),
            });
        }

        if config_path().exists() {
            let file = load_config()?;
            debug!(path = %config_path().display(), "database url taken from config file");
            return Ok(Self {
                db_config: DbConfig::new(file.database.url),
            });
        }

        debug!("no config found, using the default database url");
        Ok(Self {
            db_config: DbConfig::new(DbConfig::DEFAULT_URL),
        })
    }
}
