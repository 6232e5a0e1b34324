use crate::errors::{ConfigError, Result};
use log::debug;
use lpscan_esi::{DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_CORP_ID, DEFAULT_REGION_ID};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration manager for lpscan.
///
/// Settings live in `~/.lpscan/config.ini` under the `[esi]` and `[scan]`
/// sections. Environment variables (`LPSCAN_BASE_URL`, `LPSCAN_REGION_ID`,
/// `LPSCAN_CORP_ID`, `LPSCAN_WORKERS`) override the file; built-in defaults
/// apply when neither is set.
#[derive(Debug, Clone)]
pub struct Config {
    config_path: PathBuf,
    data: ini::Ini,
}

impl Config {
    /// Load the config file, creating the directory on first use.
    pub fn new() -> Result<Self> {
        let config_dir = get_config_dir()?;
        let config_path = config_dir.join("config.ini");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::DirectoryCreationFailed(e.to_string()))?;
        }

        let data = if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            ini::Ini::load_from_file(&config_path).map_err(|e| ConfigError::Ini(e.to_string()))?
        } else {
            ini::Ini::new()
        };

        Ok(Config { config_path, data })
    }

    /// Save the configuration to file
    pub fn save(&self) -> Result<()> {
        self.data
            .write_to_file(&self.config_path)
            .map_err(|e| ConfigError::Ini(e.to_string()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a raw configuration value
    pub fn get_value(&self, section: &str, key: &str) -> Option<String> {
        self.data
            .get_from(Some(section), key)
            .map(|s| s.to_string())
    }

    /// Set a raw configuration value
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) {
        self.data.with_section(Some(section)).set(key, value);
    }

    /// ESI base URL
    pub fn base_url(&self) -> String {
        std::env::var("LPSCAN_BASE_URL")
            .ok()
            .or_else(|| self.get_value("esi", "base_url"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Reference market region
    pub fn region_id(&self) -> Result<i64> {
        self.int_setting("LPSCAN_REGION_ID", "scan", "region_id", DEFAULT_REGION_ID)
    }

    /// NPC corporation whose LP store is scanned
    pub fn corp_id(&self) -> Result<i64> {
        self.int_setting("LPSCAN_CORP_ID", "scan", "corp_id", DEFAULT_CORP_ID)
    }

    /// Worker pool size for the fan-out phases
    pub fn workers(&self) -> Result<usize> {
        self.int_setting("LPSCAN_WORKERS", "scan", "workers", DEFAULT_CONCURRENCY)
    }

    fn int_setting<N>(&self, env_var: &str, section: &str, key: &str, default: N) -> Result<N>
    where
        N: FromStr + Copy,
    {
        let raw = std::env::var(env_var)
            .ok()
            .or_else(|| self.get_value(section, key));

        match raw {
            Some(raw) => parse_setting(key, &raw),
            None => Ok(default),
        }
    }
}

/// Parse a numeric setting, reporting the offending key and value.
pub fn parse_setting<N: FromStr>(key: &str, raw: &str) -> Result<N> {
    raw.trim().parse().map_err(|_| {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }
        .into()
    })
}

fn get_config_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".lpscan"))
        .ok_or_else(|| ConfigError::NoHomeDir.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_integers() {
        assert_eq!(parse_setting::<i64>("region_id", "10000002").unwrap(), 10000002);
        assert_eq!(parse_setting::<usize>("workers", " 10 ").unwrap(), 10);
    }

    #[test]
    fn rejects_garbage_values() {
        let err = parse_setting::<i64>("corp_id", "jita").unwrap_err();
        assert!(err.to_string().contains("corp_id"));
        assert!(err.to_string().contains("jita"));
    }
}
