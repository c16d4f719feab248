use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const CONFIG_PATH_ENV_VAR: &str = "ALMANAC_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("almanac").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".almanac.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub today_char: Option<char>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: 500,
            today_char: Some('*'),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn load(path: &Path) -> io::Result<Config> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Load the config from `path` if given, otherwise from the first existing
/// candidate location, otherwise fall back to built-in defaults.
pub fn load_suitable_config(path: Option<&Path>) -> io::Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.is_file() {
            log::info!("Using config file '{}'", location.display());
            return Config::load(&location);
        }
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(500));
        assert_eq!(config.today_char, Some('*'));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tick_rate_ms, Config::default().tick_rate_ms);
        assert_eq!(config.today_char, Config::default().today_char);
    }

    #[test]
    fn fields_can_be_overridden() {
        let config: Config = toml::from_str("tick_rate_ms = 250\ntoday_char = \"#\"").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.today_char, Some('#'));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("frobnicate = true").is_err());
    }
}
