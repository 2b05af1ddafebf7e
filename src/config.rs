use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default recorder service address, matching the backend's own default bind.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the recorder service, e.g. "http://localhost:8080".
    pub backend_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_URL.into(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/audio-console/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("audio-console");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if file doesn't exist or is invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.backend_base_url, "http://localhost:8080");
    }

    #[test]
    fn empty_object_fills_in_nothing() {
        // Missing fields are an invalid config, not a partial one.
        let parsed: Config = serde_json::from_str("{}").unwrap_or_default();
        assert_eq!(parsed.backend_base_url, DEFAULT_BACKEND_URL);
    }
}
