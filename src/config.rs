use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/state.json";
// Typical browser local storage allowance.
const DEFAULT_QUOTA: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// `None` disables the storage quota.
    pub quota: Option<usize>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let quota = match lookup("APP_STORAGE_QUOTA").and_then(|value| value.parse::<usize>().ok()) {
            Some(0) => None,
            Some(bytes) => Some(bytes),
            None => Some(DEFAULT_QUOTA),
        };

        Self {
            port,
            data_path,
            quota,
        }
    }
}
