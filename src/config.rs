use crate::models::WeeklyBasis;
use std::{env, path::PathBuf, str::FromStr};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WEEKLY_BASIS must be 'created' or 'completion', got '{0}'")]
    InvalidWeeklyBasis(String),
}

impl FromStr for WeeklyBasis {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "created" => Ok(Self::Created),
            "completion" => Ok(Self::Completion),
            _ => Err(ConfigError::InvalidWeeklyBasis(value.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub weekly_basis: WeeklyBasis,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_dir = lookup("APP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let weekly_basis = match lookup("WEEKLY_BASIS") {
            Some(value) => value.parse()?,
            None => WeeklyBasis::default(),
        };

        Ok(Self {
            port,
            data_dir,
            weekly_basis,
        })
    }
}
