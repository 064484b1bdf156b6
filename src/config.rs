use crate::error::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_file = match env::var("LEAGUE_TRACKER_DATA") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::default_data_path()?,
        };

        Ok(Config { data_file })
    }

    fn default_data_path() -> Result<PathBuf, AppError> {
        let data_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".league_tracker");

        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        Ok(data_dir.join("match_data.txt"))
    }
}
