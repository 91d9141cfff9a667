use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    /// Resolves the platform config directory, falling back to the home
    /// directory and then the current directory.
    pub fn default_base_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spendlog")
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored preferences, or the defaults when none exist yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
