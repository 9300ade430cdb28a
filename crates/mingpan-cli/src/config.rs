//! Locating and reading the theme configuration file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use mingpan::{MingpanError, config::AppConfig};

/// Relative path checked before the per-user configuration directory.
const LOCAL_CONFIG: &str = "mingpan/config.toml";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("configuration file `{0}` is not valid TOML: {1}")]
    Parse(PathBuf, String),

    #[error("configuration file `{0}` does not exist")]
    MissingFile(PathBuf),
}

impl From<ConfigFileError> for MingpanError {
    fn from(err: ConfigFileError) -> Self {
        let kind = match err {
            ConfigFileError::MissingFile(_) => io::ErrorKind::NotFound,
            ConfigFileError::Parse(..) => io::ErrorKind::InvalidData,
        };
        MingpanError::Io(io::Error::new(kind, err.to_string()))
    }
}

/// Loads the application configuration.
///
/// An explicit path must exist. Without one, `mingpan/config.toml` under the
/// working directory wins over `config.toml` in the user's configuration
/// directory, and the built-in defaults apply when neither is present.
///
/// # Errors
///
/// Fails when the chosen file is missing, unreadable or not valid TOML.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, MingpanError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:? = path; "Using configuration from command line");
        return read_config(path);
    }

    for candidate in search_paths() {
        if candidate.is_file() {
            info!(path:? = candidate; "Using configuration file");
            return read_config(&candidate);
        }
        debug!(path:? = candidate; "No configuration file");
    }

    debug!("Falling back to the default theme");
    Ok(AppConfig::default())
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "mingpan", "mingpan") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("No home directory, skipping user configuration"),
    }
    paths
}

fn read_config(path: &Path) -> Result<AppConfig, MingpanError> {
    if !path.exists() {
        return Err(ConfigFileError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)
        .map_err(|err| ConfigFileError::Parse(path.to_path_buf(), err.message().to_string()))?;
    Ok(config)
}
