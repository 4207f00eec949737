use crate::utils::errors::{CertCliError, Result};
use std::path::{Path, PathBuf};

pub struct CertCliPaths;
const PROGRAM_NAME: &str = "coursecity-cert";

impl CertCliPaths {
    /// Get the config directory: ~/.config/coursecity-cert/
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| CertCliError::Config("Cannot determine config directory".to_string()))
    }

    /// Get the default config file: ~/.config/coursecity-cert/config.yaml
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Expand a leading `~` to the user's home directory
    pub fn expand_home(path: &Path) -> Result<PathBuf> {
        match path.strip_prefix("~") {
            Ok(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .ok_or_else(|| {
                    CertCliError::Config("Cannot determine home directory".to_string())
                }),
            Err(_) => Ok(path.to_path_buf()),
        }
    }
}
