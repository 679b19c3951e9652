use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampusConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_docs_path")]
    pub docs: PathBuf,
}

fn default_port() -> u16 {
    4000
}

fn default_docs_path() -> PathBuf {
    PathBuf::from("docs")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data")
}

fn default_id_length() -> usize {
    10
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            docs: default_docs_path(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            id_length: default_id_length(),
        }
    }
}

impl CampusConfig {
    /// Loads `campus.yml`; a missing file is not an error, defaults apply.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}
