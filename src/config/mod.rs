use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_verbose() -> bool {
    false
}

/// Optional file config for the CLI, merged under command-line flags
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Path to a JSON graph file used instead of the built-in seed graph
    #[serde(default)]
    pub graph: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("routesketch.toml"));
    paths.push(PathBuf::from(".routesketch.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("routesketch").join("config.toml"));
        paths.push(config_dir.join("routesketch.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".routesketch.toml"));
        paths.push(home.join(".config").join("routesketch").join("config.toml"));
    }

    paths
}
