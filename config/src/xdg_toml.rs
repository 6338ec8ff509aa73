//! Load the `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.
//!
//! The base directory follows the XDG layout on every platform (`~/.config` when
//! `XDG_CONFIG_HOME` is unset), as resolved by `cross_xdg`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::LoadError;

/// Path of `<config home>/<app_name>/config.toml`, whether or not it exists.
pub fn config_path(app_name: &str) -> Result<PathBuf, LoadError> {
    let base = cross_xdg::BaseDirs::new().map_err(|e| LoadError::XdgPath(e.to_string()))?;
    Ok(base.config_home().join(app_name).join("config.toml"))
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Returns pairs from the `[env]` section. Missing file or section yields an empty map.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let path = config_path(app_name)?;
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}
