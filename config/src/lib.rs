//! Load configuration from XDG `config.toml` and project `.env`, then apply to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! The gateway credential (`ANTHROPIC_API_KEY` by default) and the `PITCH_*` settings are
//! usually supplied this way, so `pitch serve` can start without exporting anything.
//!
//! With feature `tracing-init`, [`tracing_init::init`] installs the subscriber used by the CLI.

mod dotenv;
#[cfg(feature = "tracing-init")]
pub mod tracing_init;
mod xdg_toml;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use xdg_toml::config_path;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    Dotenv(String),
}

/// Merges the two maps for keys not present in the process environment: `.env` wins over XDG.
fn resolve(
    dotenv_map: &HashMap<String, String>,
    xdg_map: &HashMap<String, String>,
    is_set: impl Fn(&str) -> bool,
) -> Vec<(String, String)> {
    let keys: HashSet<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    let mut out: Vec<(String, String)> = keys
        .into_iter()
        .filter(|k| !is_set(k))
        .filter_map(|k| {
            dotenv_map
                .get(k)
                .or_else(|| xdg_map.get(k))
                .map(|v| (k.clone(), v.clone()))
        })
        .collect();
    out.sort();
    out
}

/// Loads config from XDG `config.toml` and optional project `.env`, then sets environment
/// variables only for keys that are **not** already set (so existing env has highest priority).
///
/// * `app_name`: `"pitch"` for the CLI and proxy; selects `~/.config/<app_name>/config.toml`.
/// * `override_dir`: if `Some`, look for `.env` in this directory instead of the current one.
///
/// Returns the keys that were applied, sorted. Values are never logged since they may be secrets.
pub fn load_and_apply(
    app_name: &str,
    override_dir: Option<&Path>,
) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir)?;

    let pairs = resolve(&dotenv_map, &xdg_map, |k| std::env::var_os(k).is_some());
    let mut applied = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        std::env::set_var(&key, value);
        applied.push(key);
    }
    Ok(applied)
}

/// Directory holding `config.toml` for `app_name`, for display in `--help` style output.
pub fn config_dir(app_name: &str) -> Option<PathBuf> {
    config_path(app_name)
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Serialises tests that touch process-wide environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn restore_var(key: &str, prev: Option<String>) {
        match prev {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    fn write_xdg(root: &Path, body: &str) {
        let app_dir = root.join("pitch");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), body).unwrap();
    }

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolve_prefers_dotenv_then_xdg_and_skips_set_keys() {
        let dotenv_map = map(&[("A", "dotenv"), ("B", "dotenv")]);
        let xdg_map = map(&[("A", "xdg"), ("C", "xdg"), ("D", "xdg")]);
        let got = resolve(&dotenv_map, &xdg_map, |k| k == "D");
        assert_eq!(
            got,
            vec![
                ("A".to_string(), "dotenv".to_string()),
                ("B".to_string(), "dotenv".to_string()),
                ("C".to_string(), "xdg".to_string()),
            ]
        );
    }

    #[test]
    fn existing_env_wins() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dotenv_dir.path().join(".env"),
            "PITCH_CONFIG_TEST_EXISTING=from_dotenv\n",
        )
        .unwrap();
        env::set_var("PITCH_CONFIG_TEST_EXISTING", "from_env");
        let applied = load_and_apply("pitch-config-nonexistent-app", Some(dotenv_dir.path())).unwrap();
        assert_eq!(
            env::var("PITCH_CONFIG_TEST_EXISTING").as_deref(),
            Ok("from_env")
        );
        assert!(!applied.contains(&"PITCH_CONFIG_TEST_EXISTING".to_string()));
        env::remove_var("PITCH_CONFIG_TEST_EXISTING");
    }

    #[test]
    fn load_and_apply_no_config_ok() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let empty = tempfile::tempdir().unwrap();
        let r = load_and_apply("pitch-config-nonexistent-app", Some(empty.path()));
        assert_eq!(r.unwrap(), Vec::<String>::new());
    }

    #[test]
    fn dotenv_overrides_xdg() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        write_xdg(xdg_dir.path(), "[env]\nPITCH_CONFIG_TEST_PRIORITY = \"from_xdg\"\n");

        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dotenv_dir.path().join(".env"),
            "PITCH_CONFIG_TEST_PRIORITY=from_dotenv\n",
        )
        .unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        env::remove_var("PITCH_CONFIG_TEST_PRIORITY");

        let result = load_and_apply("pitch", Some(dotenv_dir.path()));
        let val = env::var("PITCH_CONFIG_TEST_PRIORITY").ok();
        env::remove_var("PITCH_CONFIG_TEST_PRIORITY");
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert!(result.is_ok());
        assert_eq!(val.as_deref(), Some("from_dotenv"));
    }

    #[test]
    fn xdg_applied_when_no_dotenv() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        write_xdg(xdg_dir.path(), "[env]\nPITCH_CONFIG_TEST_XDG_ONLY = \"from_xdg\"\n");
        let empty_dir = tempfile::tempdir().unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        env::remove_var("PITCH_CONFIG_TEST_XDG_ONLY");

        let applied = load_and_apply("pitch", Some(empty_dir.path()));
        let val = env::var("PITCH_CONFIG_TEST_XDG_ONLY").ok();
        env::remove_var("PITCH_CONFIG_TEST_XDG_ONLY");
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert_eq!(applied.unwrap(), vec!["PITCH_CONFIG_TEST_XDG_ONLY".to_string()]);
        assert_eq!(val.as_deref(), Some("from_xdg"));
    }

    #[test]
    fn invalid_xdg_toml_fails_with_xdg_parse_error() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        write_xdg(xdg_dir.path(), "invalid [[[\n");

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        let result = load_and_apply("pitch", None);
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }

    #[test]
    fn config_dir_ends_with_app_name() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        let dir = config_dir("pitch");
        restore_var("XDG_CONFIG_HOME", prev_xdg);
        assert_eq!(dir, Some(xdg_dir.path().join("pitch")));
    }
}
