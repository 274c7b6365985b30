use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::{debug, warn};

use crate::{env_subst::substitute_env, schema::HeraldConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &["herald.toml", "herald.yaml", "herald.yml", "herald.json"];

/// Override for the config directory, set via `set_config_dir()`.
static CONFIG_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Set a custom config directory. When set, config discovery only looks in
/// this directory (project-local and user-global paths are skipped).
/// Can be called multiple times (e.g. in tests) — each call replaces the
/// previous override.
pub fn set_config_dir(path: PathBuf) {
    *CONFIG_DIR_OVERRIDE.lock().unwrap() = Some(path);
}

/// Clear the config directory override, restoring default discovery.
pub fn clear_config_dir() {
    *CONFIG_DIR_OVERRIDE.lock().unwrap() = None;
}

fn config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE.lock().unwrap().clone()
}

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<HeraldConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./herald.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/herald/herald.{toml,yaml,yml,json}` (user-global)
///
/// Returns `HeraldConfig::default()` — every webhook kind disabled — when
/// no config file is found or the file fails to parse. The plugin never
/// writes config; the file is owned by the operator.
pub fn discover_and_load() -> HeraldConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, webhooks disabled");
    }
    HeraldConfig::default()
}

/// Find the first config file in standard locations.
///
/// When a config dir override is set, only that directory is searched —
/// project-local and user-global paths are skipped for isolation.
fn find_config_file() -> Option<PathBuf> {
    if let Some(dir) = config_dir_override() {
        for name in CONFIG_FILENAMES {
            let p = dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
        // Override is set — don't fall through to other locations.
        return None;
    }

    // Project-local
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    // User-global: ~/.config/herald/
    if let Some(dir) = home_dir().map(|h| h.join(".config").join("herald")) {
        for name in CONFIG_FILENAMES {
            let p = dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Returns the config directory: override, or `~/.config/herald/` on all platforms.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = config_dir_override() {
        return Some(dir);
    }
    home_dir().map(|h| h.join(".config").join("herald"))
}

fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<HeraldConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[cfg(test)]
// set_var is unsafe in edition 2024; fine in single-purpose test setup.
#[allow(unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn loads_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herald.toml");
        std::fs::write(
            &path,
            r#"
[webhooks]
message = "https://hooks.example.com/msg"
user = "svc"
password = "pw"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.webhooks.message.as_deref(),
            Some("https://hooks.example.com/msg")
        );
        assert_eq!(config.webhooks.basic_auth(), Some(("svc", "pw")));
        assert_eq!(config.webhooks.online, None);
    }

    #[test]
    fn loads_json_and_yaml_config() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("herald.json");
        std::fs::write(&json, r#"{"webhooks": {"online": "https://h.example/on"}}"#).unwrap();
        let config = load_config(&json).unwrap();
        assert_eq!(config.webhooks.online.as_deref(), Some("https://h.example/on"));

        let yaml = dir.path().join("herald.yaml");
        std::fs::write(&yaml, "webhooks:\n  offline: https://h.example/off\n").unwrap();
        let config = load_config(&yaml).unwrap();
        assert_eq!(config.webhooks.offline.as_deref(), Some("https://h.example/off"));
    }

    #[test]
    fn substitutes_env_in_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("herald.toml");
        std::fs::write(&path, "[webhooks]\npassword = \"${HERALD_TEST_PW}\"\n").unwrap();

        unsafe { std::env::set_var("HERALD_TEST_PW", "s3cret") };
        let config = load_config(&path).unwrap();
        unsafe { std::env::remove_var("HERALD_TEST_PW") };

        assert_eq!(config.webhooks.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn missing_file_is_an_error_but_discovery_defaults() {
        assert!(load_config(Path::new("/nonexistent/herald.toml")).is_err());

        let dir = tempfile::tempdir().unwrap();
        set_config_dir(dir.path().to_path_buf());
        let config = discover_and_load();
        clear_config_dir();
        assert!(config.webhooks.message.is_none());
    }
}
