//! Deployment configuration: webhook destinations and credentials.
//!
//! Config files are discovered as `herald.{toml,yaml,yml,json}`, first
//! project-local and then under `~/.config/herald/`, with `${ENV_VAR}`
//! substitution applied before parsing. A missing file yields the default
//! config (every webhook kind disabled).

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{clear_config_dir, discover_and_load, load_config, set_config_dir},
    schema::{ConfigError, HeraldConfig, WebhooksConfig},
};
