//! Configuration module for extplan
//!
//! Resolution order:
//! 1. Environment variables (EXTPLAN_*)
//! 2. Config file (`--config` or ./extplan.toml)
//! 3. Built-in defaults (the conventional popup/background/content layout)

mod loader;
mod types;

pub use loader::{
    apply_overrides, default_config_toml, discover, with_env_overrides, ConfigWarning,
    LoadedConfig, CONFIG_FILE_NAME, ENV_OUT_DIR, ENV_VERBOSITY,
};
pub use types::{BuildConfig, Config, OutputConfig, OutputOptions, RollupOptions, Verbosity};
