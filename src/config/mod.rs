//! Configuration module.
//!
//! Resolves where to read the activity log, where to write the report, and
//! where the run log goes. Precedence: defaults → config file → env → CLI.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, CONFIG_ENV_VAR, DEFAULT_INPUT, DEFAULT_OUTPUT, LOG_PATH_ENV_VAR,
};
