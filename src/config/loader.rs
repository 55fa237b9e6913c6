//! Configuration file loading with precedence handling.
//!
//! Precedence (lowest to highest): hardcoded defaults, the TOML config
//! file, `UDEX_*` environment variables, CLI flags. A missing config
//! file is not an error; a file that exists but cannot be read or parsed
//! is.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default users endpoint when nothing overrides it.
const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Default posts endpoint; the selected user's id is appended as a
/// `userId` query parameter at fetch time.
const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read a config file that exists.
    #[error("failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/udex/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Users endpoint URL.
    #[serde(default)]
    pub users_url: Option<String>,

    /// Posts endpoint URL (without the `userId` query parameter).
    #[serde(default)]
    pub posts_url: Option<String>,

    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Event-loop poll timeout in milliseconds. Fetch completions are
    /// drained on this tick.
    #[serde(default)]
    pub tick_ms: Option<u64>,
}

/// Resolved configuration after applying the precedence chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Users endpoint URL.
    pub users_url: String,
    /// Posts endpoint URL.
    pub posts_url: String,
    /// Path to the tracing log file.
    pub log_file_path: PathBuf,
    /// Event-loop poll timeout in milliseconds.
    pub tick_ms: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            posts_url: DEFAULT_POSTS_URL.to_string(),
            log_file_path: default_log_path(),
            tick_ms: 250,
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/udex/udex.log` on Unix-like systems, the platform
/// equivalent elsewhere. Falls back to the current directory when no
/// state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("udex").join("udex.log")
    } else {
        PathBuf::from("udex.log")
    }
}

/// Resolve the default config file path.
///
/// `~/.config/udex/config.toml` on Unix, the platform equivalent
/// elsewhere. `None` when no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("udex").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file does not exist; that is not an error,
/// defaults apply.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Locate and load the configuration file.
///
/// Path precedence (highest first): the explicit `config_path` argument
/// (CLI `--config`), the `UDEX_CONFIG` environment variable, the default
/// path.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("UDEX_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a config file into the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        users_url: config.users_url.unwrap_or(defaults.users_url),
        posts_url: config.posts_url.unwrap_or(defaults.posts_url),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        tick_ms: config.tick_ms.unwrap_or(defaults.tick_ms),
    }
}

/// Apply `UDEX_USERS_URL` / `UDEX_POSTS_URL` environment overrides.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("UDEX_USERS_URL") {
        config.users_url = url;
    }
    if let Ok(url) = std::env::var("UDEX_POSTS_URL") {
        config.posts_url = url;
    }
    config
}

/// Apply CLI flag overrides. CLI flags have the highest precedence; only
/// flags the user actually passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    users_url: Option<String>,
    posts_url: Option<String>,
    tick_ms: Option<u64>,
) -> ResolvedConfig {
    if let Some(url) = users_url {
        config.users_url = url;
    }
    if let Some(url) = posts_url {
        config.posts_url = url;
    }
    if let Some(tick) = tick_ms {
        config.tick_ms = tick;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("udex_config_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_point_at_the_public_endpoints() {
        let config = ResolvedConfig::default();
        assert_eq!(config.users_url, DEFAULT_USERS_URL);
        assert_eq!(config.posts_url, DEFAULT_POSTS_URL);
        assert_eq!(config.tick_ms, 250);
    }

    #[test]
    fn default_log_path_ends_with_udex_log() {
        let path = default_log_path();
        assert!(path.to_string_lossy().ends_with("udex.log"));
    }

    #[test]
    fn missing_config_file_is_not_an_error() {
        let result = load_config_file("/nonexistent/udex/config.toml");
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn config_file_values_override_defaults() {
        let path = temp_config(
            "override.toml",
            r#"
users_url = "http://localhost:9000/users"
tick_ms = 100
"#,
        );
        let file = load_config_file(&path).unwrap();
        let resolved = merge_config(file);
        assert_eq!(resolved.users_url, "http://localhost:9000/users");
        assert_eq!(resolved.tick_ms, 100);
        // Unset fields keep their defaults.
        assert_eq!(resolved.posts_url, DEFAULT_POSTS_URL);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let path = temp_config("broken.toml", "users_url = [not toml");
        let result = load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let path = temp_config("unknown.toml", "no_such_key = true");
        let result = load_config_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn cli_overrides_win_over_everything() {
        let base = merge_config(Some(ConfigFile {
            users_url: Some("http://from-file/users".to_string()),
            posts_url: None,
            log_file_path: None,
            tick_ms: Some(100),
        }));
        let resolved = apply_cli_overrides(
            base,
            Some("http://from-cli/users".to_string()),
            None,
            Some(50),
        );
        assert_eq!(resolved.users_url, "http://from-cli/users");
        assert_eq!(resolved.posts_url, DEFAULT_POSTS_URL);
        assert_eq!(resolved.tick_ms, 50);
    }

    #[test]
    fn cli_overrides_leave_unset_flags_alone() {
        let resolved = apply_cli_overrides(ResolvedConfig::default(), None, None, None);
        assert_eq!(resolved, ResolvedConfig::default());
    }
}
