//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reframe/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Loading runs before the file logger exists (the log file path is itself
//! a setting), so messages are collected as `ConfigNote`s and replayed by
//! `main` once logging is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::thought::DEFAULT_DISTORTIONS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReframeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FormConfig {
    pub distortions: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "reframe.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub distortions: Vec<String>,
    pub notes: Vec<ConfigNote>,
}

// ============================================================================
// Deferred Log Messages
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNote {
    pub level: Level,
    pub message: String,
}

impl ConfigNote {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Emit through the `log` facade.
    pub fn log(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

/// A parsed config file plus what happened while finding it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ReframeConfig,
    pub notes: Vec<ConfigNote>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.reframe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reframe").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise `~/.reframe/config.toml`.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let mut notes = Vec::new();
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                notes.push(ConfigNote::new(
                    Level::Warn,
                    "Could not determine home directory, using default config",
                ));
                return Ok(LoadedConfig {
                    config: ReframeConfig::default(),
                    notes,
                });
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        notes.push(ConfigNote::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        ));
        if let Err(e) = generate_default_config(&path) {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Failed to write default config: {e}"),
            ));
        }
        return Ok(LoadedConfig {
            config: ReframeConfig::default(),
            notes,
        });
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    notes.push(ConfigNote::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notes.push(ConfigNote::new(Level::Debug, format!("Config: {config:?}")));
    Ok(LoadedConfig { config, notes })
}

pub fn parse_config(contents: &str) -> Result<ReframeConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Reframe Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "reframe.log"           # Or set REFRAME_LOG_FILE env var

# [form]
# distortions = [
#     "All or Nothing Thinking",
#     "Catastrophizing",
#     "Mind Reading",
# ]
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ReframeConfig, cli_log_level: Option<LevelFilter>) -> ResolvedConfig {
    resolve_with_env(config, cli_log_level, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &ReframeConfig,
    cli_log_level: Option<LevelFilter>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut notes = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .or_else(|| {
            env("REFRAME_LOG_LEVEL")
                .and_then(|s| parse_level("REFRAME_LOG_LEVEL", &s, &mut notes))
        })
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|s| parse_level("general.log_level", s, &mut notes))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = env("REFRAME_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let distortions = config
        .form
        .distortions
        .clone()
        .unwrap_or_else(|| DEFAULT_DISTORTIONS.iter().map(|s| s.to_string()).collect());

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        distortions,
        notes,
    }
}

fn parse_level(source: &str, value: &str, notes: &mut Vec<ConfigNote>) -> Option<LevelFilter> {
    match LevelFilter::from_str(value.trim()) {
        Ok(level) => Some(level),
        Err(_) => {
            notes.push(ConfigNote::new(
                Level::Warn,
                format!("Ignoring unknown log level {value:?} from {source}"),
            ));
            None
        }
    }
}

/// clap value parser for `--log-level`.
pub fn parse_level_filter(value: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(value.trim()).map_err(|_| {
        format!("unknown log level {value:?} (expected off, error, warn, info, debug or trace)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ReframeConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.form.distortions.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ReframeConfig::default(), None, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.distortions.len(), DEFAULT_DISTORTIONS.len());
        assert_eq!(resolved.distortions[1], "Catastrophizing");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ReframeConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                log_file: Some("/tmp/journal.log".to_string()),
            },
            form: FormConfig {
                distortions: Some(vec!["Labeling".to_string()]),
            },
        };
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/journal.log"));
        assert_eq!(resolved.distortions, vec!["Labeling".to_string()]);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = ReframeConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                log_file: Some("from-config.log".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "REFRAME_LOG_LEVEL" => Some("trace".to_string()),
            "REFRAME_LOG_FILE" => Some("from-env.log".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, None, env);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.log_file, PathBuf::from("from-env.log"));

        let resolved = resolve_with_env(&config, Some(LevelFilter::Error), env);
        assert_eq!(resolved.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_bad_level_falls_through() {
        let config = ReframeConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.notes,
            vec![ConfigNote::new(
                Level::Warn,
                "Ignoring unknown log level \"loud\" from general.log_level"
            )]
        );
    }

    #[test]
    fn test_bad_env_level_warns_and_falls_back_to_config() {
        let config = ReframeConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "REFRAME_LOG_LEVEL").then(|| "chatty".to_string());

        let resolved = resolve_with_env(&config, None, env);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.notes.len(), 1);
        assert_eq!(resolved.notes[0].level, Level::Warn);
        assert!(resolved.notes[0].message.contains("REFRAME_LOG_LEVEL"));
    }

    #[test]
    fn test_good_levels_leave_no_notes() {
        let resolved = resolve_with_env(&ReframeConfig::default(), None, no_env);
        assert!(resolved.notes.is_empty());
    }

    #[test]
    fn test_loading_explicit_file_records_notes() {
        let path = std::env::temp_dir().join(format!("reframe-config-{}.toml", std::process::id()));
        fs::write(&path, "[form]\ndistortions = [\"Labeling\"]\n").unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            loaded.config.form.distortions,
            Some(vec!["Labeling".to_string()])
        );
        assert_eq!(loaded.notes[0].level, Level::Info);
        assert!(loaded.notes[0].message.starts_with("Loaded config from"));
    }

    #[test]
    fn test_empty_distortion_list_is_honored() {
        let config = parse_config("[form]\ndistortions = []\n").unwrap();
        let resolved = resolve_with_env(&config, None, no_env);
        assert!(resolved.distortions.is_empty());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config(
            r#"
[general]
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert!(config.general.log_file.is_none());
        assert!(config.form.distortions.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nlog_level = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = load_config(Some(Path::new("/definitely/not/here/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_level_filter() {
        assert_eq!(parse_level_filter("DEBUG"), Ok(LevelFilter::Debug));
        assert!(parse_level_filter("chatty").is_err());
    }
}
