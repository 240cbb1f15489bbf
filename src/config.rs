//! Relay configuration.
//!
//! Settings come from an optional JSON file and are then overridden by
//! `PROCURATOR_*` environment variables.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

use crate::process::adapters::DEFAULT_PM2_BINARY;
use crate::render::ReplyLimits;

/// Environment variable overriding [`RelayConfig::prefix`].
pub const PREFIX_ENV: &str = "PROCURATOR_PREFIX";
/// Environment variable overriding [`RelayConfig::name`].
pub const NAME_ENV: &str = "PROCURATOR_NAME";
/// Environment variable overriding [`RelayConfig::pm2_binary`].
pub const PM2_BINARY_ENV: &str = "PROCURATOR_PM2_BINARY";

/// Default command prefix.
pub const DEFAULT_PREFIX: &str = ";";
/// Default relay name.
pub const DEFAULT_NAME: &str = "procurator";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {reason}")]
    Read {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        reason: String,
    },

    /// The configuration file is not valid JSON for [`RelayConfig`].
    #[error("failed to parse config file {path}: {reason}")]
    Parse {
        /// Path of the file.
        path: String,
        /// Underlying parse error.
        reason: String,
    },

    /// The command prefix is empty or contains whitespace.
    #[error("command prefix must be non-empty and contain no whitespace, got {0:?}")]
    InvalidPrefix(String),

    /// The `pm2` program name is empty.
    #[error("pm2 binary must not be empty")]
    EmptyPm2Binary,
}

/// Runtime settings for the relay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Display name of the relay.
    pub name: String,
    /// Prefix marking a chat message as a command.
    pub prefix: String,
    /// Program used to reach `pm2`.
    pub pm2_binary: String,
    /// Size limits enforced on outgoing replies.
    pub reply_limits: ReplyLimits,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            prefix: DEFAULT_PREFIX.to_owned(),
            pm2_binary: DEFAULT_PM2_BINARY.to_owned(),
            reply_limits: ReplyLimits::default(),
        }
    }
}

impl RelayConfig {
    /// Loads configuration from `path` (or defaults), applies process
    /// environment overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or the
    /// resulting settings are invalid.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let base = path.map_or_else(|| Ok(Self::default()), Self::from_file)?;
        let config = base.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_error = |reason: String| ConfigError::Read {
            path: path.to_string(),
            reason,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| read_error("path must include a file name".to_owned()))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| read_error(err.to_string()))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|err| read_error(err.to_string()))?;

        serde_json::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }

    /// Replaces settings for which `lookup` returns a value.
    #[must_use]
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(PREFIX_ENV) {
            self.prefix = prefix;
        }
        if let Some(name) = lookup(NAME_ENV) {
            self.name = name;
        }
        if let Some(binary) = lookup(PM2_BINARY_ENV) {
            self.pm2_binary = binary;
        }
        self
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrefix`] or
    /// [`ConfigError::EmptyPm2Binary`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() || self.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidPrefix(self.prefix.clone()));
        }
        if self.pm2_binary.trim().is_empty() {
            return Err(ConfigError::EmptyPm2Binary);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::collections::HashMap;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> Utf8PathBuf {
        let path = dir.path().join("procurator.json");
        std::fs::write(&path, contents).expect("config file should be written");
        Utf8PathBuf::from_path_buf(path).expect("temp path should be UTF-8")
    }

    #[rstest]
    fn defaults_are_valid() {
        let config = RelayConfig::default();

        assert_eq!(config.prefix, ";");
        assert_eq!(config.pm2_binary, "pm2");
        assert_eq!(config.validate(), Ok(()));
    }

    #[rstest]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = write_config(
            &dir,
            r#"{"prefix": "!", "reply_limits": {"body": 2000}, "owner": "ignored"}"#,
        );

        let config = RelayConfig::from_file(&path).expect("config should load");

        assert_eq!(config.prefix, "!");
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.reply_limits.body, 2000);
        assert_eq!(config.reply_limits.title, 256);
    }

    #[rstest]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = write_config(&dir, "{ prefix: ");

        let error = RelayConfig::from_file(&path).expect_err("invalid JSON should fail");

        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json"))
            .expect("temp path should be UTF-8");

        let error = RelayConfig::from_file(&path).expect_err("missing file should fail");

        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[rstest]
    fn environment_overrides_take_precedence() {
        let env = HashMap::from([
            (PREFIX_ENV, "pm2!".to_owned()),
            (PM2_BINARY_ENV, "/opt/pm2/bin/pm2".to_owned()),
        ]);

        let config = RelayConfig::default().apply_env_overrides(|key| env.get(key).cloned());

        assert_eq!(config.prefix, "pm2!");
        assert_eq!(config.pm2_binary, "/opt/pm2/bin/pm2");
        assert_eq!(config.name, DEFAULT_NAME);
    }

    #[rstest]
    #[case("")]
    #[case("! ")]
    #[case("pm 2")]
    fn invalid_prefixes_are_rejected(#[case] prefix: &str) {
        let config = RelayConfig {
            prefix: prefix.to_owned(),
            ..RelayConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPrefix(prefix.to_owned()))
        );
    }

    #[rstest]
    fn blank_pm2_binary_is_rejected() {
        let config = RelayConfig {
            pm2_binary: "  ".to_owned(),
            ..RelayConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::EmptyPm2Binary));
    }
}
