//! Session sizing loaded from an optional TOML file.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// How many items each session draws from each source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizConfig {
    /// Items drawn from the static bank by the weighted sampler.
    pub bank_draws: usize,
    /// Items minted by the template generator.
    pub template_draws: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_draws: 15,
            template_draws: 5,
        }
    }
}

impl QuizConfig {
    /// Total session length.
    #[must_use]
    pub fn session_len(&self) -> usize {
        self.bank_draws + self.template_draws
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys, and
    /// `ConfigError::ZeroCount` if either count is zero.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read, plus the
    /// errors of [`QuizConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::ZeroCount` naming the first zero count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bank_draws == 0 {
            return Err(ConfigError::ZeroCount { field: "bank_draws" });
        }
        if self.template_draws == 0 {
            return Err(ConfigError::ZeroCount {
                field: "template_draws",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_compose_a_twenty_item_session() {
        let config = QuizConfig::default();
        assert_eq!(config.bank_draws, 15);
        assert_eq!(config.template_draws, 5);
        assert_eq!(config.session_len(), 20);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = QuizConfig::from_toml_str("bank_draws = 10\n").unwrap();
        assert_eq!(config.bank_draws, 10);
        assert_eq!(config.template_draws, 5);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let err = QuizConfig::from_toml_str("template_draws = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCount { field: "template_draws" }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = QuizConfig::from_toml_str("bank_draw = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bank_draws = 12\ntemplate_draws = 3").unwrap();

        let config = QuizConfig::load(file.path()).unwrap();
        assert_eq!(config.session_len(), 15);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = QuizConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
