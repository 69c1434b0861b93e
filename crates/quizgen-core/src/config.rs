//! `quizgen.toml` configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "quizgen.toml";

/// Defaults applied when the corresponding command-line flag is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question bank to load.
    #[serde(default = "default_bank")]
    pub bank: PathBuf,
    /// Metrics file merged and rewritten after every run.
    #[serde(default)]
    pub metrics_file: Option<PathBuf>,
    /// Print explanations after incorrect answers.
    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

fn default_bank() -> PathBuf {
    PathBuf::from("questions.json")
}

fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank: default_bank(),
            metrics_file: None,
            show_explanations: true,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or from `./quizgen.toml` if present.
///
/// An explicit path that does not exist is an error; a missing default file
/// just yields [`QuizConfig::default`].
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => {
            return Err(QuizError::io(
                p,
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            ))
        }
        None => Some(PathBuf::from(CONFIG_FILE_NAME)).filter(|p| p.exists()),
    };

    let Some(config_path) = config_path else {
        return Ok(QuizConfig::default());
    };

    let content =
        std::fs::read_to_string(&config_path).map_err(|e| QuizError::io(&config_path, e))?;
    let mut config = parse_config_str(&content, &config_path)?;
    config.bank = resolve_path(&config.bank);
    config.metrics_file = config.metrics_file.as_deref().map(resolve_path);

    tracing::debug!("loaded config from {}", config_path.display());
    Ok(config)
}

/// Parse a TOML string into a [`QuizConfig`] (useful for testing).
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<QuizConfig> {
    toml::from_str(content)
        .map_err(|e| QuizError::format(source_path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.bank, PathBuf::from("questions.json"));
        assert!(config.metrics_file.is_none());
        assert!(config.show_explanations);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str(
            "metrics_file = \"stats/metrics.json\"\n",
            Path::new("quizgen.toml"),
        )
        .unwrap();
        assert_eq!(config.bank, PathBuf::from("questions.json"));
        assert_eq!(
            config.metrics_file,
            Some(PathBuf::from("stats/metrics.json"))
        );
    }

    #[test]
    fn parse_bad_config() {
        let err = parse_config_str("show_explanations = \"maybe\"", Path::new("q.toml"))
            .unwrap_err();
        assert!(matches!(err, QuizError::Format { .. }));
    }

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZGEN_TEST_VAR", "banks");
        assert_eq!(resolve_env_vars("${_QUIZGEN_TEST_VAR}/q.json"), "banks/q.json");
        assert_eq!(resolve_env_vars("no vars"), "no vars");
        assert_eq!(resolve_env_vars("${UNCLOSED"), "${UNCLOSED");
        std::env::remove_var("_QUIZGEN_TEST_VAR");
    }

    #[test]
    fn resolved_values_are_not_expanded_again() {
        std::env::set_var("_QUIZGEN_SELF_REF", "${_QUIZGEN_SELF_REF}");
        assert_eq!(
            resolve_env_vars("${_QUIZGEN_SELF_REF}/q.json"),
            "${_QUIZGEN_SELF_REF}/q.json"
        );
        assert_eq!(
            resolve_env_vars("a-${_QUIZGEN_SELF_REF}-${_QUIZGEN_UNSET_VAR}-b"),
            "a-${_QUIZGEN_SELF_REF}--b"
        );
        std::env::remove_var("_QUIZGEN_SELF_REF");
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let err = load_config_from(Some(Path::new("no/such/quizgen.toml"))).unwrap_err();
        assert!(matches!(err, QuizError::Io { .. }));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "bank = \"math.json\"\nshow_explanations = false\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.bank, PathBuf::from("math.json"));
        assert!(!config.show_explanations);
    }
}
