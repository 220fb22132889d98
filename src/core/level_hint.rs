//! Threshold configuration
//!
//! A [`LevelHint`] is the single configuration value that decides a
//! logger's minimum severity. Unrecognised names never fail: they resolve
//! to [`Severity::ERROR`], the same threshold as an absent hint.

use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Environment names that lower the threshold to [`Severity::DEBUG`]
pub const DEBUG_ENVIRONMENTS: [&str; 3] = ["DEVELOPMENT", "TEST", "GITHUB"];

/// Conventional variable holding the deployment environment name
pub const DEFAULT_ENV_VAR: &str = "ENV";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelHint {
    /// No hint: threshold is `ERROR`
    #[default]
    Default,
    /// One of `DEBUG`, `INFO`, `WARN`, `ERROR`, `FATAL` (any case)
    NamedLevel(String),
    /// Deployment environment; `development`, `test` and `github` log at `DEBUG`
    Environment(String),
    /// Threshold used verbatim
    RawSeverity(i32),
}

impl LevelHint {
    pub fn named(name: impl Into<String>) -> Self {
        LevelHint::NamedLevel(name.into())
    }

    pub fn environment(name: impl Into<String>) -> Self {
        LevelHint::Environment(name.into())
    }

    /// Build an environment hint from a process environment variable.
    ///
    /// Unset or non-unicode variables give [`LevelHint::Default`].
    ///
    /// ```no_run
    /// use severity_logger::{create_logger, LevelHint, DEFAULT_ENV_VAR};
    ///
    /// let logger = create_logger(None::<std::io::Stdout>, LevelHint::from_env_var(DEFAULT_ENV_VAR));
    /// logger.debug("visible when ENV=development");
    /// ```
    pub fn from_env_var(key: &str) -> Self {
        std::env::var(key)
            .map(LevelHint::Environment)
            .unwrap_or_default()
    }

    /// Resolve the hint to a threshold.
    pub fn resolve_threshold(&self) -> Severity {
        match self {
            LevelHint::Default => Severity::ERROR,
            LevelHint::NamedLevel(name) => Severity::from_name(name).unwrap_or(Severity::ERROR),
            LevelHint::Environment(env) => {
                if is_debug_environment(env) {
                    Severity::DEBUG
                } else {
                    Severity::ERROR
                }
            }
            LevelHint::RawSeverity(value) => Severity::new(*value),
        }
    }
}

fn is_debug_environment(env: &str) -> bool {
    DEBUG_ENVIRONMENTS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(env))
}

impl From<Severity> for LevelHint {
    fn from(severity: Severity) -> Self {
        LevelHint::RawSeverity(severity.value())
    }
}

impl From<i32> for LevelHint {
    fn from(value: i32) -> Self {
        LevelHint::RawSeverity(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolves_to_error() {
        assert_eq!(LevelHint::Default.resolve_threshold(), Severity::ERROR);
        assert_eq!(LevelHint::default(), LevelHint::Default);
    }

    #[test]
    fn test_named_levels() {
        assert_eq!(LevelHint::named("DEBUG").resolve_threshold(), Severity::DEBUG);
        assert_eq!(LevelHint::named("info").resolve_threshold(), Severity::INFO);
        assert_eq!(LevelHint::named("Warn").resolve_threshold(), Severity::WARN);
        assert_eq!(LevelHint::named("error").resolve_threshold(), Severity::ERROR);
        assert_eq!(LevelHint::named("fatal").resolve_threshold(), Severity::FATAL);
    }

    #[test]
    fn test_unknown_name_falls_back_to_error() {
        assert_eq!(LevelHint::named("verbose").resolve_threshold(), Severity::ERROR);
        assert_eq!(LevelHint::named("").resolve_threshold(), Severity::ERROR);
    }

    #[test]
    fn test_debug_environments() {
        for env in ["development", "TEST", "GitHub"] {
            assert_eq!(
                LevelHint::environment(env).resolve_threshold(),
                Severity::DEBUG,
                "environment {env}"
            );
        }
    }

    #[test]
    fn test_other_environments_resolve_to_error() {
        for env in ["production", "prod", "dev", "staging", ""] {
            assert_eq!(
                LevelHint::environment(env).resolve_threshold(),
                Severity::ERROR,
                "environment {env}"
            );
        }
    }

    #[test]
    fn test_raw_severity_is_verbatim() {
        assert_eq!(LevelHint::from(-4).resolve_threshold(), Severity::DEBUG);
        assert_eq!(LevelHint::from(3).resolve_threshold(), Severity::new(3));
        assert_eq!(
            LevelHint::from(Severity::FATAL).resolve_threshold(),
            Severity::FATAL
        );
    }

    #[test]
    fn test_from_env_var_unset() {
        let hint = LevelHint::from_env_var("SEVERITY_LOGGER_UNSET_VARIABLE_FOR_TEST");
        assert_eq!(hint, LevelHint::Default);
    }

    #[test]
    fn test_from_env_var_debug_environment() {
        let key = "SEVERITY_LOGGER_TEST_ENV_DEBUG";
        std::env::set_var(key, "GitHub");

        let hint = LevelHint::from_env_var(key);
        std::env::remove_var(key);

        assert_eq!(hint, LevelHint::environment("GitHub"));
        assert_eq!(hint.resolve_threshold(), Severity::DEBUG);
    }

    #[test]
    fn test_from_env_var_production_environment() {
        let key = "SEVERITY_LOGGER_TEST_ENV_PROD";
        std::env::set_var(key, "prod");

        let hint = LevelHint::from_env_var(key);
        std::env::remove_var(key);

        assert_eq!(hint, LevelHint::environment("prod"));
        assert_eq!(hint.resolve_threshold(), Severity::ERROR);
    }
}
