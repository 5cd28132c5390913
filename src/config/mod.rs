use std::env;
use std::fmt;
use std::num::ParseFloatError;

use crate::underwriting::EvaluationConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for an embedding process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationConfig,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    /// The leverage cutoffs may be tightened per deployment; everything else
    /// in the policy tables ships as fixed constants.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut evaluation = EvaluationConfig::default();
        if let Some(limit) = leverage_limit("POLICY_LEVERAGE_REJECTION_LTI")? {
            evaluation.leverage_rejection_lti = limit;
        }
        if let Some(limit) = leverage_limit("POLICY_STRICT_LEVERAGE_LTI")? {
            evaluation.strict_leverage_lti = limit;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluation,
        })
    }
}

fn leverage_limit(var: &'static str) -> Result<Option<f64>, ConfigError> {
    let raw = match env::var(var) {
        Ok(raw) => raw,
        Err(_) => return Ok(None),
    };

    let parsed = raw
        .trim()
        .parse::<f64>()
        .map_err(|source| ConfigError::InvalidLimit {
            var,
            value: raw.clone(),
            source,
        })?;

    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(ConfigError::LimitOutOfRange { var, value: parsed });
    }

    Ok(Some(parsed))
}

/// Tracing controls for the embedding process.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLimit {
        var: &'static str,
        value: String,
        source: ParseFloatError,
    },
    LimitOutOfRange {
        var: &'static str,
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLimit { var, value, .. } => {
                write!(f, "{var} must be a number, got '{value}'")
            }
            ConfigError::LimitOutOfRange { var, value } => {
                write!(f, "{var} must be a positive finite percentage, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidLimit { source, .. } => Some(source),
            ConfigError::LimitOutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("POLICY_LEVERAGE_REJECTION_LTI");
        env::remove_var("POLICY_STRICT_LEVERAGE_LTI");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.evaluation, EvaluationConfig::default());
    }

    #[test]
    fn load_applies_leverage_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("POLICY_LEVERAGE_REJECTION_LTI", "35.5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.evaluation.leverage_rejection_lti, 35.5);
        assert_eq!(
            config.evaluation.strict_leverage_lti,
            EvaluationConfig::default().strict_leverage_lti
        );
        reset_env();
    }

    #[test]
    fn load_rejects_unparsable_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("POLICY_STRICT_LEVERAGE_LTI", "half");
        let error = AppConfig::load().expect_err("limit must be numeric");
        assert!(matches!(
            error,
            ConfigError::InvalidLimit {
                var: "POLICY_STRICT_LEVERAGE_LTI",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn load_rejects_non_positive_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("POLICY_LEVERAGE_REJECTION_LTI", "0");
        let error = AppConfig::load().expect_err("limit must be positive");
        assert!(matches!(error, ConfigError::LimitOutOfRange { .. }));
        reset_env();
    }
}
