//! Configuration loading and validation for the cipher API.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or
//! invalid, before the listener is bound.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::crypto::CipherMethod;

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Secret the cipher key is derived from. **Required.**
    pub secret_key: String,

    /// Secret the cipher IV is derived from. **Required.**
    pub secret_iv: String,

    /// Cipher method identifier, e.g. `"aes-256-cbc"`. **Required.**
    pub cipher_method: String,

    /// Deployment environment name, used only in startup logs.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_environment() -> String {
    "development".into()
}
fn default_port() -> u16 {
    3000
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_non_empty(&self.secret_key, "SECRET_KEY")?;
        ensure_non_empty(&self.secret_iv, "SECRET_IV")?;
        ensure_non_empty(&self.cipher_method, "CIPHER_METHOD")?;

        self.cipher_method
            .parse::<CipherMethod>()
            .context("CIPHER_METHOD names a cipher this service cannot run")?;

        if self.port == 0 {
            anyhow::bail!("PORT must be a non-zero TCP port");
        }
        Ok(())
    }

    /// The parsed cipher method identifier.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported method; unreachable after
    /// [`Config::from_env`] has validated the value.
    pub fn method(&self) -> Result<CipherMethod> {
        Ok(self.cipher_method.parse::<CipherMethod>()?)
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            secret_key: "secretKey".into(),
            secret_iv: "secretIV".into(),
            cipher_method: "aes-256-cbc".into(),
            environment: default_environment(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_environment(), "development");
        assert_eq!(default_port(), 3000);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_secret_key() {
        let mut cfg = valid_config();
        cfg.secret_key = "".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_secret_iv() {
        let mut cfg = valid_config();
        cfg.secret_iv = "   ".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_cipher_method() {
        let mut cfg = valid_config();
        cfg.cipher_method = "".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_cipher_method() {
        let mut cfg = valid_config();
        cfg.cipher_method = "rot13".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let mut cfg = valid_config();
        cfg.port = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn method_parses_configured_identifier() {
        let cfg = valid_config();
        assert_eq!(cfg.method().unwrap(), CipherMethod::Aes256Cbc);
    }
}
