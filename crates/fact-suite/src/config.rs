// crates/fact-suite/src/config.rs
// ============================================================================
// Module: Fact Suite Configuration
// Description: Configuration loading and validation for fact suites.
// Purpose: Provide strict, fail-closed TOML parsing with hard limits.
// Dependencies: crate::{error, params}, fact-logic, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The file is optional in content (every section has defaults) but any value
//! that is present must be valid; invalid configuration fails closed.
//!
//! ```toml
//! [property_checks]
//! min_successful = 50
//! workers = 4
//!
//! [render]
//! locale = "ca"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use fact_logic::Locale;
use fact_logic::Renderer;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::params::ConfigParam;
use crate::params::Parameters;
use crate::params::PropertyCheckConfiguration;
use crate::params::resolve;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "fact-suite.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "FACT_SUITE_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default locale label.
const DEFAULT_LOCALE: &str = "en";

// ============================================================================
// SECTION: Suite Configuration
// ============================================================================

/// Root configuration for a fact suite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Default property-check parameters.
    #[serde(default)]
    pub property_checks: PropertyCheckConfiguration,
    /// Rendering options.
    #[serde(default)]
    pub render: RenderConfig,
}

impl SuiteConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// An explicit `path` wins over [`CONFIG_ENV_VAR`], which wins over
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and the validation
    /// errors of [`SuiteConfig::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.property_checks.validate()?;
        self.render.validate()?;
        Ok(())
    }

    /// Builds a renderer for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the locale is not supported.
    pub fn renderer(&self) -> Result<Renderer, ConfigError> {
        Ok(Renderer::new(self.render.locale()?))
    }

    /// Resolves `params` against the configured property-check defaults.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`crate::params::resolve`].
    pub fn resolve(&self, params: &[ConfigParam]) -> Result<Parameters, ConfigError> {
        resolve(params, &self.property_checks)
    }
}

// ============================================================================
// SECTION: Render Configuration
// ============================================================================

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Locale used for connector phrases (`en` or `ca`).
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

impl RenderConfig {
    /// Returns the parsed locale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the locale is not supported.
    pub fn locale(&self) -> Result<Locale, ConfigError> {
        Locale::parse(&self.locale).ok_or_else(|| {
            let supported: Vec<&str> =
                fact_logic::SUPPORTED_LOCALES.iter().map(|locale| locale.as_str()).collect();
            ConfigError::Invalid(format!(
                "render.locale {:?} is not one of: {}",
                self.locale,
                supported.join(", ")
            ))
        })
    }

    /// Validates render configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.locale().map(drop)
    }
}

/// Serde default for `render.locale`.
fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from an explicit path or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
