//! Configuration for the agent toolkit.
//!
//! Configuration is optional: every field has a default matching the
//! toolkit's stock behavior. Values can be built in code or loaded from a
//! TOML file.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit_core::ToolkitConfig;
//!
//! let config = ToolkitConfig::default();
//! assert_eq!(config.mock_server_port, 5000);
//! assert_eq!(config.completion_language, "python");
//!
//! let custom = ToolkitConfig::builder()
//!     .mock_server_port(8080)
//!     .build();
//! assert_eq!(custom.mock_server_port, 8080);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default port written into generated mock servers.
pub const DEFAULT_MOCK_SERVER_PORT: u16 = 5000;

/// Default language recognized by the snippet assistant.
pub const DEFAULT_COMPLETION_LANGUAGE: &str = "python";

/// Toolkit configuration.
///
/// # Examples
///
/// ```
/// use agent_toolkit_core::ToolkitConfig;
///
/// let config = ToolkitConfig::from_toml_str("mock_server_port = 9000").unwrap();
/// assert_eq!(config.mock_server_port, 9000);
/// assert_eq!(config.completion_language, "python");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Port the generated mock server listens on.
    ///
    /// Default: 5000
    pub mock_server_port: u16,

    /// Language tag accepted by snippet completion (compared
    /// case-insensitively).
    ///
    /// Default: `"python"`
    pub completion_language: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            mock_server_port: DEFAULT_MOCK_SERVER_PORT,
            completion_language: DEFAULT_COMPLETION_LANGUAGE.to_string(),
        }
    }
}

impl ToolkitConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> ToolkitConfigBuilder {
        ToolkitConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - The mock server port is zero
    /// - The completion language is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_toolkit_core::ToolkitConfig;
    ///
    /// assert!(ToolkitConfig::default().validate().is_ok());
    ///
    /// let mut invalid = ToolkitConfig::default();
    /// invalid.mock_server_port = 0;
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.mock_server_port == 0 {
            return Err(Error::ConfigError {
                message: "Mock server port must be greater than zero".to_string(),
            });
        }

        if self.completion_language.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "Completion language cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML, has
    /// fields of the wrong type, or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("failed to parse config: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or its
    /// content is rejected by [`ToolkitConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("failed to read config file {}: {e}", path.display()),
        })?;

        tracing::debug!("Loaded toolkit config from {}", path.display());
        Self::from_toml_str(&content)
    }
}

/// Builder for [`ToolkitConfig`].
///
/// # Examples
///
/// ```
/// use agent_toolkit_core::ToolkitConfig;
///
/// let config = ToolkitConfig::builder()
///     .mock_server_port(3000)
///     .completion_language("Python")
///     .build();
///
/// assert_eq!(config.mock_server_port, 3000);
/// assert_eq!(config.completion_language, "Python");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolkitConfigBuilder {
    config: ToolkitConfig,
}

impl ToolkitConfigBuilder {
    /// Creates a builder seeded with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the port written into generated mock servers.
    #[must_use]
    pub const fn mock_server_port(mut self, port: u16) -> Self {
        self.config.mock_server_port = port;
        self
    }

    /// Sets the language accepted by snippet completion.
    #[must_use]
    pub fn completion_language(mut self, language: impl Into<String>) -> Self {
        self.config.completion_language = language.into();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ToolkitConfig {
        self.config
    }
}
