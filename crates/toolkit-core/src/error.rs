//! Error types for the agent toolkit.
//!
//! A single error enum is shared by every crate in the workspace. Most
//! toolkit operations are total functions; the variants below cover the few
//! places where a lookup, a document, or a template can go wrong.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit_core::{Error, Result};
//!
//! fn find_tool(name: &str) -> Result<()> {
//!     if name != "token_optimizer" {
//!         return Err(Error::UnknownTool {
//!             name: name.to_string(),
//!             available: vec!["token_optimizer".to_string()],
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = find_tool("nonexistent").unwrap_err();
//! assert!(err.is_unknown_tool());
//! ```

use thiserror::Error;

/// Main error type for the agent toolkit.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested tool name is not in the registry.
    ///
    /// The message enumerates every valid tool key so callers can
    /// correct the lookup.
    #[error("Tool '{name}' not found. Available: [{}]", .available.join(", "))]
    UnknownTool {
        /// The tool name that was requested
        name: String,
        /// Every tool key the registry accepts, in catalog order
        available: Vec<String>,
    },

    /// OpenAPI document has an unexpected shape.
    ///
    /// Missing keys are never an error (they default to empty values);
    /// this is raised only when a key is present with the wrong type.
    #[error("Malformed OpenAPI document: {reason}")]
    MalformedSpec {
        /// Description of what was malformed and where
        reason: String,
    },

    /// Arguments passed to a registry method have the wrong shape.
    #[error("Invalid argument for '{method}': {reason}")]
    InvalidArgument {
        /// Method that rejected its arguments
        method: String,
        /// Why the arguments were rejected
        reason: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid or cannot be read.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl Error {
    /// Returns `true` if this is an unknown tool error.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_toolkit_core::Error;
    ///
    /// let err = Error::UnknownTool {
    ///     name: "missing".to_string(),
    ///     available: vec![],
    /// };
    /// assert!(err.is_unknown_tool());
    /// ```
    #[must_use]
    pub const fn is_unknown_tool(&self) -> bool {
        matches!(self, Self::UnknownTool { .. })
    }

    /// Returns `true` if this is a malformed OpenAPI document error.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_toolkit_core::Error;
    ///
    /// let err = Error::MalformedSpec {
    ///     reason: "'paths' must be an object".to_string(),
    /// };
    /// assert!(err.is_malformed_spec());
    /// ```
    #[must_use]
    pub const fn is_malformed_spec(&self) -> bool {
        matches!(self, Self::MalformedSpec { .. })
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_toolkit_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid port".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for toolkit operations.
///
/// # Examples
///
/// ```
/// use agent_toolkit_core::{Result, Error};
///
/// fn validate_port(port: u16) -> Result<u16> {
///     if port == 0 {
///         return Err(Error::ConfigError {
///             message: "Port must be non-zero".to_string(),
///         });
///     }
///     Ok(port)
/// }
///
/// assert!(validate_port(5000).is_ok());
/// assert!(validate_port(0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
