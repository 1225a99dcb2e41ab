//! Strong domain types shared across the toolkit.
//!
//! Closed enumerations replace the free-form strings used at the edges:
//! tool keys, HTTP methods, and media modalities. Each renders to a fixed
//! string form; tool keys also parse from it.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit_core::{HttpMethod, Modality, ToolKind};
//!
//! let tool: ToolKind = "token_optimizer".parse().unwrap();
//! assert_eq!(tool.as_str(), "token_optimizer");
//!
//! assert_eq!(HttpMethod::Get.key(), "get");
//! assert_eq!(Modality::Image.as_str(), "image");
//! ```

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the four tools held by the registry.
///
/// # Examples
///
/// ```
/// use agent_toolkit_core::ToolKind;
///
/// assert_eq!(ToolKind::ALL.len(), 4);
/// assert!("nonexistent".parse::<ToolKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Prompt compaction and token estimation
    TokenOptimizer,
    /// Media type classification and stub analysis
    MultimodalEnhancer,
    /// OpenAPI to mock server generation
    ApiMockGenerator,
    /// Snippet-based code completion
    CodeCompletion,
}

impl ToolKind {
    /// Every tool, in catalog order.
    pub const ALL: [Self; 4] = [
        Self::TokenOptimizer,
        Self::MultimodalEnhancer,
        Self::ApiMockGenerator,
        Self::CodeCompletion,
    ];

    /// Returns the registry key for this tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TokenOptimizer => "token_optimizer",
            Self::MultimodalEnhancer => "multimodal_enhancer",
            Self::ApiMockGenerator => "api_mock_generator",
            Self::CodeCompletion => "code_completion",
        }
    }

    /// Returns every registry key, in catalog order.
    #[must_use]
    pub fn available() -> Vec<String> {
        Self::ALL.iter().map(|tool| tool.as_str().to_string()).collect()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| Error::UnknownTool {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

/// HTTP method recognized by the OpenAPI parser.
///
/// Only these four methods produce endpoints; any other key under a path
/// item is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Recognized methods in the order endpoints are emitted for a path.
    pub const ALL: [Self; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    /// Returns the upper-case method name (e.g. `"GET"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns the lower-case key used in OpenAPI path items (e.g. `"get"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse media category inferred from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Still images
    Image,
    /// Audio recordings
    Audio,
    /// Video recordings
    Video,
}

impl Modality {
    /// Returns the lower-case category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
