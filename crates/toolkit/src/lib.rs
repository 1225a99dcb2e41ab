//! Agent toolkit.
//!
//! A small registry of helper tools for AI-agent workflows:
//!
//! - [`token_optimizer`] - prompt compaction and token estimation
//! - [`multimodal`] - media type classification and stub analyses
//! - [`completion`] - snippet-based code completion
//! - [`registry`] - the [`Toolkit`] façade that owns and dispatches to
//!   every tool
//!
//! Mock server generation lives in [`agent_toolkit_codegen`] and is exposed
//! through the registry as the `api_mock_generator` tool.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit::{ToolCall, ToolOutput, Toolkit};
//!
//! let toolkit = Toolkit::new().unwrap();
//! assert_eq!(toolkit.list_tools().total_tools, 4);
//!
//! let output = toolkit
//!     .dispatch(ToolCall::OptimizePrompt {
//!         prompt: "  请帮助我 fix   this ".to_string(),
//!     })
//!     .unwrap();
//! assert_eq!(output, ToolOutput::Text(" fix this".to_string()));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod completion;
pub mod multimodal;
pub mod registry;
pub mod token_optimizer;

pub use completion::{CodeCompletionAssistant, CompletionContext, Snippet};
pub use multimodal::{AudioFeatures, ImageAnalysis, MediaAnalysis, MultimodalEnhancer};
pub use registry::{
    CatalogEntry, Invocation, ToolCall, ToolCatalog, ToolHandle, ToolOutput, Toolkit,
};
pub use token_optimizer::{TokenOptimizer, UsageStats};

pub use agent_toolkit_core::{Error, HttpMethod, Modality, Result, ToolKind, ToolkitConfig};
