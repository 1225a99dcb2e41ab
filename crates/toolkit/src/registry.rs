//! Tool registry façade.
//!
//! [`Toolkit`] owns one instance of each tool and routes calls to them. The
//! typed entry point is [`Toolkit::dispatch`], which takes a [`ToolCall`].
//! [`Toolkit::invoke`] accepts a tool name, an optional method name, and
//! JSON arguments, and maps them onto the same closed set of calls.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit::registry::{ToolOutput, Toolkit};
//! use serde_json::json;
//!
//! let toolkit = Toolkit::new().unwrap();
//!
//! let output = toolkit
//!     .invoke("token_optimizer", Some("estimate_tokens"), &[json!("abcd")])
//!     .unwrap()
//!     .into_output();
//! assert_eq!(output, Some(ToolOutput::Count(1)));
//!
//! let err = toolkit.invoke("nonexistent", None, &[]).unwrap_err();
//! assert!(err.is_unknown_tool());
//! ```

use crate::completion::{CodeCompletionAssistant, CompletionContext};
use crate::multimodal::{MediaAnalysis, MultimodalEnhancer};
use crate::token_optimizer::TokenOptimizer;
use agent_toolkit_codegen::{EndpointDescriptor, MockServerGenerator};
use agent_toolkit_core::{Error, Modality, Result, ToolKind, ToolkitConfig};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;

// ============================================================================
// Catalog
// ============================================================================

/// Static description of one registered tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Registry key
    #[serde(skip)]
    pub key: ToolKind,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Fixed confidence score
    pub confidence: f64,
}

const CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        key: ToolKind::TokenOptimizer,
        name: "Token优化器",
        description: "优化对话token消耗，提升效率",
        confidence: 0.92,
    },
    CatalogEntry {
        key: ToolKind::MultimodalEnhancer,
        name: "多模态理解增强",
        description: "增强图片、音频、视频理解能力",
        confidence: 0.88,
    },
    CatalogEntry {
        key: ToolKind::ApiMockGenerator,
        name: "API Mock服务生成器",
        description: "自动从OpenAPI规范生成Mock服务",
        confidence: 0.87,
    },
    CatalogEntry {
        key: ToolKind::CodeCompletion,
        name: "代码补全助手",
        description: "实时代码补全和建议工具",
        confidence: 0.86,
    },
];

/// Catalog of every registered tool.
///
/// Serializes as `{"total_tools": 4, "tools": {"<key>": {"name", "description",
/// "confidence"}, ...}}` with keys in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCatalog {
    /// Number of registered tools
    pub total_tools: usize,
    /// One entry per tool, in catalog order
    #[serde(serialize_with = "serialize_entries")]
    pub tools: Vec<CatalogEntry>,
}

impl ToolCatalog {
    /// Returns the entry for `tool`.
    #[must_use]
    pub fn get(&self, tool: ToolKind) -> Option<&CatalogEntry> {
        self.tools.iter().find(|entry| entry.key == tool)
    }
}

fn serialize_entries<S: Serializer>(
    entries: &[CatalogEntry],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|entry| (entry.key.as_str(), entry)))
}

// ============================================================================
// Calls and Outputs
// ============================================================================

/// One operation on one tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    /// `token_optimizer.optimize_prompt`
    OptimizePrompt {
        /// Prompt to shorten
        prompt: String,
    },
    /// `token_optimizer.estimate_tokens`
    EstimateTokens {
        /// Text to estimate
        text: String,
    },
    /// `multimodal_enhancer.detect_modality`
    DetectModality {
        /// File to classify
        file_path: PathBuf,
    },
    /// `multimodal_enhancer.analyze_image`
    AnalyzeImage {
        /// Image path
        path: PathBuf,
    },
    /// `multimodal_enhancer.extract_audio_features`
    ExtractAudioFeatures {
        /// Audio path
        path: PathBuf,
    },
    /// `api_mock_generator.parse_openapi`
    ParseOpenApi {
        /// OpenAPI document
        document: Value,
    },
    /// `api_mock_generator.generate_mock_code`
    GenerateMockCode {
        /// Endpoint to render
        endpoint: EndpointDescriptor,
    },
    /// `api_mock_generator.generate_mock_server`
    GenerateMockServer {
        /// Endpoints to render, in order
        endpoints: Vec<EndpointDescriptor>,
    },
    /// `code_completion.suggest_completion`
    SuggestCompletion {
        /// Typed text
        prefix: String,
        /// Language tag; the configured language when `None`
        language: Option<String>,
    },
    /// `code_completion.generate_context_aware_suggestion`
    ContextAwareSuggestion {
        /// Editing context
        context: CompletionContext,
    },
}

impl ToolCall {
    /// Returns the tool this call targets.
    #[must_use]
    pub const fn tool(&self) -> ToolKind {
        match self {
            Self::OptimizePrompt { .. } | Self::EstimateTokens { .. } => ToolKind::TokenOptimizer,
            Self::DetectModality { .. }
            | Self::AnalyzeImage { .. }
            | Self::ExtractAudioFeatures { .. } => ToolKind::MultimodalEnhancer,
            Self::ParseOpenApi { .. }
            | Self::GenerateMockCode { .. }
            | Self::GenerateMockServer { .. } => ToolKind::ApiMockGenerator,
            Self::SuggestCompletion { .. } | Self::ContextAwareSuggestion { .. } => {
                ToolKind::CodeCompletion
            }
        }
    }

    /// Returns the method name this call is invoked by.
    #[must_use]
    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::OptimizePrompt { .. } => "optimize_prompt",
            Self::EstimateTokens { .. } => "estimate_tokens",
            Self::DetectModality { .. } => "detect_modality",
            Self::AnalyzeImage { .. } => "analyze_image",
            Self::ExtractAudioFeatures { .. } => "extract_audio_features",
            Self::ParseOpenApi { .. } => "parse_openapi",
            Self::GenerateMockCode { .. } => "generate_mock_code",
            Self::GenerateMockServer { .. } => "generate_mock_server",
            Self::SuggestCompletion { .. } => "suggest_completion",
            Self::ContextAwareSuggestion { .. } => "generate_context_aware_suggestion",
        }
    }

    /// Builds a call from a method name and positional JSON arguments.
    ///
    /// Returns `Ok(None)` when `tool` has no method called `method`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the method exists but the
    /// arguments are missing, surplus, or of the wrong shape.
    pub fn from_method(tool: ToolKind, method: &str, args: &[Value]) -> Result<Option<Self>> {
        let args = Args { method, args };

        let call = match (tool, method) {
            (ToolKind::TokenOptimizer, "optimize_prompt") => Self::OptimizePrompt {
                prompt: args.exactly_one("prompt")?,
            },
            (ToolKind::TokenOptimizer, "estimate_tokens") => Self::EstimateTokens {
                text: args.exactly_one("text")?,
            },
            (ToolKind::MultimodalEnhancer, "detect_modality") => Self::DetectModality {
                file_path: args.exactly_one("file_path")?,
            },
            (ToolKind::MultimodalEnhancer, "analyze_image") => Self::AnalyzeImage {
                path: args.exactly_one("image_path")?,
            },
            (ToolKind::MultimodalEnhancer, "extract_audio_features") => {
                Self::ExtractAudioFeatures {
                    path: args.exactly_one("audio_path")?,
                }
            }
            (ToolKind::ApiMockGenerator, "parse_openapi") => Self::ParseOpenApi {
                document: args.exactly_one("openapi_spec")?,
            },
            (ToolKind::ApiMockGenerator, "generate_mock_code") => Self::GenerateMockCode {
                endpoint: args.exactly_one("endpoint")?,
            },
            (ToolKind::ApiMockGenerator, "generate_mock_server") => Self::GenerateMockServer {
                endpoints: args.exactly_one("endpoints")?,
            },
            (ToolKind::CodeCompletion, "suggest_completion") => {
                args.at_most(2)?;
                Self::SuggestCompletion {
                    prefix: args.required(0, "prefix")?,
                    language: args.optional(1, "language")?,
                }
            }
            (ToolKind::CodeCompletion, "generate_context_aware_suggestion") => {
                Self::ContextAwareSuggestion {
                    context: args.exactly_one("context")?,
                }
            }
            _ => return Ok(None),
        };

        Ok(Some(call))
    }
}

/// Positional arguments for one method.
struct Args<'a> {
    method: &'a str,
    args: &'a [Value],
}

impl Args<'_> {
    fn invalid(&self, reason: String) -> Error {
        Error::InvalidArgument {
            method: self.method.to_string(),
            reason,
        }
    }

    fn at_most(&self, count: usize) -> Result<()> {
        if self.args.len() > count {
            return Err(self.invalid(format!(
                "expected at most {count} argument(s), got {}",
                self.args.len()
            )));
        }
        Ok(())
    }

    fn exactly_one<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.at_most(1)?;
        self.required(0, name)
    }

    fn required<T: DeserializeOwned>(&self, index: usize, name: &str) -> Result<T> {
        self.optional(index, name)?
            .ok_or_else(|| self.invalid(format!("missing argument '{name}'")))
    }

    fn optional<T: DeserializeOwned>(&self, index: usize, name: &str) -> Result<Option<T>> {
        self.args
            .get(index)
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| self.invalid(format!("argument '{name}': {e}")))
            })
            .transpose()
    }
}

/// Result of a tool operation.
///
/// Serializes untagged, so each variant renders as its bare JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    /// Text result (optimized prompt, generated code, suggestion)
    Text(String),
    /// Token estimate
    Count(usize),
    /// Detected modality, `None` when the extension is unknown
    Modality(Option<Modality>),
    /// Stub media analysis
    Analysis(MediaAnalysis),
    /// Parsed endpoints
    Endpoints(Vec<EndpointDescriptor>),
    /// Snippet suggestions
    Suggestions(Vec<String>),
}

impl ToolOutput {
    /// Returns the text if this is a text output.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the count if this is a token estimate.
    #[must_use]
    pub const fn as_count(&self) -> Option<usize> {
        match self {
            Self::Count(count) => Some(*count),
            _ => None,
        }
    }

    /// Converts the output to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if serialization fails.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Borrowed reference to one of the registry's tool instances.
#[derive(Debug, Clone, Copy)]
pub enum ToolHandle<'a> {
    /// The token optimizer
    TokenOptimizer(&'a TokenOptimizer),
    /// The multimodal enhancer
    MultimodalEnhancer(&'a MultimodalEnhancer),
    /// The mock server generator
    ApiMockGenerator(&'a MockServerGenerator<'static>),
    /// The completion assistant
    CodeCompletion(&'a CodeCompletionAssistant),
}

impl ToolHandle<'_> {
    /// Returns which tool this handle refers to.
    #[must_use]
    pub const fn kind(&self) -> ToolKind {
        match self {
            Self::TokenOptimizer(_) => ToolKind::TokenOptimizer,
            Self::MultimodalEnhancer(_) => ToolKind::MultimodalEnhancer,
            Self::ApiMockGenerator(_) => ToolKind::ApiMockGenerator,
            Self::CodeCompletion(_) => ToolKind::CodeCompletion,
        }
    }
}

/// Outcome of [`Toolkit::invoke`].
#[derive(Debug)]
pub enum Invocation<'a> {
    /// A method ran and produced output
    Output(ToolOutput),
    /// No method was named, or the tool has no such method; the tool itself
    /// is returned
    Tool(ToolHandle<'a>),
}

impl<'a> Invocation<'a> {
    /// Returns the output, or `None` if the tool itself was returned.
    #[must_use]
    pub fn into_output(self) -> Option<ToolOutput> {
        match self {
            Self::Output(output) => Some(output),
            Self::Tool(_) => None,
        }
    }

    /// Returns the tool handle, or `None` if a method ran.
    #[must_use]
    pub const fn as_tool(&self) -> Option<ToolHandle<'a>> {
        match self {
            Self::Output(_) => None,
            Self::Tool(handle) => Some(*handle),
        }
    }
}

// ============================================================================
// Toolkit
// ============================================================================

/// Registry holding one instance of each tool.
#[derive(Debug)]
pub struct Toolkit {
    token_optimizer: TokenOptimizer,
    multimodal_enhancer: MultimodalEnhancer,
    api_mock_generator: MockServerGenerator<'static>,
    code_completion: CodeCompletionAssistant,
}

impl Toolkit {
    /// Creates a toolkit with default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the mock server templates fail to register.
    pub fn new() -> Result<Self> {
        Self::with_config(&ToolkitConfig::default())
    }

    /// Creates a toolkit from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid, or an
    /// error if the mock server templates fail to register.
    pub fn with_config(config: &ToolkitConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            token_optimizer: TokenOptimizer::new(),
            multimodal_enhancer: MultimodalEnhancer::new(),
            api_mock_generator: MockServerGenerator::with_config(config)?,
            code_completion: CodeCompletionAssistant::with_config(config),
        })
    }

    /// Replaces the mock server generator (e.g. to inject a fixed clock).
    #[must_use]
    pub fn with_mock_generator(mut self, generator: MockServerGenerator<'static>) -> Self {
        self.api_mock_generator = generator;
        self
    }

    /// Returns the catalog of registered tools.
    #[must_use]
    pub fn list_tools(&self) -> ToolCatalog {
        ToolCatalog {
            total_tools: CATALOG.len(),
            tools: CATALOG.to_vec(),
        }
    }

    /// Returns a handle to the tool instance for `tool`.
    #[must_use]
    pub const fn tool(&self, tool: ToolKind) -> ToolHandle<'_> {
        match tool {
            ToolKind::TokenOptimizer => ToolHandle::TokenOptimizer(&self.token_optimizer),
            ToolKind::MultimodalEnhancer => {
                ToolHandle::MultimodalEnhancer(&self.multimodal_enhancer)
            }
            ToolKind::ApiMockGenerator => ToolHandle::ApiMockGenerator(&self.api_mock_generator),
            ToolKind::CodeCompletion => ToolHandle::CodeCompletion(&self.code_completion),
        }
    }

    /// Returns the token optimizer.
    #[must_use]
    pub const fn token_optimizer(&self) -> &TokenOptimizer {
        &self.token_optimizer
    }

    /// Returns the multimodal enhancer.
    #[must_use]
    pub const fn multimodal_enhancer(&self) -> &MultimodalEnhancer {
        &self.multimodal_enhancer
    }

    /// Returns the mock server generator.
    #[must_use]
    pub const fn api_mock_generator(&self) -> &MockServerGenerator<'static> {
        &self.api_mock_generator
    }

    /// Returns the completion assistant.
    #[must_use]
    pub const fn code_completion(&self) -> &CodeCompletionAssistant {
        &self.code_completion
    }

    /// Runs one operation.
    ///
    /// # Errors
    ///
    /// Returns error if the mock generator rejects a document or fails to
    /// render. Every other operation is infallible.
    pub fn dispatch(&self, call: ToolCall) -> Result<ToolOutput> {
        tracing::info!("Dispatching {}.{}", call.tool(), call.method_name());

        let output = match call {
            ToolCall::OptimizePrompt { prompt } => {
                ToolOutput::Text(self.token_optimizer.optimize_prompt(&prompt))
            }
            ToolCall::EstimateTokens { text } => {
                ToolOutput::Count(self.token_optimizer.estimate_tokens(&text))
            }
            ToolCall::DetectModality { file_path } => {
                ToolOutput::Modality(self.multimodal_enhancer.detect_modality(file_path))
            }
            ToolCall::AnalyzeImage { path } => {
                ToolOutput::Analysis(self.multimodal_enhancer.analyze_image(path))
            }
            ToolCall::ExtractAudioFeatures { path } => {
                ToolOutput::Analysis(self.multimodal_enhancer.extract_audio_features(path))
            }
            ToolCall::ParseOpenApi { document } => {
                ToolOutput::Endpoints(self.api_mock_generator.parse(&document)?)
            }
            ToolCall::GenerateMockCode { endpoint } => {
                ToolOutput::Text(self.api_mock_generator.render_route(&endpoint)?)
            }
            ToolCall::GenerateMockServer { endpoints } => {
                ToolOutput::Text(self.api_mock_generator.render_server(&endpoints)?)
            }
            ToolCall::SuggestCompletion { prefix, language } => {
                let language = language.as_deref().unwrap_or(self.code_completion.language());
                ToolOutput::Suggestions(
                    self.code_completion
                        .suggest_completion(&prefix, language)
                        .into_iter()
                        .map(String::from)
                        .collect(),
                )
            }
            ToolCall::ContextAwareSuggestion { context } => ToolOutput::Text(
                self.code_completion
                    .generate_context_aware_suggestion(&context)
                    .to_string(),
            ),
        };

        Ok(output)
    }

    /// Invokes a tool by name.
    ///
    /// Resolves `tool_name` to a registered tool. If `method` names one of
    /// that tool's operations, it runs with `args` as positional arguments.
    /// Otherwise (no method, or a method the tool does not have) the tool
    /// instance itself is returned.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::UnknownTool`] if `tool_name` is not registered; the error
    ///   lists every valid name
    /// - [`Error::InvalidArgument`] if the arguments do not fit the method
    /// - any error from [`Toolkit::dispatch`]
    pub fn invoke(
        &self,
        tool_name: &str,
        method: Option<&str>,
        args: &[Value],
    ) -> Result<Invocation<'_>> {
        let tool: ToolKind = tool_name.parse()?;

        let call = match method {
            Some(method) => ToolCall::from_method(tool, method, args)?,
            None => None,
        };

        match call {
            Some(call) => Ok(Invocation::Output(self.dispatch(call)?)),
            None => {
                tracing::debug!("No method resolved on {tool}, returning the tool");
                Ok(Invocation::Tool(self.tool(tool)))
            }
        }
    }
}
