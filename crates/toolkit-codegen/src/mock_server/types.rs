//! Template contexts for mock server generation.

use serde::{Deserialize, Serialize};

/// Context for rendering a single route handler.
///
/// # Examples
///
/// ```
/// use agent_toolkit_codegen::mock_server::RouteContext;
///
/// let context = RouteContext {
///     path: "/users".to_string(),
///     method: "GET".to_string(),
///     handler_name: "mock_get_users".to_string(),
///     summary: "list users".to_string(),
///     timestamp: "2025-01-15T10:30:00+00:00".to_string(),
/// };
///
/// assert_eq!(context.method, "GET");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    /// Route path as written in the document
    pub path: String,
    /// Upper-case HTTP method
    pub method: String,
    /// Python function name for the handler
    pub handler_name: String,
    /// Operation summary, used as the handler docstring
    pub summary: String,
    /// Generation timestamp (RFC 3339)
    pub timestamp: String,
}

/// Context for rendering the server preamble and epilogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerContext {
    /// Port the generated server listens on
    pub port: u16,
}
