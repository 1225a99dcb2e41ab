//! Mock server generator.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit_codegen::clock::FixedClock;
//! use agent_toolkit_codegen::mock_server::MockServerGenerator;
//! use chrono::{TimeZone, Utc};
//! use serde_json::json;
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap());
//! let generator = MockServerGenerator::new().unwrap().with_clock(clock);
//!
//! let document = json!({"paths": {"/users": {"get": {"summary": "list users"}}}});
//! let code = generator.generate_from_document(&document).unwrap();
//!
//! assert!(code.contains("@app.route(\"/users\", methods=[\"GET\"])"));
//! assert!(code.contains("2025-01-15T10:30:00+00:00"));
//! ```

use crate::clock::{Clock, SystemClock};
use crate::mock_server::types::{RouteContext, ServerContext};
use crate::openapi::{self, EndpointDescriptor};
use crate::template_engine::TemplateEngine;
use agent_toolkit_core::{DEFAULT_MOCK_SERVER_PORT, Result, ToolkitConfig};
use serde_json::Value;
use std::sync::Arc;

/// Generator for Flask mock server source text.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct MockServerGenerator<'a> {
    engine: TemplateEngine<'a>,
    clock: Arc<dyn Clock>,
    port: u16,
}

impl MockServerGenerator<'_> {
    /// Creates a generator using the system clock and the default port.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            clock: Arc::new(SystemClock),
            port: DEFAULT_MOCK_SERVER_PORT,
        })
    }

    /// Creates a generator configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn with_config(config: &ToolkitConfig) -> Result<Self> {
        Ok(Self::new()?.with_port(config.mock_server_port))
    }

    /// Replaces the time source used for route timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Sets the port written into the startup epilogue.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Returns the port written into the startup epilogue.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Parses an OpenAPI document into endpoint descriptors.
    ///
    /// # Errors
    ///
    /// See [`openapi::parse_document`].
    pub fn parse(&self, document: &Value) -> Result<Vec<EndpointDescriptor>> {
        openapi::parse_document(document)
    }

    /// Renders the route handler for one endpoint.
    ///
    /// Reads the clock once for the embedded timestamp.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_route(&self, endpoint: &EndpointDescriptor) -> Result<String> {
        let context = RouteContext {
            path: endpoint.path.clone(),
            method: endpoint.method.as_str().to_string(),
            handler_name: handler_name(endpoint),
            summary: endpoint.summary.clone(),
            timestamp: self.clock.now().to_rfc3339(),
        };

        let code = self.engine.render("mock_server/route", &context)?;
        tracing::debug!("Rendered route {}", context.handler_name);
        Ok(code)
    }

    /// Renders the fixed server preamble.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_preamble(&self) -> Result<String> {
        self.engine
            .render("mock_server/preamble", &self.server_context())
    }

    /// Renders the startup epilogue.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_epilogue(&self) -> Result<String> {
        self.engine
            .render("mock_server/epilogue", &self.server_context())
    }

    /// Renders a complete mock server.
    ///
    /// The output is the preamble, every route in order with one blank
    /// line after each, then the epilogue. An empty endpoint list yields
    /// just the preamble followed by the epilogue.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_server(&self, endpoints: &[EndpointDescriptor]) -> Result<String> {
        let mut code = self.render_preamble()?;

        for endpoint in endpoints {
            code.push_str(&self.render_route(endpoint)?);
            code.push('\n');
        }

        code.push_str(&self.render_epilogue()?);

        tracing::info!(
            "Generated mock server with {} routes on port {}",
            endpoints.len(),
            self.port
        );

        Ok(code)
    }

    /// Parses an OpenAPI document and renders a complete mock server.
    ///
    /// # Errors
    ///
    /// Returns error if the document is malformed or rendering fails.
    pub fn generate_from_document(&self, document: &Value) -> Result<String> {
        let endpoints = self.parse(document)?;
        self.render_server(&endpoints)
    }

    const fn server_context(&self) -> ServerContext {
        ServerContext { port: self.port }
    }
}

/// Returns the Python handler name for an endpoint.
///
/// The name is `mock_` + the lower-case method + the path, with every
/// character that is not valid in a Python identifier replaced by `_`.
///
/// The mapping is not injective: `/a-b` and `/a_b` both yield
/// `mock_get_a_b`. Names are not de-duplicated, so a document with both
/// paths renders two Flask views with the same function name.
///
/// # Examples
///
/// ```
/// use agent_toolkit_codegen::mock_server::handler_name;
/// use agent_toolkit_codegen::openapi::EndpointDescriptor;
/// use agent_toolkit_core::HttpMethod;
///
/// let endpoint = EndpointDescriptor::new("/users/{id}", HttpMethod::Delete);
/// assert_eq!(handler_name(&endpoint), "mock_delete_users__id_");
/// ```
#[must_use]
pub fn handler_name(endpoint: &EndpointDescriptor) -> String {
    let path: String = endpoint
        .path
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("mock_{}{path}", endpoint.method.key())
}
