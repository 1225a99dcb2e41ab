//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with pre-registered templates
//! for mock server generation.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let epilogue = engine.render("mock_server/epilogue", &json!({"port": 5000})).unwrap();
//! assert!(epilogue.contains("app.run(port=5000)"));
//! ```

use agent_toolkit_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine for code generation.
///
/// Wraps Handlebars and provides pre-registered templates for
/// generating mock server source text.
///
/// Generated code is not HTML, so escaping is disabled: summaries and paths
/// are embedded verbatim.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_mock_server_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers mock server templates.
    fn register_mock_server_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        // Preamble: imports and app construction
        handlebars
            .register_template_string(
                "mock_server/preamble",
                include_str!("../templates/mock_server/preamble.py.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register mock server preamble template: {e}"),
            })?;

        // Route: one handler per endpoint
        handlebars
            .register_template_string(
                "mock_server/route",
                include_str!("../templates/mock_server/route.py.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register mock server route template: {e}"),
            })?;

        // Epilogue: startup block
        handlebars
            .register_template_string(
                "mock_server/epilogue",
                include_str!("../templates/mock_server/epilogue.py.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register mock server epilogue template: {e}"),
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context is missing a variable the template uses
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Template Engine Creation Tests
    // ========================================================================

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    // ========================================================================
    // Mock Server Template Tests
    // ========================================================================

    #[test]
    fn test_render_route_template() {
        let engine = TemplateEngine::new().unwrap();

        let context = json!({
            "path": "/users",
            "method": "GET",
            "handler_name": "mock_get_users",
            "summary": "list users",
            "timestamp": "2025-01-15T10:30:00+00:00"
        });

        let rendered = engine.render("mock_server/route", &context).unwrap();
        assert!(rendered.starts_with("@app.route(\"/users\", methods=[\"GET\"])\n"));
        assert!(rendered.contains("def mock_get_users():"));
        assert!(rendered.contains("\"\"\"list users\"\"\""));
        assert!(rendered.contains("Mock response for GET /users"));
        assert!(rendered.contains("2025-01-15T10:30:00+00:00"));
    }

    #[test]
    fn test_render_preamble_template() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine
            .render("mock_server/preamble", &json!({"port": 5000}))
            .unwrap();
        assert!(rendered.starts_with("# AI生成的Mock服务器\n"));
        assert!(rendered.contains("from flask import Flask"));
        assert!(rendered.ends_with("app = Flask(__name__)\n\n"));
    }

    #[test]
    fn test_render_epilogue_template() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine
            .render("mock_server/epilogue", &json!({"port": 8080}))
            .unwrap();
        assert!(rendered.starts_with("if __name__ == \"__main__\":"));
        assert!(rendered.contains("print(\"🚀 Mock Server starting on port 8080\")"));
        assert!(rendered.contains("app.run(port=8080)"));
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let engine = TemplateEngine::new().unwrap();

        let context = json!({
            "path": "/search",
            "method": "GET",
            "handler_name": "mock_get_search",
            "summary": "find <items> & \"things\"",
            "timestamp": "t"
        });

        let rendered = engine.render("mock_server/route", &context).unwrap();
        assert!(rendered.contains("find <items> & \"things\""));
    }

    // ========================================================================
    // Error Handling Tests
    // ========================================================================

    #[test]
    fn test_render_nonexistent_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render("nonexistent/template", &json!({}))
            .unwrap_err();
        assert!(err.is_template_error());
    }

    #[test]
    fn test_render_with_missing_required_field() {
        let engine = TemplateEngine::new().unwrap();

        // Missing "handler_name" and "timestamp"
        let invalid_context = json!({
            "path": "/users",
            "method": "GET",
            "summary": ""
        });

        let result = engine.render("mock_server/route", &invalid_context);
        assert!(result.is_err(), "Should fail with missing required field");
    }

    #[test]
    fn test_concurrent_template_usage() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateEngine>();
    }
}
