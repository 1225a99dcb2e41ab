//! OpenAPI document parsing.
//!
//! Extracts a flat list of [`EndpointDescriptor`]s from the `paths` section of
//! an OpenAPI-like document. Only the subset needed for mock generation is
//! read; the document is not validated against the OpenAPI schema.
//!
//! # Leniency
//!
//! Missing keys default to empty values: a document without `paths` yields
//! no endpoints, an operation without `summary` gets an empty summary, and an
//! operation without `responses` gets an empty mapping. Keys that are present
//! with the wrong JSON type produce [`Error::MalformedSpec`]. Path-item keys
//! other than `get`, `post`, `put`, and `delete` are ignored whatever their
//! shape.
//!
//! # Examples
//!
//! ```
//! use agent_toolkit_codegen::openapi::parse_document;
//! use agent_toolkit_core::HttpMethod;
//! use serde_json::json;
//!
//! let document = json!({
//!     "paths": {
//!         "/users": {
//!             "get": {"summary": "list users"},
//!             "post": {}
//!         }
//!     }
//! });
//!
//! let endpoints = parse_document(&document).unwrap();
//! assert_eq!(endpoints.len(), 2);
//! assert_eq!(endpoints[0].method, HttpMethod::Get);
//! assert_eq!(endpoints[1].summary, "");
//! ```

use agent_toolkit_core::{Error, HttpMethod, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One HTTP route extracted from an OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Route path as written in the document (e.g. `/users/{id}`)
    pub path: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Operation summary, empty when absent
    #[serde(default)]
    pub summary: String,
    /// Response specifications keyed by status code
    #[serde(default)]
    pub responses: Map<String, Value>,
}

impl EndpointDescriptor {
    /// Creates an endpoint with no summary and no responses.
    #[must_use]
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            path: path.into(),
            method,
            summary: String::new(),
            responses: Map::new(),
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// Parses the `paths` section of an OpenAPI document.
///
/// Endpoints are ordered by path, in document order, then by method in the
/// fixed order `get`, `post`, `put`, `delete`.
///
/// # Errors
///
/// Returns [`Error::MalformedSpec`] if:
/// - The document root is not an object
/// - `paths` is present but not an object
/// - A path item or a recognized operation is not an object
/// - `summary` is present but not a string
/// - `responses` is present but not an object
pub fn parse_document(document: &Value) -> Result<Vec<EndpointDescriptor>> {
    let root = document.as_object().ok_or_else(|| Error::MalformedSpec {
        reason: "document root must be an object".to_string(),
    })?;

    let paths = match root.get("paths") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(paths)) => paths,
        Some(_) => {
            return Err(Error::MalformedSpec {
                reason: "'paths' must be an object".to_string(),
            });
        }
    };

    let mut endpoints = Vec::new();

    for (path, item) in paths {
        let item = item.as_object().ok_or_else(|| Error::MalformedSpec {
            reason: format!("path item '{path}' must be an object"),
        })?;

        for method in HttpMethod::ALL {
            let Some(operation) = item.get(method.key()) else {
                continue;
            };

            let endpoint = parse_operation(path, method, operation)?;
            tracing::debug!("Parsed endpoint: {} {}", endpoint.method, endpoint.path);
            endpoints.push(endpoint);
        }
    }

    Ok(endpoints)
}

/// Parses an OpenAPI document from JSON text.
///
/// # Errors
///
/// Returns [`Error::SerializationError`] if the text is not valid JSON, or
/// any error from [`parse_document`].
///
/// # Examples
///
/// ```
/// use agent_toolkit_codegen::openapi::parse_json;
///
/// let endpoints = parse_json(r#"{"paths": {"/health": {"get": {}}}}"#).unwrap();
/// assert_eq!(endpoints[0].path, "/health");
/// ```
pub fn parse_json(content: &str) -> Result<Vec<EndpointDescriptor>> {
    let document: Value = serde_json::from_str(content)?;
    parse_document(&document)
}

fn parse_operation(path: &str, method: HttpMethod, operation: &Value) -> Result<EndpointDescriptor> {
    let operation = operation.as_object().ok_or_else(|| Error::MalformedSpec {
        reason: format!("operation '{} {path}' must be an object", method.key()),
    })?;

    let summary = match operation.get("summary") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(summary)) => summary.clone(),
        Some(_) => {
            return Err(Error::MalformedSpec {
                reason: format!("summary of '{} {path}' must be a string", method.key()),
            });
        }
    };

    let responses = match operation.get("responses") {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(responses)) => responses.clone(),
        Some(_) => {
            return Err(Error::MalformedSpec {
                reason: format!("responses of '{} {path}' must be an object", method.key()),
            });
        }
    };

    Ok(EndpointDescriptor {
        path: path.to_string(),
        method,
        summary,
        responses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // Extraction Tests
    // ========================================================================

    #[test]
    fn test_parse_get_and_post() {
        let document = json!({
            "paths": {
                "/users": {
                    "get": {"summary": "list users"},
                    "post": {}
                }
            }
        });

        let endpoints = parse_document(&document).unwrap();
        assert_eq!(
            endpoints,
            vec![
                EndpointDescriptor::new("/users", HttpMethod::Get).with_summary("list users"),
                EndpointDescriptor::new("/users", HttpMethod::Post),
            ]
        );
    }

    #[test]
    fn test_method_order_is_fixed() {
        let document = json!({
            "paths": {
                "/items": {
                    "delete": {},
                    "put": {},
                    "get": {},
                    "post": {}
                }
            }
        });

        let methods: Vec<HttpMethod> = parse_document(&document)
            .unwrap()
            .into_iter()
            .map(|e| e.method)
            .collect();
        assert_eq!(methods, HttpMethod::ALL.to_vec());
    }

    #[test]
    fn test_path_order_follows_document() {
        let document = json!({
            "paths": {
                "/zebra": {"get": {}},
                "/alpha": {"get": {}},
                "/middle": {"get": {}}
            }
        });

        let paths: Vec<String> = parse_document(&document)
            .unwrap()
            .into_iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(paths, vec!["/zebra", "/alpha", "/middle"]);
    }

    #[test]
    fn test_unrecognized_methods_are_ignored() {
        let document = json!({
            "paths": {
                "/users": {
                    "patch": {"summary": "ignored"},
                    "options": "not even an object",
                    "parameters": [],
                    "GET": {},
                    "get": {}
                }
            }
        });

        let endpoints = parse_document(&document).unwrap();
        assert_eq!(endpoints.len(), 1);
        assert_eq!(endpoints[0].method, HttpMethod::Get);
    }

    #[test]
    fn test_responses_are_kept() {
        let document = json!({
            "paths": {
                "/users/{id}": {
                    "get": {
                        "summary": "get user",
                        "responses": {
                            "200": {"description": "ok"},
                            "404": {"description": "missing"}
                        }
                    }
                }
            }
        });

        let endpoints = parse_document(&document).unwrap();
        let responses = &endpoints[0].responses;
        let codes: Vec<&String> = responses.keys().collect();
        assert_eq!(codes, vec!["200", "404"]);
        assert_eq!(responses["404"]["description"], "missing");
    }

    // ========================================================================
    // Leniency Tests
    // ========================================================================

    #[test]
    fn test_missing_paths_yields_empty() {
        assert!(parse_document(&json!({"openapi": "3.0.0"})).unwrap().is_empty());
    }

    #[test]
    fn test_empty_or_null_paths_yields_empty() {
        assert!(parse_document(&json!({"paths": {}})).unwrap().is_empty());
        assert!(parse_document(&json!({"paths": null})).unwrap().is_empty());
    }

    #[test]
    fn test_null_summary_defaults_to_empty() {
        let document = json!({"paths": {"/a": {"get": {"summary": null}}}});
        assert_eq!(parse_document(&document).unwrap()[0].summary, "");
    }

    // ========================================================================
    // Malformed Document Tests
    // ========================================================================

    #[test]
    fn test_non_object_root() {
        let err = parse_document(&json!(["paths"])).unwrap_err();
        assert!(err.is_malformed_spec());
    }

    #[test]
    fn test_non_object_paths() {
        let err = parse_document(&json!({"paths": ["/users"]})).unwrap_err();
        assert!(err.is_malformed_spec());
    }

    #[test]
    fn test_non_object_path_item() {
        let err = parse_document(&json!({"paths": {"/users": "get"}})).unwrap_err();
        assert!(err.is_malformed_spec());
        assert!(format!("{err}").contains("/users"));
    }

    #[test]
    fn test_non_object_operation() {
        let err = parse_document(&json!({"paths": {"/users": {"get": true}}})).unwrap_err();
        assert!(err.is_malformed_spec());
    }

    #[test]
    fn test_non_string_summary() {
        let document = json!({"paths": {"/users": {"post": {"summary": 42}}}});
        let err = parse_document(&document).unwrap_err();
        assert!(format!("{err}").contains("summary of 'post /users'"));
    }

    #[test]
    fn test_non_object_responses() {
        let document = json!({"paths": {"/users": {"put": {"responses": ["200"]}}}});
        assert!(parse_document(&document).unwrap_err().is_malformed_spec());
    }

    #[test]
    fn test_parse_json_invalid_text() {
        let err = parse_json("{paths:").unwrap_err();
        assert!(matches!(err, Error::SerializationError { .. }));
    }
}
