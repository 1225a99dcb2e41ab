//! Mock server code generation from OpenAPI documents.
//!
//! Parses the `paths` section of an OpenAPI-like document into endpoint
//! descriptors and renders them into Flask mock server source text using
//! Handlebars templates.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod clock;
pub mod mock_server;
pub mod openapi;
pub mod template_engine;

pub use clock::{Clock, FixedClock, SystemClock};
pub use mock_server::MockServerGenerator;
pub use openapi::EndpointDescriptor;
