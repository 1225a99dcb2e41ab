//! Mock server code generation.
//!
//! Renders [`EndpointDescriptor`](crate::openapi::EndpointDescriptor)s into
//! the source text of a Flask mock server: a fixed preamble, one route
//! handler per endpoint, and a startup epilogue.
//!
//! # Output Layout
//!
//! ```text
//! # AI生成的Mock服务器
//! from flask import Flask, jsonify
//!
//! app = Flask(__name__)
//!
//! @app.route("/users", methods=["GET"])   <- one block per endpoint,
//! def mock_get_users():                      separated by a blank line
//!     ...
//!
//! if __name__ == "__main__":
//!     ...
//! ```
//!
//! Nothing is written to disk and no server is started; the result is a
//! plain string.

pub mod generator;
pub mod types;

pub use generator::{MockServerGenerator, handler_name};
pub use types::{RouteContext, ServerContext};
