//! Core types, configuration, and errors for the agent toolkit.
//!
//! This crate provides the foundational types shared by the code generator
//! and the tool registry.
//!
//! # Architecture
//!
//! The core consists of:
//! - Closed domain enumerations (`ToolKind`, `HttpMethod`, `Modality`)
//! - A single error type with contextual variants
//! - Toolkit configuration (`ToolkitConfig`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub use config::{
    DEFAULT_COMPLETION_LANGUAGE, DEFAULT_MOCK_SERVER_PORT, ToolkitConfig, ToolkitConfigBuilder,
};
pub use error::{Error, Result};
pub use types::{HttpMethod, Modality, ToolKind};
