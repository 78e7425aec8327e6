//! Core library for protoc-gen-wrapgen
//!
//! This crate implements the **Functional Core** of the `protoc-gen-wrapgen`
//! plugin, following the Functional Core - Imperative Shell architectural
//! pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`wrapgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`protoc-gen-wrapgen`**: stdin/stdout wiring, configuration and template
//!   directory loading (the Imperative Shell)
//!
//! Data flows one way through the core:
//!
//! ```text
//! request bytes -> CodeGeneratorRequest -> per-file generation -> CodeGeneratorResponse -> bytes
//! ```
//!
//! # Module Organization
//!
//! - [`mode`]: Which output categories exist for a run
//! - [`naming`]: Output file names and template identifiers
//! - [`context`]: Projection of a file descriptor into template data
//! - [`render`]: The render capability and its minijinja-backed template set
//! - [`config`]: The immutable run configuration and plugin parameter parsing
//! - [`generator`]: The per-file render / stub / skip decision
//! - [`plugin`]: Request decoding, response encoding and the whole-run driver
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use wrapgen_core::{config::Config, plugin, render::TemplateSet};
//!
//! let request = plugin::decode_request(&bytes)?;
//! let config = Config::default().with_parameter(request.parameter())?;
//! let templates = TemplateSet::embedded(config.namespace_style)?;
//!
//! let response = plugin::generate(&request, &config, &templates)?;
//! let output = plugin::encode_response(&response);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod mode;
pub mod naming;
pub mod plugin;
pub mod render;

pub use error::Error;
