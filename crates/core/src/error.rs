use thiserror::Error;

/// Errors produced while configuring or running the generator.
///
/// None of these are recoverable per file: any of them aborts the whole run
/// and no response is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed input: file name {0:?} does not end with \".proto\"")]
    MalformedInput(String),

    #[error("Unknown mode: {0} (expected one of: service, client, both)")]
    UnknownMode(String),

    #[error("Unknown namespace style: {0} (expected one of: cpp, path, flat)")]
    UnknownNamespaceStyle(String),

    #[error("Invalid plugin parameter: {0}")]
    InvalidParameter(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid template {name}")]
    InvalidTemplate {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to render template {template}")]
    Render {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to decode CodeGeneratorRequest")]
    Decode(#[from] prost::DecodeError),
}
