use std::fmt;
use std::str::FromStr;

use prost_types::{FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};
use serde::Serialize;

use crate::naming;
use crate::Error;

/// How a dotted protobuf package maps onto the target language's scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamespaceStyle {
    /// `a.b.c` -> `a::b::c`
    #[default]
    Cpp,
    /// `a.b.c` -> `a/b/c`
    Path,
    /// `a.b.c` -> `a.b.c`
    Flat,
}

impl NamespaceStyle {
    pub fn apply(self, name: &str) -> String {
        match self {
            NamespaceStyle::Cpp => name.replace('.', "::"),
            NamespaceStyle::Path => name.replace('.', "/"),
            NamespaceStyle::Flat => name.to_string(),
        }
    }
}

impl FromStr for NamespaceStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpp" => Ok(NamespaceStyle::Cpp),
            "path" => Ok(NamespaceStyle::Path),
            "flat" => Ok(NamespaceStyle::Flat),
            _ => Err(Error::UnknownNamespaceStyle(s.to_string())),
        }
    }
}

impl fmt::Display for NamespaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamespaceStyle::Cpp => "cpp",
            NamespaceStyle::Path => "path",
            NamespaceStyle::Flat => "flat",
        };
        write!(f, "{}", name)
    }
}

/// One RPC method, as seen by templates.
///
/// Carries the descriptor fields templates use. `options` is not projected,
/// so `method.options` is undefined inside a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub input_type: String,
    pub output_type: String,
    pub client_streaming: bool,
    pub server_streaming: bool,
}

/// One RPC service, as seen by templates.
///
/// `options` is not projected, so `service.options` is undefined inside a
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub name: String,
    pub method: Vec<Method>,
}

impl From<&MethodDescriptorProto> for Method {
    fn from(method: &MethodDescriptorProto) -> Self {
        Method {
            name: method.name().to_string(),
            input_type: method.input_type().to_string(),
            output_type: method.output_type().to_string(),
            client_streaming: method.client_streaming(),
            server_streaming: method.server_streaming(),
        }
    }
}

impl From<&ServiceDescriptorProto> for Service {
    fn from(service: &ServiceDescriptorProto) -> Self {
        Service {
            name: service.name().to_string(),
            method: service.method.iter().map(Method::from).collect(),
        }
    }
}

/// Data handed to every template rendered for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub source_file: String,
    pub source_file_stem: String,
    pub package_prefix: String,
    pub namespace: String,
    pub services: Vec<Service>,
}

impl TemplateContext {
    pub fn build(file: &FileDescriptorProto, style: NamespaceStyle) -> Result<Self, Error> {
        let source_file = file.name();
        let package = file.package();

        Ok(TemplateContext {
            source_file: source_file.to_string(),
            source_file_stem: naming::stem(source_file)?.to_string(),
            package_prefix: package_prefix(package),
            namespace: style.apply(package),
            services: file.service.iter().map(Service::from).collect(),
        })
    }
}

/// "pkg.sub" -> "pkg.sub.", "" -> ""
pub fn package_prefix(package: &str) -> String {
    if package.is_empty() {
        String::new()
    } else {
        format!("{}.", package)
    }
}
