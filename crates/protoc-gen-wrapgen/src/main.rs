use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use wrapgen_core::config::Config;
use wrapgen_core::context::NamespaceStyle;
use wrapgen_core::mode::Mode;

mod driver;
mod error;
mod prelude;
mod templates;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "protoc plugin that renders client and service wrappers for gRPC services.\n\n\
                  Reads a CodeGeneratorRequest from stdin and writes a CodeGeneratorResponse \
                  to stdout. Options can also be passed through protoc with \
                  --wrapgen_opt=mode=client,skip_files_without_service=false"
)]
pub struct App {
    /// Which wrappers to generate (service, client or both)
    #[clap(long, env = "WRAPGEN_MODE", default_value = "both")]
    mode: Mode,

    /// Generate nothing for files that declare no services; when false, empty stubs are written
    #[clap(
        long,
        env = "WRAPGEN_SKIP_FILES_WITHOUT_SERVICE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    skip_files_without_service: bool,

    /// How protobuf packages map to namespaces (cpp, path or flat)
    #[clap(long, env = "WRAPGEN_NAMESPACE_STYLE", default_value = "cpp")]
    namespace_style: NamespaceStyle,

    /// Directory holding `<template-id>.jinja` files; the embedded templates are used when unset
    #[clap(long, env = "WRAPGEN_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Whether to display additional information on stderr.
    #[clap(long, env = "WRAPGEN_VERBOSE", default_value = "false")]
    verbose: bool,
}

impl App {
    /// Configuration before the plugin parameter of the request is applied.
    pub fn base_config(&self) -> Config {
        Config {
            mode: self.mode,
            skip_files_without_service: self.skip_files_without_service,
            namespace_style: self.namespace_style,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    driver::run(&app).map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
