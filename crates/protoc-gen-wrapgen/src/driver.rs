use crate::prelude::{eprintln, *};
use log::debug;
use std::io::{self, Read, Write};
use wrapgen_core::config::Config;
use wrapgen_core::plugin;
use wrapgen_core::render::TemplateSet;

/// Read the request from stdin, generate, write the response to stdout.
pub fn run(app: &crate::App) -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("couldn't read CodeGeneratorRequest from stdin")?;

    let output = process(&input, app)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&output)
        .context("couldn't write CodeGeneratorResponse to stdout")?;
    stdout.flush().context("couldn't flush stdout")?;

    Ok(())
}

/// Turn request bytes into response bytes.
///
/// Any error means no output at all; protoc expects one complete response.
pub fn process(input: &[u8], app: &crate::App) -> Result<Vec<u8>> {
    debug!("read {} request bytes", input.len());

    let request = plugin::decode_request(input).context(
        "couldn't parse CodeGeneratorRequest, make sure you're using this as a plugin to protoc",
    )?;

    let config = app
        .base_config()
        .with_parameter(request.parameter())
        .context("invalid plugin configuration")?;

    let templates = load_templates(app, &config)?;

    let response = plugin::generate(&request, &config, &templates)
        .context("code generation failed")?;

    if app.verbose {
        eprintln!(
            "protoc-gen-wrapgen: mode={} skip_files_without_service={} namespace_style={}",
            config.mode, config.skip_files_without_service, config.namespace_style
        );
        for file in &response.file {
            eprintln!("protoc-gen-wrapgen:   - {}", file.name());
        }
    }

    Ok(plugin::encode_response(&response))
}

fn load_templates(app: &crate::App, config: &Config) -> Result<TemplateSet> {
    match &app.templates {
        Some(dir) => {
            let sources = crate::templates::read_dir(dir)
                .with_context(|| f!("couldn't load templates from {}", dir.display()))?;
            TemplateSet::from_sources(sources, config.namespace_style)
                .with_context(|| f!("invalid template in {}", dir.display()))
        }
        None => TemplateSet::embedded(config.namespace_style)
            .context("invalid embedded template"),
    }
}
