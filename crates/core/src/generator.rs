//! Per-file generation
//!
//! For one input file the generator renders every output the mode requires
//! when the file declares services. Otherwise it either skips the file or
//! writes a fixed stub for every output, depending on the run configuration.
//! Which outputs exist never depends on what the services contain.

use log::debug;
use prost_types::compiler::code_generator_response::File;
use prost_types::FileDescriptorProto;

use crate::config::Config;
use crate::context::TemplateContext;
use crate::naming;
use crate::render::Renderer;
use crate::Error;

/// Content of every output generated for a file without services.
pub const EMPTY_FILE_STUB: &str =
    "// THIS FILE IS AUTOGENERATED, DO NOT EDIT!\n\n// This file is empty intentionally\n";

/// What happens to a single input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Render,
    Stub,
    Skip,
}

pub fn decide(file: &FileDescriptorProto, config: &Config) -> Decision {
    if !file.service.is_empty() {
        Decision::Render
    } else if config.skip_files_without_service {
        Decision::Skip
    } else {
        Decision::Stub
    }
}

pub struct FileGenerator<'a, R: Renderer + ?Sized> {
    file: &'a FileDescriptorProto,
    config: &'a Config,
    renderer: &'a R,
}

impl<'a, R: Renderer + ?Sized> FileGenerator<'a, R> {
    pub fn new(file: &'a FileDescriptorProto, config: &'a Config, renderer: &'a R) -> Self {
        FileGenerator {
            file,
            config,
            renderer,
        }
    }

    /// Append this file's outputs to `out`.
    ///
    /// Nothing is appended when an error is returned.
    pub fn run(&self, out: &mut Vec<File>) -> Result<(), Error> {
        let files = match decide(self.file, self.config) {
            Decision::Render => self.render()?,
            Decision::Stub => self.stub()?,
            Decision::Skip => Vec::new(),
        };

        debug!("{}: {} output file(s)", self.file.name(), files.len());
        out.extend(files);
        Ok(())
    }

    fn render(&self) -> Result<Vec<File>, Error> {
        let context = TemplateContext::build(self.file, self.config.namespace_style)?;

        self.config
            .mode
            .outputs()
            .map(|(category, extension)| -> Result<File, Error> {
                let template = naming::template_id(category, extension);
                let content = self.renderer.render(&template, &context)?;
                Ok(output_file(
                    naming::destination(self.file.name(), category, extension)?,
                    content,
                ))
            })
            .collect()
    }

    fn stub(&self) -> Result<Vec<File>, Error> {
        self.config
            .mode
            .outputs()
            .map(|(category, extension)| -> Result<File, Error> {
                Ok(output_file(
                    naming::destination(self.file.name(), category, extension)?,
                    EMPTY_FILE_STUB.to_string(),
                ))
            })
            .collect()
    }
}

fn output_file(name: String, content: String) -> File {
    File {
        name: Some(name),
        content: Some(content),
        ..Default::default()
    }
}
