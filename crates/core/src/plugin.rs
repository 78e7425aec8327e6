//! Whole-run driver over the protoc plugin messages.

use log::info;
use prost::Message;
use prost_types::compiler::code_generator_response::Feature;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

use crate::config::Config;
use crate::generator::FileGenerator;
use crate::render::Renderer;
use crate::Error;

/// Optional compiler features the plugin declares on every response.
pub const SUPPORTED_FEATURES: u64 = Feature::Proto3Optional as u64;

pub fn decode_request(bytes: &[u8]) -> Result<CodeGeneratorRequest, Error> {
    Ok(CodeGeneratorRequest::decode(bytes)?)
}

pub fn encode_response(response: &CodeGeneratorResponse) -> Vec<u8> {
    response.encode_to_vec()
}

/// Run the generator over every file of the request, in request order.
///
/// The first error aborts the run; there is no partial response.
pub fn generate<R: Renderer + ?Sized>(
    request: &CodeGeneratorRequest,
    config: &Config,
    renderer: &R,
) -> Result<CodeGeneratorResponse, Error> {
    let mut files = Vec::new();
    for proto_file in &request.proto_file {
        FileGenerator::new(proto_file, config, renderer).run(&mut files)?;
    }

    info!(
        "generated {} file(s) from {} input file(s) in {} mode",
        files.len(),
        request.proto_file.len(),
        config.mode
    );

    Ok(CodeGeneratorResponse {
        supported_features: Some(SUPPORTED_FEATURES),
        file: files,
        ..Default::default()
    })
}
