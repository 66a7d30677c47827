//! Building and encoding the `CodeGeneratorResponse`.

use gocopy_core::OutputFile;
use prost::Message;
use prost_types::compiler::{
    CodeGeneratorResponse,
    code_generator_response::{Feature, File},
};

use crate::error::{Error, Result};

/// Build a response carrying the generated files.
pub fn success_response(files: Vec<OutputFile>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        file: files
            .into_iter()
            .map(|file| {
                let (name, content) = file.into_parts();
                File {
                    name: Some(name),
                    content: Some(content),
                    ..Default::default()
                }
            })
            .collect(),
        ..Default::default()
    }
}

/// Build a response reporting a generation failure to protoc.
pub fn error_response(message: impl Into<String>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        error: Some(message.into()),
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    }
}

/// Serialize a response for protoc.
pub fn encode_response(response: &CodeGeneratorResponse) -> Vec<u8> {
    response.encode_to_vec()
}

/// Strip `<module>/` from every file name.
///
/// Every file must live below the module, otherwise nothing is renamed.
pub fn strip_module_prefix(files: &mut [OutputFile], module: &str) -> Result<()> {
    let prefix = format!("{}/", module);

    if let Some(outside) = files.iter().find(|f| !f.name().starts_with(&prefix)) {
        return Err(Error::ModulePrefix {
            file: outside.name().to_string(),
            module: module.to_string(),
        });
    }

    for file in files.iter_mut() {
        let stripped = file.name()[prefix.len()..].to_string();
        file.rename(stripped);
    }

    Ok(())
}
