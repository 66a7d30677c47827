use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;

use crate::error::Result;

/// Decode a serialized `CodeGeneratorRequest` as written by protoc.
pub fn decode_request(bytes: &[u8]) -> Result<CodeGeneratorRequest> {
    let request = CodeGeneratorRequest::decode(bytes)?;

    tracing::debug!(
        files = request.proto_file.len(),
        generate = ?request.file_to_generate,
        parameter = request.parameter(),
        "decoded code generator request"
    );

    Ok(request)
}
