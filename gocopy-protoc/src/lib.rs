//! protoc plugin plumbing for protoc-gen-go-copy.
//!
//! This crate speaks the protoc plugin protocol and turns the raw descriptors
//! of a `CodeGeneratorRequest` into the [`gocopy_ir`] model, applying the Go
//! naming rules of protoc-gen-go along the way:
//!
//! - [`decode_request`] / [`encode_response`]: the wire side
//! - [`PluginParams`]: the `--go-copy_opt` parameter string
//! - [`convert`]: descriptors to [`gocopy_ir::File`]s

mod convert;
mod error;
mod naming;
mod package;
mod params;
mod request;
mod response;

pub use convert::convert;
pub use error::{Error, Result};
pub use package::{GoPackage, generated_filename_prefix, resolve_packages};
pub use params::{PathType, PluginParams};
pub use request::decode_request;
pub use response::{encode_response, error_response, strip_module_prefix, success_response};
