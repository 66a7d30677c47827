//! Descriptor model for the protoc-gen-go-copy generator.
//!
//! This crate provides the read-only view of the schema that the generator
//! consumes: files, messages, fields, oneofs and enums, with every Go name
//! already decided. It is produced from a plugin request by `gocopy-protoc`.
//!
//! # Architecture
//!
//! ```text
//! CodeGeneratorRequest → gocopy-protoc (naming) → gocopy-ir (descriptors) → gocopy-codegen-go
//! ```
//!
//! Type references between messages are kept as fully-qualified protobuf
//! names; resolving them to Go types is the generator's job.

mod descriptor;
mod types;

pub use descriptor::{Cardinality, Enum, Field, FieldKind, File, Message, Oneof};
pub use types::{GoIdent, GoImportPath, GoType};
