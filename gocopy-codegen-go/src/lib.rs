//! Go code generation for protoc-gen-go-copy.
//!
//! For every message of the files it is handed, the [`Generator`] emits a
//! getter-based shallow copy method and a nil-safe shallow clone method.
//!
//! # Module Organization
//!
//! - [`resolver`] - Run-scoped type registry and field list cache
//! - [`model`] - Field list with oneofs collapsed into holder fields
//! - [`emit`] - The copy and clone method emitters
//! - [`ast`] - Go file and method builders
//! - [`format`] - Formatting backends

mod config;
mod error;
mod generator;
mod types;

pub mod ast;
pub mod emit;
pub mod format;
pub mod model;
pub mod resolver;

pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use format::{FormatError, Formatter, Gofmt, SyntaxCheck};
pub use generator::Generator;
pub use model::{DefaultTest, Getter, ModelField, ModelFieldKind, OneOfVariant};
pub use resolver::Resolver;
pub use types::GoTypes;
