//! Core utilities and types for the protoc-gen-go-copy generator.
//!
//! This crate provides the Go naming rules shared by descriptor conversion
//! and code generation, plus the output file abstraction used when generated
//! files are written straight to disk.

mod file;
mod naming;

// File operations
pub use file::{OutputFile, WriteResult};
// Go naming
pub use naming::{GO_KEYWORDS, GO_PREDECLARED, go_camel_case, go_sanitized};
