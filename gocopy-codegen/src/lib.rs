//! Shared code generation utilities for the protoc-gen-go-copy generator.
//!
//! This crate provides language-agnostic building blocks used by the
//! Go emitter in `gocopy-codegen-go`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector)

pub mod builder;
pub mod generation;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::ImportCollector;
