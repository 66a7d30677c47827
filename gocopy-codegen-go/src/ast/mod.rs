//! Go AST builders for generated files and methods.
//!
//! These provide a high-level API for constructing Go syntax,
//! which can then be rendered via CodeBuilder.

mod go_file;
mod method;

pub use go_file::GoFile;
pub use method::{Method, Param};
